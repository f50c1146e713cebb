// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the liquidity gauge: share/asset conversion and ledger access
// control.
//
// STRUCTURE:
//
// - scaling_specs.rs : Conversion rounding and factor derivation
// - ledger_specs.rs  : Withdraw bounds, ownership handover, admin gating
//
// USAGE:
// - Unit tests: cargo test -p liquidity-gauge
// - Certora build: cargo build --features certora -p liquidity-gauge
// - Verification: certoraSorobanProver liquidity_gauge.conf
//
// ============================================================================

pub mod ledger_specs;
pub mod scaling_specs;
