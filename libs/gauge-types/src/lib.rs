#![no_std]

mod asset;
mod migration;

pub use asset::*;
pub use migration::*;

/// Fixed-point unit of the scaling factor (1e18)
///
/// A gauge that was never migrated carries exactly this factor, which makes
/// the share-to-asset conversion the identity.
pub const SCALING_UNIT: i128 = 1_000_000_000_000_000_000;
