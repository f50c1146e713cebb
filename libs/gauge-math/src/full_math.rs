use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator, or None on a zero denominator or a
/// result that does not fit in u128
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128()
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    let result = mul_div(env, a, b, denominator)?;

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let remainder = product.rem_euclid(&U256::from_u128(env, denominator));

    if remainder.gt(&U256::from_u32(env, 0)) {
        result.checked_add(1)
    } else {
        Some(result)
    }
}
