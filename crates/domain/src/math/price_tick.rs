use ethers::types::U256;

/// 2^96, the fixed-point scale of `sqrtPriceX96`.
const Q96: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Converts a 256-bit unsigned integer to the nearest `f64`.
pub fn u256_to_f64(value: U256) -> f64 {
    value
        .0
        .iter()
        .rev()
        .fold(0.0, |acc, limb| acc * 18_446_744_073_709_551_616.0 + *limb as f64)
}

/// Returns the price of token0 denominated in token1.
/// P = (sqrtPriceX96 / 2^96)^2 * 10^(decimals0 - decimals1)
pub fn sqrt_price_x96_to_price(sqrt_price_x96: U256, decimals0: u8, decimals1: u8) -> f64 {
    let sqrt_price = u256_to_f64(sqrt_price_x96) / Q96;
    let raw = sqrt_price * sqrt_price;
    raw * 10f64.powi(i32::from(decimals0) - i32::from(decimals1))
}
