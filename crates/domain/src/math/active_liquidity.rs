use crate::entities::position::Position;

/// Sums the liquidity of the positions that are in range at `current_tick`.
///
/// Uses saturating addition; a single position is at most `u128::MAX`.
pub fn active_liquidity(positions: &[Position], current_tick: i32) -> u128 {
    positions
        .iter()
        .filter(|p| p.is_active(current_tick))
        .fold(0u128, |acc, p| acc.saturating_add(p.liquidity))
}

/// Share of the pool's active liquidity, in percent.
///
/// Returns exactly `0.0` when the pool has no liquidity. The result is not
/// clamped to 100.
pub fn depth_percentage(active: u128, pool_liquidity: u128) -> f64 {
    if pool_liquidity == 0 {
        return 0.0;
    }
    active as f64 / pool_liquidity as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::token::Address;
    use crate::fees::FeeTier;

    fn position(tick_lower: i32, tick_upper: i32, liquidity: u128) -> Position {
        Position {
            token0: Address::from_bytes([1; 20]),
            token1: Address::from_bytes([2; 20]),
            fee_tier: FeeTier::MEDIUM,
            tick_lower,
            tick_upper,
            liquidity,
        }
    }

    #[test]
    fn test_single_position_in_range() {
        let positions = [position(-100, 100, 500)];
        let active = active_liquidity(&positions, 0);
        assert_eq!(active, 500);
        assert_eq!(depth_percentage(active, 1000), 50.0);
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        let positions = [position(-100, 100, 500)];
        assert_eq!(active_liquidity(&positions, 100), 0);
        assert_eq!(active_liquidity(&positions, -100), 500);
    }

    #[test]
    fn test_sums_only_active_positions() {
        let positions = [
            position(-100, 100, 500),
            position(0, 50, 250),
            position(50, 200, 1_000),
            position(-500, -100, 7),
        ];
        assert_eq!(active_liquidity(&positions, 10), 750);
        assert_eq!(active_liquidity(&positions, 50), 1_500);
        assert_eq!(active_liquidity(&positions, -100), 500);
    }

    #[test]
    fn test_empty_positions() {
        assert_eq!(active_liquidity(&[], 0), 0);
    }

    #[test]
    fn test_zero_pool_liquidity() {
        assert_eq!(depth_percentage(500, 0), 0.0);
        assert_eq!(depth_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_not_clamped() {
        assert_eq!(depth_percentage(300, 100), 300.0);
    }

    #[test]
    fn test_wide_values_saturate() {
        let positions = [position(-1, 1, u128::MAX), position(-1, 1, 1)];
        assert_eq!(active_liquidity(&positions, 0), u128::MAX);
    }
}
