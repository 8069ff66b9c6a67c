use crate::error::DomainError;
use ethers::types::H160;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 20-byte account or contract address.
///
/// Parsing is case-insensitive and the `0x` prefix is optional; display is
/// always lowercase with the prefix, so two spellings of the same address
/// compare and print identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub H160);

impl Address {
    /// The all-zero address, used by registries to signal "not found".
    pub const ZERO: Self = Self(H160([0u8; 20]));

    /// Builds an address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(H160(bytes))
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        self.0.as_fixed_bytes()
    }

    /// Returns true for the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<H160> for Address {
    fn from(value: H160) -> Self {
        Self(value)
    }
}

impl From<Address> for H160 {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl FromStr for Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 40 {
            return Err(DomainError::InvalidAddress(s.to_string()));
        }
        digits
            .parse::<H160>()
            .map(Self)
            .map_err(|_| DomainError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// The configured token pair, in the order the operator supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub token_a: Address,
    pub token_b: Address,
}

impl TokenPair {
    pub fn new(token_a: Address, token_b: Address) -> Self {
        Self { token_a, token_b }
    }

    /// Returns the pair sorted the way the factory keys pools: smaller address first.
    #[must_use]
    pub fn sorted(&self) -> (Address, Address) {
        if self.token_a <= self.token_b {
            (self.token_a, self.token_b)
        } else {
            (self.token_b, self.token_a)
        }
    }

    /// Checks whether `(x, y)` is this pair in either order.
    #[must_use]
    pub fn matches(&self, x: &Address, y: &Address) -> bool {
        (self.token_a == *x && self.token_b == *y) || (self.token_a == *y && self.token_b == *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper: Address = WETH.parse().unwrap();
        let lower: Address = WETH.to_lowercase().parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), WETH.to_lowercase());
    }

    #[test]
    fn test_parse_without_prefix() {
        let a: Address = USDC.trim_start_matches("0x").parse().unwrap();
        assert_eq!(a.to_string(), USDC);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xzz0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".parse::<Address>().is_err());
        assert!("0xzzb86991c6218b36c1d19d4a2e9eb0ce3606eb48".parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn test_pair_sorted_and_matches() {
        let weth: Address = WETH.parse().unwrap();
        let usdc: Address = USDC.parse().unwrap();
        let pair = TokenPair::new(weth, usdc);

        // 0xa0b8... < 0xc02a...
        assert_eq!(pair.sorted(), (usdc, weth));
        assert!(pair.matches(&usdc, &weth));
        assert!(pair.matches(&weth, &usdc));
        assert!(!pair.matches(&weth, &weth));
    }

    #[test]
    fn test_display_is_full_lowercase_hex() {
        let a = Address::from_bytes([0xab; 20]);
        assert_eq!(a.to_string(), format!("0x{}", "ab".repeat(20)));
        assert_eq!(Address::from(H160::from(a)), a);
    }

    #[test]
    fn test_zero_address() {
        let zero: Address = "0x0000000000000000000000000000000000000000".parse().unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero, Address::ZERO);
    }
}
