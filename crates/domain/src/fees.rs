use serde::{Deserialize, Serialize};
use std::fmt;

/// Pool fee tier in hundredths of a basis point (3000 = 0.30%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeTier(pub u32);

impl FeeTier {
    /// 0.05% tier.
    pub const LOW: Self = Self(500);
    /// 0.30% tier.
    pub const MEDIUM: Self = Self(3000);
    /// 1.00% tier.
    pub const HIGH: Self = Self(10_000);

    /// Returns the raw fee value as encoded on-chain (uint24).
    #[must_use]
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
