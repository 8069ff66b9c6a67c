use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage value, displayed with two decimals and a `%` marker.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Percentage(pub f64);

impl Percentage {
    pub const ZERO: Self = Self(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Percentage {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
