//! Fixed-capacity FIFO window for trailing averages.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of samples retained: 72 one-minute samples.
pub const DEFAULT_WINDOW_CAPACITY: usize = 72;

/// Trailing window of percentage samples, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// Creates an empty window.
    ///
    /// # Errors
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::ZeroWindowCapacity);
        }
        Ok(Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends a sample, evicting the oldest one first when full.
    /// Returns the evicted sample, if any.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    /// Pushes a sample and returns the updated average.
    pub fn push_and_average(&mut self, value: f64) -> f64 {
        self.push(value);
        self.average()
    }

    /// Arithmetic mean of the retained samples, `0.0` when empty.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self {
            values: VecDeque::with_capacity(DEFAULT_WINDOW_CAPACITY),
            capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}
