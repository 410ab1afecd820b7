use crate::{error::AverageError, naive, sliding, window::WindowSize};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Computes the moving average of a sequence over a fixed window.
///
/// Implementations must agree with each other within floating-point tolerance, so callers
/// (and tests) can swap one for another freely.
pub trait MovingAverage {
    /// Human readable name, eg/ "Naive".
    fn name(&self) -> &'static str;

    /// Asymptotic cost, eg/ "O(n*k)".
    fn complexity(&self) -> &'static str;

    /// Label used when announcing a calculation, eg/ "Naive (O(n*k))".
    fn label(&self) -> String {
        format!("{} ({})", self.name(), self.complexity())
    }

    fn calculate(&self, data: &[f64], window: WindowSize) -> Vec<f64>;

    /// Validate a raw window size and calculate the moving average.
    fn try_calculate(&self, data: &[f64], window: usize) -> Result<Vec<f64>, AverageError> {
        let window = WindowSize::new(window)?;
        let averages = self.calculate(data, window);
        debug!(
            method = self.name(),
            %window,
            len = data.len(),
            outputs = averages.len(),
            "calculated moving average"
        );
        Ok(averages)
    }
}

/// Re-sums every window. See [`naive::calculate`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Naive;

impl MovingAverage for Naive {
    fn name(&self) -> &'static str {
        "Naive"
    }

    fn complexity(&self) -> &'static str {
        "O(n*k)"
    }

    fn calculate(&self, data: &[f64], window: WindowSize) -> Vec<f64> {
        naive::calculate(data, window)
    }
}

/// Maintains a running window sum. See [`sliding::calculate`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SlidingWindow;

impl MovingAverage for SlidingWindow {
    fn name(&self) -> &'static str {
        "Optimized"
    }

    fn complexity(&self) -> &'static str {
        "O(n)"
    }

    fn label(&self) -> String {
        format!("{} ({}) 'Sliding Window'", self.name(), self.complexity())
    }

    fn calculate(&self, data: &[f64], window: WindowSize) -> Vec<f64> {
        sliding::calculate(data, window)
    }
}

/// Serialisable selector over the available [`MovingAverage`] implementations.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[display("naive")]
    Naive,
    #[display("optimized")]
    #[serde(alias = "sliding_window")]
    Optimized,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Naive, Method::Optimized];
}

impl MovingAverage for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Naive => Naive.name(),
            Method::Optimized => SlidingWindow.name(),
        }
    }

    fn complexity(&self) -> &'static str {
        match self {
            Method::Naive => Naive.complexity(),
            Method::Optimized => SlidingWindow.complexity(),
        }
    }

    fn label(&self) -> String {
        match self {
            Method::Naive => Naive.label(),
            Method::Optimized => SlidingWindow.label(),
        }
    }

    fn calculate(&self, data: &[f64], window: WindowSize) -> Vec<f64> {
        match self {
            Method::Naive => Naive.calculate(data, window),
            Method::Optimized => SlidingWindow.calculate(data, window),
        }
    }
}

/// Moving average of `data` over `window` values, re-summing every window.
///
/// Fails with [`AverageError::InvalidWindow`] if `window` is zero.
pub fn moving_average_naive(data: &[f64], window: usize) -> Result<Vec<f64>, AverageError> {
    Naive.try_calculate(data, window)
}

/// Moving average of `data` over `window` values, using a running window sum.
///
/// Fails with [`AverageError::InvalidWindow`] if `window` is zero.
pub fn moving_average_optimized(data: &[f64], window: usize) -> Result<Vec<f64>, AverageError> {
    SlidingWindow.try_calculate(data, window)
}
