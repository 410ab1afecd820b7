use crate::error::AverageError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of consecutive values averaged together. Always at least one.
///
/// Raw integers are validated on construction, so the moving average functions never see a
/// zero or negative window.
///
/// ```
/// use sliding_average::window::WindowSize;
///
/// let window = WindowSize::new(3).unwrap();
/// assert_eq!(window.output_len(9), 7);
/// assert!(WindowSize::try_from(-2_i64).is_err());
/// ```
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, Deserialize, Serialize,
)]
#[serde(try_from = "i64", into = "usize")]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    pub fn new(window: usize) -> Result<Self, AverageError> {
        NonZeroUsize::new(window)
            .map(Self)
            .ok_or(AverageError::InvalidWindow { window: 0 })
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Window size as the divisor applied to each window sum.
    pub fn as_f64(&self) -> f64 {
        self.0.get() as f64
    }

    /// Number of complete windows that fit in a sequence of length `len`.
    pub fn output_len(&self, len: usize) -> usize {
        match len < self.get() {
            true => 0,
            false => len - self.get() + 1,
        }
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = AverageError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for WindowSize {
    type Error = AverageError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(AverageError::InvalidWindow { window: value })
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl From<WindowSize> for usize {
    fn from(value: WindowSize) -> Self {
        value.get()
    }
}
