#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]

//! Moving averages over a fixed-size window of `f64` values.
//!
//! Two interchangeable methods are provided behind the [`MovingAverage`] trait:
//! * [`Naive`]: re-sums every window, O(n·k).
//! * [`SlidingWindow`]: keeps a running window sum, adding the entering value and
//!   subtracting the leaving one, O(n).
//!
//! Both produce `max(0, n - k + 1)` averages, where element `i` is the mean of
//! `data[i..i + k]`, and agree within floating-point tolerance. See [`compare`] for checking
//! that agreement, and [`report`] for rendering results.
//!
//! ## Example
//! ```
//! use sliding_average::{moving_average_naive, moving_average_optimized};
//!
//! let data = [10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0, 18.0, 17.0];
//!
//! let naive = moving_average_naive(&data, 3).unwrap();
//! let optimized = moving_average_optimized(&data, 3).unwrap();
//!
//! assert_eq!(naive, vec![11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
//! assert_eq!(naive, optimized);
//! assert!(moving_average_optimized(&data, 0).is_err());
//! ```

/// Equivalence checks between the two methods.
pub mod compare;

/// JSON configuration for demonstration runs.
pub mod config;

/// All errors generated in `sliding-average`.
pub mod error;

/// `tracing` subscriber initialisation.
pub mod logging;

/// [`MovingAverage`] trait and its implementations.
pub mod method;

/// O(n·k) re-summing moving average.
pub mod naive;

/// Fixed precision rendering of results into an output sink.
pub mod report;

/// O(n) running sum moving average.
pub mod sliding;

/// Validated window size.
pub mod window;

pub use error::AverageError;
pub use method::{
    Method, MovingAverage, Naive, SlidingWindow, moving_average_naive, moving_average_optimized,
};
pub use window::WindowSize;
