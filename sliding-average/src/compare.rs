use crate::{
    method::{Method, MovingAverage, Naive, SlidingWindow},
    window::WindowSize,
};
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Closeness bounds used when comparing two averages.
///
/// Two values are considered equal if they are within `absolute` of each other, or within
/// `relative` of the larger magnitude.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(default)]
pub struct Tolerance {
    pub relative: f64,
    pub absolute: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: 1e-9,
            absolute: 1e-12,
        }
    }
}

impl Tolerance {
    /// Two NaNs compare equal, as do infinities of the same sign.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return a.is_nan() && b.is_nan();
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }

        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

/// Outputs of both moving average methods over the same input, and where they disagree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Comparison {
    pub window: WindowSize,
    pub naive: Vec<f64>,
    pub optimized: Vec<f64>,
    /// Largest absolute difference between finite pairs.
    pub max_abs_deviation: f64,
    /// Indices where the pair is not equal within tolerance, including indices present in
    /// only one output.
    pub mismatches: Vec<usize>,
}

impl Comparison {
    pub fn is_equivalent(&self) -> bool {
        self.naive.len() == self.optimized.len() && self.mismatches.is_empty()
    }

    /// Averages produced by `method`.
    pub fn output(&self, method: Method) -> &[f64] {
        match method {
            Method::Naive => &self.naive,
            Method::Optimized => &self.optimized,
        }
    }
}

/// Run both moving average methods over `data` and compare their outputs.
pub fn compare(data: &[f64], window: WindowSize, tolerance: Tolerance) -> Comparison {
    let naive = Naive.calculate(data, window);
    let optimized = SlidingWindow.calculate(data, window);

    let mut max_abs_deviation = 0.0_f64;
    let mut mismatches = Vec::new();

    for (index, pair) in naive.iter().zip_longest(&optimized).enumerate() {
        match pair {
            EitherOrBoth::Both(&a, &b) => {
                if a.is_finite() && b.is_finite() {
                    max_abs_deviation = max_abs_deviation.max((a - b).abs());
                }
                if !tolerance.approx_eq(a, b) {
                    mismatches.push(index);
                }
            }
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => mismatches.push(index),
        }
    }

    if mismatches.is_empty() {
        debug!(
            %window,
            outputs = naive.len(),
            max_abs_deviation,
            "moving average methods agree"
        );
    } else {
        warn!(
            %window,
            outputs = naive.len(),
            mismatches = mismatches.len(),
            first_mismatch = mismatches[0],
            "moving average methods diverge"
        );
    }

    Comparison {
        window,
        naive,
        optimized,
        max_abs_deviation,
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_approx_eq() {
        struct TestCase {
            a: f64,
            b: f64,
            expected: bool,
        }

        let tolerance = Tolerance::default();
        let cases = vec![
            // TC0: identical
            TestCase {
                a: 11.0,
                b: 11.0,
                expected: true,
            },
            // TC1: within relative tolerance
            TestCase {
                a: 1_000_000.0,
                b: 1_000_000.000_000_1,
                expected: true,
            },
            // TC2: outside relative tolerance
            TestCase {
                a: 1.0,
                b: 1.000_001,
                expected: false,
            },
            // TC3: near zero uses absolute tolerance
            TestCase {
                a: 0.0,
                b: 1e-13,
                expected: true,
            },
            // TC4: both NaN
            TestCase {
                a: f64::NAN,
                b: f64::NAN,
                expected: true,
            },
            // TC5: NaN against a number
            TestCase {
                a: f64::NAN,
                b: 1.0,
                expected: false,
            },
            // TC6: same sign infinities
            TestCase {
                a: f64::INFINITY,
                b: f64::INFINITY,
                expected: true,
            },
            // TC7: opposite sign infinities
            TestCase {
                a: f64::INFINITY,
                b: f64::NEG_INFINITY,
                expected: false,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = tolerance.approx_eq(test.a, test.b);
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_compare_sample_is_equivalent() {
        let data = [10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0, 18.0, 17.0];
        let comparison = compare(&data, WindowSize::new(3).unwrap(), Tolerance::default());

        assert!(comparison.is_equivalent());
        assert_eq!(comparison.naive.len(), 7);
        assert_eq!(comparison.naive, comparison.optimized);
        assert_eq!(comparison.max_abs_deviation, 0.0);
    }

    #[test]
    fn test_comparison_output_per_method() {
        let data = [1.0, f64::NAN, 3.0, 5.0, 7.0];
        let window = WindowSize::new(2).unwrap();
        let comparison = compare(&data, window, Tolerance::default());

        for method in Method::ALL {
            let expected = method.calculate(&data, window);
            let actual = comparison.output(method);

            assert_eq!(actual.len(), expected.len(), "{method} failed");
            for (a, b) in actual.iter().zip(&expected) {
                assert!(
                    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()),
                    "{method} failed"
                );
            }
        }
    }

    #[test]
    fn test_compare_nan_diverges_after_leaving_window() {
        let data = [1.0, f64::NAN, 3.0, 5.0, 7.0];
        let comparison = compare(&data, WindowSize::new(2).unwrap(), Tolerance::default());

        assert!(!comparison.is_equivalent());
        assert_eq!(comparison.mismatches, vec![2, 3]);
    }

    #[test]
    fn test_compare_insufficient_data() {
        let comparison = compare(&[1.0], WindowSize::new(2).unwrap(), Tolerance::default());
        assert!(comparison.naive.is_empty());
        assert!(comparison.optimized.is_empty());
        assert!(comparison.is_equivalent());
    }
}
