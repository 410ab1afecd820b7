use crate::{compare::Tolerance, error::AverageError, method::Method, window::WindowSize};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, num::NonZeroUsize, path::Path};

/// Sequence averaged by the default demonstration.
pub const SAMPLE_DATA: [f64; 9] = [10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0, 18.0, 17.0];

const DEFAULT_WINDOW: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(window) => window,
    None => panic!("default window must be non-zero"),
};

/// Configuration for a moving average demonstration run.
///
/// Any field missing from a JSON config falls back to [`DemoConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Values to average.
    pub data: Vec<f64>,

    /// Number of values in each window.
    pub window: WindowSize,

    /// Fractional digits printed for every value.
    pub precision: usize,

    /// Methods to run, in print order.
    pub methods: Vec<Method>,

    /// Bounds used when checking the methods agree.
    pub tolerance: Tolerance,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data: SAMPLE_DATA.to_vec(),
            window: WindowSize::from(DEFAULT_WINDOW),
            precision: 2,
            methods: Method::ALL.to_vec(),
            tolerance: Tolerance::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_json_str(input: &str) -> Result<Self, AverageError> {
        serde_json::from_str(input).map_err(AverageError::from)
    }

    pub fn load<P>(path: P) -> Result<Self, AverageError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| AverageError::ConfigIo {
            path: path.to_path_buf(),
            error,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(AverageError::from)
    }
}
