use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire regression crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    /// A training setting is out of its valid range.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// Polynomial augmentation was requested with a degree below one.
    InvalidDegree { degree: usize },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    /// An operation that averages over the dataset was given no points.
    EmptyDataset,
    InvalidInput(&'static str),
    ParamGenExhausted {
        got: usize,
        expected: usize,
    },
    /// A random initializer could not be built from the given parameters.
    InitErr(String),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration for {field}: {reason}")
            }
            RegressionErr::InvalidDegree { degree } => {
                write!(f, "polynomial degree must be at least 1, got {degree}")
            }
            RegressionErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            RegressionErr::EmptyDataset => write!(f, "the dataset has no data points"),
            RegressionErr::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            RegressionErr::ParamGenExhausted { got, expected } => write!(
                f,
                "the parameter generator ran out after {got} of {expected} parameters"
            ),
            RegressionErr::InitErr(msg) => write!(f, "failed to build initializer: {msg}"),
        }
    }
}

impl Error for RegressionErr {}
