use thiserror::Error;

/// Errors returned when building a frequency distribution.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("sample contains no observations")]
    EmptySample,
    #[error("sample contains a non-finite value: {0}")]
    NonFinite(f64),
    #[error("the value {0} is outside of the binned range")]
    OutOfRange(f64),
    #[error("the bins for this sample do not fit in a 64 bit integer")]
    Overflow,
    #[error("frequency table failed a consistency check: {0}")]
    Inconsistent(&'static str),
}
