//! Error types for configuration boundaries.
//!
//! Extraction never fails on text: "nothing found" is an `Option`/empty result.
//! These errors only come from parsing caller-supplied configuration such as a
//! locale tag, a reference timestamp or a duration resolution name, and from a
//! fixed duration too long to represent.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("invalid reference time: {0}")]
    InvalidReference(String),

    #[error("invalid duration resolution: {0}")]
    InvalidResolution(String),

    #[error("duration of {0} seconds is out of range for a fixed delta")]
    DurationOverflow(String),
}

pub type Result<T> = std::result::Result<T, Error>;
