//! Error types.

use core::fmt;

/// Reason a string model or sample rate could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Frequency was zero, negative or NaN.
    NonPositiveFrequency(f32),

    /// The frequency is too high for the sample rate; the delay line would
    /// hold fewer than two samples.
    BufferTooShort { frequency: f32, len: usize },

    /// The frequency is so low, or the sample rate so high, that the delay
    /// line would not fit in memory. `period` may be infinite or NaN.
    BufferTooLong { frequency: f32, period: f32 },

    /// An explicit initial buffer had fewer than two samples.
    NotEnoughSamples(usize),

    /// Sample rate was zero, negative or not finite.
    InvalidSampleRate(f32),
}

/// Errors raised by string construction and instrument control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A constructor argument was out of range. Nothing was built.
    InvalidParameter(ParameterError),

    /// The symbol is not on the instrument's keyboard. No string was touched.
    UnknownSymbol(char),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonPositiveFrequency(frequency) => {
                write!(f, "frequency must be positive, got {}", frequency)
            }
            ParameterError::BufferTooShort { frequency, len } => {
                write!(
                    f,
                    "frequency {} Hz gives a {} sample buffer, at least 2 are needed",
                    frequency, len
                )
            }
            ParameterError::BufferTooLong { frequency, period } => {
                write!(
                    f,
                    "frequency {} Hz gives a {} sample buffer, at most {} are allowed",
                    frequency,
                    period,
                    crate::physical_modelling::string::MAX_BUFFER_LEN
                )
            }
            ParameterError::NotEnoughSamples(len) => {
                write!(f, "initial buffer needs at least 2 samples, got {}", len)
            }
            ParameterError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be positive and finite, got {}", rate)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(reason) => write!(f, "invalid parameter: {}", reason),
            Error::UnknownSymbol(symbol) => write!(f, "no string is mapped to {:?}", symbol),
        }
    }
}

impl core::error::Error for ParameterError {}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::InvalidParameter(reason) => Some(reason),
            Error::UnknownSymbol(_) => None,
        }
    }
}

impl From<ParameterError> for Error {
    fn from(reason: ParameterError) -> Self {
        Error::InvalidParameter(reason)
    }
}

/// Result of string construction and instrument control.
pub type Result<T> = core::result::Result<T, Error>;
