#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod instrument;
pub mod physical_modelling;
pub mod utils;

pub use error::{Error, ParameterError, Result};
pub use instrument::Instrument;
pub use physical_modelling::string::{KarplusStrongString, StringModel};

/// Sample rate of the reference audio sink.
pub const DEFAULT_SAMPLE_RATE_HZ: f32 = 44100.0;

/// Sample rate context for DSP calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate {
    /// Sample rate in Hz
    pub sample_rate_hz: f32,
}

impl SampleRate {
    /// Create a new sample rate context.
    pub fn new(sample_rate_hz: f32) -> Self {
        Self { sample_rate_hz }
    }

    /// Create a new sample rate context, rejecting rates that cannot size a buffer.
    pub fn try_new(sample_rate_hz: f32) -> Result<Self> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(Error::InvalidParameter(ParameterError::InvalidSampleRate(
                sample_rate_hz,
            )));
        }

        Ok(Self::new(sample_rate_hz))
    }

    /// Number of samples in one period of `frequency`, rounded to the nearest integer.
    #[inline]
    pub fn period_in_samples(&self, frequency: f32) -> f32 {
        #[allow(unused_imports)]
        use num_traits::float::Float;

        (self.sample_rate_hz / frequency).round()
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_sample_rates() {
        assert!(SampleRate::try_new(0.0).is_err());
        assert!(SampleRate::try_new(-48000.0).is_err());
        assert!(SampleRate::try_new(f32::NAN).is_err());
        assert_eq!(SampleRate::try_new(48000.0).unwrap(), SampleRate::new(48000.0));
    }

    #[test]
    fn period_rounds_to_nearest_sample() {
        let sr = SampleRate::default();
        assert_eq!(sr.period_in_samples(440.0), 100.0);
        assert_eq!(sr.period_in_samples(27.5), 1604.0);
    }
}
