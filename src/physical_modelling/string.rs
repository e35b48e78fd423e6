//! Karplus-Strong plucked string.
//!
//! The delay line is a ring buffer one period long. Every tic the two oldest
//! samples are averaged, damped and fed back in at the other end, which
//! low-passes the initial noise burst into a decaying harmonic tone.

use alloc::vec::Vec;
use core::fmt::Debug;

use dyn_clone::DynClone;

use crate::error::{ParameterError, Result};
use crate::utils::random::Random;
use crate::utils::ring_buffer::RingBuffer;
use crate::SampleRate;

pub use crate::utils::ring_buffer::MIN_BUFFER_LEN;

/// Energy lost per round trip through the delay line.
pub const DECAY_FACTOR: f32 = 0.996;

/// Longest delay line a frequency may ask for, about 24 s at 44.1 kHz.
pub const MAX_BUFFER_LEN: usize = 1 << 20;

/// A model of one string that can be excited and stepped one sample at a time.
pub trait StringModel: DynClone + Debug {
    /// Excites the string with fresh noise drawn from `rng`.
    fn pluck(&mut self, rng: &mut Random);

    /// Advances the simulation by one sample.
    fn tic(&mut self);

    /// Current output sample.
    fn sample(&self) -> f32;

    /// Number of completed tics since construction.
    fn tic_count(&self) -> u64;

    /// Length of the delay line in samples.
    fn len(&self) -> usize;
}

dyn_clone::clone_trait_object!(StringModel);

#[derive(Debug, Clone)]
pub struct KarplusStrongString {
    buffer: RingBuffer,
    tic_count: u64,
}

impl KarplusStrongString {
    /// Creates a silent string tuned to `frequency`.
    ///
    /// The delay line holds `round(sample_rate / frequency)` zeros.
    pub fn new(frequency: f32, sample_rate: &SampleRate) -> Result<Self> {
        if frequency <= 0.0 || frequency.is_nan() {
            return Err(ParameterError::NonPositiveFrequency(frequency).into());
        }

        let period = sample_rate.period_in_samples(frequency);
        if period.is_nan() || period > MAX_BUFFER_LEN as f32 {
            return Err(ParameterError::BufferTooLong { frequency, period }.into());
        }
        if period < MIN_BUFFER_LEN as f32 {
            return Err(ParameterError::BufferTooShort {
                frequency,
                len: period as usize,
            }
            .into());
        }

        Ok(Self {
            buffer: RingBuffer::filled(period as usize, 0.0)?,
            tic_count: 0,
        })
    }

    /// Creates a string whose delay line starts out as `samples`, in order.
    pub fn from_samples(samples: &[f32]) -> Result<Self> {
        Ok(Self {
            buffer: RingBuffer::from_slice(samples)?,
            tic_count: 0,
        })
    }

    /// Silences the string. The tic count keeps running.
    pub fn reset(&mut self) {
        self.buffer.fill_with(|| 0.0);
    }

    /// Delay line contents, oldest sample first.
    pub fn buffer(&self) -> Vec<f32> {
        self.buffer.to_vec()
    }

    /// Gain applied to each averaged pair.
    pub fn decay(&self) -> f32 {
        DECAY_FACTOR
    }
}

impl StringModel for KarplusStrongString {
    fn pluck(&mut self, rng: &mut Random) {
        self.buffer.fill_with(|| rng.get_float() - 0.5);
    }

    #[inline]
    fn tic(&mut self) {
        // Both samples are read before the front one is evicted.
        let front = self.buffer.front();
        let second = self.buffer.second();
        self.buffer.push_pop(DECAY_FACTOR * (front + second) / 2.0);
        self.tic_count += 1;
    }

    #[inline]
    fn sample(&self) -> f32 {
        self.buffer.front()
    }

    fn tic_count(&self) -> u64 {
        self.tic_count
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }
}
