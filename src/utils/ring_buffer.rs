//! Fixed-capacity sample FIFO used as a delay line.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{ParameterError, Result};

/// Shortest delay line that still has two samples to average.
pub const MIN_BUFFER_LEN: usize = 2;

/// Circular buffer that always holds exactly `len()` samples.
///
/// Removing the front and appending at the back happen together in
/// [`RingBuffer::push_pop`], so the length can never drift. Construction
/// rejects anything shorter than [`MIN_BUFFER_LEN`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingBuffer {
    line: Box<[f32]>,
    head: usize,
}

impl RingBuffer {
    pub fn filled(len: usize, value: f32) -> Result<Self> {
        if len < MIN_BUFFER_LEN {
            return Err(ParameterError::NotEnoughSamples(len).into());
        }

        Ok(Self {
            line: alloc::vec![value; len].into_boxed_slice(),
            head: 0,
        })
    }

    pub fn from_slice(samples: &[f32]) -> Result<Self> {
        if samples.len() < MIN_BUFFER_LEN {
            return Err(ParameterError::NotEnoughSamples(samples.len()).into());
        }

        Ok(Self {
            line: samples.into(),
            head: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.line.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Oldest sample.
    #[inline]
    pub fn front(&self) -> f32 {
        self.line[self.head]
    }

    /// Sample right behind the front.
    #[inline]
    pub fn second(&self) -> f32 {
        self.line[(self.head + 1) % self.line.len()]
    }

    /// Sample `index` positions behind the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        if index < self.line.len() {
            Some(self.line[(self.head + index) % self.line.len()])
        } else {
            None
        }
    }

    /// Drops the front sample, appends `sample` at the back and returns the
    /// dropped value.
    #[inline]
    pub fn push_pop(&mut self, sample: f32) -> f32 {
        let out = self.line[self.head];
        self.line[self.head] = sample;
        self.head = (self.head + 1) % self.line.len();
        out
    }

    /// Overwrites every sample, front to back.
    pub fn fill_with(&mut self, mut f: impl FnMut() -> f32) {
        let len = self.line.len();
        for i in 0..len {
            self.line[(self.head + i) % len] = f();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let (back, front) = self.line.split_at(self.head);
        front.iter().chain(back.iter()).copied()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.iter().collect()
    }
}
