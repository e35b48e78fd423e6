//! Keyboard instrument: one plucked string per key, summed to a mono output.
//!
//! The 37 keys follow a two-row piano layout on a computer keyboard. Key 24
//! (`'v'`) sounds concert A and every step is one equal-tempered semitone.

use alloc::boxed::Box;
use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::error::{Error, Result};
use crate::physical_modelling::string::{KarplusStrongString, StringModel};
use crate::utils::random::Random;
use crate::SampleRate;

/// Key symbols, lowest pitch first.
pub const KEYBOARD: &str = "q2we4r5ty7u8i9op-[=zxdcfvgbnjmk,.;/' ";

pub const KEY_COUNT: usize = 37;

pub const CONCERT_PITCH: f32 = 440.0;

/// Index of the key tuned to [`CONCERT_PITCH`].
pub const CONCERT_PITCH_INDEX: usize = 24;

const _: () = assert!(KEYBOARD.len() == KEY_COUNT);

static KEY_FREQUENCIES: Once<[f32; KEY_COUNT]> = Once::new();

/// Equal-tempered frequency of key `index`, in Hz.
#[inline]
pub fn key_frequency(index: usize) -> f32 {
    let semitones = index as f32 - CONCERT_PITCH_INDEX as f32;
    CONCERT_PITCH * 2.0f32.powf(semitones / 12.0)
}

/// Frequencies of all keys, computed on first use.
pub fn key_frequencies() -> &'static [f32; KEY_COUNT] {
    KEY_FREQUENCIES.call_once(|| core::array::from_fn(key_frequency))
}

/// One key of the instrument and the string it plays.
#[derive(Debug, Clone)]
pub struct Key {
    pub symbol: char,
    pub frequency: f32,
    pub string: Box<dyn StringModel>,
}

#[derive(Debug, Clone)]
pub struct Instrument {
    keys: Vec<Key>,
    rng: Random,
    tic_count: u64,
}

impl Instrument {
    /// Builds one Karplus-Strong string per key.
    ///
    /// Fails only if `sample_rate` is too low to fit the highest key.
    pub fn new(sample_rate: SampleRate, rng: Random) -> Result<Self> {
        let mut keys = Vec::with_capacity(KEY_COUNT);
        for (symbol, &frequency) in KEYBOARD.chars().zip(key_frequencies().iter()) {
            let string = KarplusStrongString::new(frequency, &sample_rate)?;
            keys.push(Key {
                symbol,
                frequency,
                string: Box::new(string),
            });
        }

        log::debug!(
            "Instrument with {} keys at {} Hz",
            keys.len(),
            sample_rate.sample_rate_hz
        );

        Ok(Self {
            keys,
            rng,
            tic_count: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.keys.iter().position(|key| key.symbol == symbol)
    }

    pub fn key(&self, symbol: char) -> Option<&Key> {
        self.index_of(symbol).map(|index| &self.keys[index])
    }

    pub fn has_symbol(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Plucks the string mapped to `symbol`.
    ///
    /// Unknown symbols leave every string untouched.
    pub fn pluck(&mut self, symbol: char) -> Result<()> {
        let Some(index) = self.index_of(symbol) else {
            log::debug!("Ignoring pluck of unmapped symbol {:?}", symbol);
            return Err(Error::UnknownSymbol(symbol));
        };

        let key = &mut self.keys[index];
        key.string.pluck(&mut self.rng);
        log::trace!("Pluck {:?} at {:.2} Hz", key.symbol, key.frequency);

        Ok(())
    }

    /// Sum of the current sample of every string.
    #[inline]
    pub fn mix(&self) -> f32 {
        self.keys.iter().map(|key| key.string.sample()).sum()
    }

    /// Advances every string by one sample.
    #[inline]
    pub fn tic(&mut self) {
        for key in self.keys.iter_mut() {
            key.string.tic();
        }
        self.tic_count += 1;
    }

    /// Number of completed tics since construction.
    pub fn tic_count(&self) -> u64 {
        self.tic_count
    }

    /// Produces the next output sample: mix, then tic.
    #[inline]
    pub fn process(&mut self) -> f32 {
        let out = self.mix();
        self.tic();
        out
    }

    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.process();
        }
    }
}
