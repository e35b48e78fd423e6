//! Plays a typed melody through the instrument and writes it to a WAV file.
//!
//! Stands in for the interactive keyboard loop: each line of the score is a
//! string of key symbols that are plucked together, followed by a rest.

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use pluck_strings::utils::random::Random;
use pluck_strings::{Error, Instrument, SampleRate};

const SAMPLE_RATE: u32 = 44100;
const STEP_SECONDS: f32 = 0.3;
const OUTPUT: &str = "keyboard_render.wav";

const SCORE: &[&str] = &["v", "n", "m", ",", "vm", "", "x", "c", "v", "zv", "", "ab", "q v'"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let sample_rate = SampleRate::try_new(SAMPLE_RATE as f32)?;
    let mut instrument = Instrument::new(sample_rate, Random::new(0x5eed))?;

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(OUTPUT, spec)?;
    let mut block = vec![0.0; (STEP_SECONDS * sample_rate.sample_rate_hz) as usize];

    for step in SCORE {
        for symbol in step.chars() {
            match instrument.pluck(symbol) {
                Ok(()) => log::info!("Pluck {:?}", symbol),
                Err(Error::UnknownSymbol(_)) => log::warn!("No string for {:?}", symbol),
                Err(e) => return Err(e.into()),
            }
        }

        instrument.render(&mut block);
        for sample in &block {
            writer.write_sample(*sample)?;
        }
    }

    writer.finalize()?;
    log::info!(
        "Wrote {} samples to {}",
        instrument.tic_count(),
        OUTPUT
    );

    Ok(())
}
