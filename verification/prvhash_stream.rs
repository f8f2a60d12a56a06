//! # `PractRand` Stream Generator
//!
//! Writes an endless PRVHASH byte stream to stdout for statistical test
//! suites (`PractRand`, `TestU01`, `dieharder`).
//!
//! Modes:
//! - `generator`: raw [`prvhash::Generator`] output.
//! - `cipher`: keystream of an all-zero plaintext.
//! - `hash`: 256-bit `prvhash64s` digests of an incrementing counter.
//! - `hash64`: `hash64_64` of an incrementing counter.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};

const BUFFER_SIZE: usize = 64 * 1024;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Generator,
    Cipher,
    Hash,
    Hash64,
}

#[derive(Parser)]
#[command(name = "prvhash_stream", about = "Endless PRVHASH output for PractRand")]
struct Args {
    /// Output source
    #[arg(value_enum, default_value = "generator")]
    mode: Mode,

    /// Seed (generator, hash modes) or key byte pattern (cipher mode)
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut buf = vec![0u8; BUFFER_SIZE];

    match args.mode {
        Mode::Generator => {
            let mut rng = prvhash::Generator::from_seed(args.seed);
            loop {
                rng.fill_bytes(&mut buf);
                if handle.write_all(&buf).is_err() {
                    break;
                }
            }
        }
        Mode::Cipher => {
            let key: Vec<u8> = args.seed.to_le_bytes().repeat(4);
            let mut cipher = prvhash::StreamCipher::new(&key, &[])?;
            loop {
                buf.fill(0);
                cipher.apply_keystream(&mut buf);
                if handle.write_all(&buf).is_err() {
                    break;
                }
            }
        }
        Mode::Hash => {
            let mut counter: u64 = 0;
            let mut digest = [0u8; 32];
            loop {
                prvhash::hash64s_seeded(&counter.to_le_bytes(), &mut digest, args.seed)?;
                if handle.write_all(&digest).is_err() {
                    break;
                }
                counter = counter.wrapping_add(1);
            }
        }
        Mode::Hash64 => {
            let mut counter: u64 = 0;
            loop {
                let word = prvhash::hash64_64(&counter.to_le_bytes(), args.seed);
                if handle.write_all(&word.to_le_bytes()).is_err() {
                    break;
                }
                counter = counter.wrapping_add(1);
            }
        }
    }
    Ok(())
}
