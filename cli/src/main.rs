//! PRVHASH CLI
//!
//! Hash files, verify checksum lists and run files through the stream cipher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, xor_file, HashConfig, Variant};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "prvhash")]
#[command(about = "PRVHASH hash family and stream cipher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash variant to use
    #[arg(short, long, value_enum, default_value_t = Variant::Prvhash64s, global = true)]
    variant: Variant,

    /// Digest length in bits (multiple of the variant's word size)
    #[arg(short, long, default_value_t = 256)]
    bits: usize,

    /// Seed override (must fit the variant's word width)
    #[arg(short, long, default_value_t = 0, global = true)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Encrypt or decrypt a file with the stream cipher
    Xor {
        /// Key as hex, 16..=128 bytes in steps of 8
        #[arg(short, long)]
        key: String,
        /// Nonce as hex, 0..=96 bytes in steps of 8
        #[arg(short, long, default_value = "")]
        nonce: String,
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.variant, cli.seed)?,
        Some(Commands::Xor {
            key,
            nonce,
            input,
            output,
        }) => xor_file(key, nonce, input, output)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: prvhash [FILE]... or prvhash --help");
                std::process::exit(1);
            }

            let config = HashConfig {
                variant: cli.variant,
                bits: cli.bits,
                seed: cli.seed,
            };
            hash_files(&cli.files, config)?;
        }
    }

    Ok(())
}
