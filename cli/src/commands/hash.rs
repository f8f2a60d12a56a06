//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use prvhash::{Hasher16, Hasher32, Hasher64, Hasher64s, Hasher8};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Variant {
    /// 64-bit words, single lane
    Prvhash64,
    /// 64-bit words, four lanes (fastest on large inputs)
    Prvhash64s,
    /// 32-bit words, single lane
    Prvhash32,
    /// 16-bit words, single lane
    Prvhash16,
    /// 8-bit words, single lane
    Prvhash8,
}

/// Digest parameters shared by `hash` and `check`.
#[derive(Copy, Clone, Debug)]
pub struct HashConfig {
    pub variant: Variant,
    pub bits: usize,
    pub seed: u64,
}

enum HasherWrapper {
    Prvhash64(Hasher64),
    Prvhash64s(Hasher64s),
    Prvhash32(Hasher32),
    Prvhash16(Hasher16),
    Prvhash8(Hasher8),
}

impl HasherWrapper {
    fn new(config: HashConfig) -> Result<Self> {
        if config.bits % 8 != 0 {
            anyhow::bail!("bit length {} is not a whole number of bytes", config.bits);
        }
        let len = config.bits / 8;
        let seed = config.seed;
        let hasher = match config.variant {
            Variant::Prvhash64 => Self::Prvhash64(Hasher64::new_seeded(len, seed)?),
            Variant::Prvhash64s => Self::Prvhash64s(Hasher64s::new_seeded(len, seed)?),
            Variant::Prvhash32 => Self::Prvhash32(Hasher32::new_seeded(len, narrow_seed(seed, 32)?)?),
            Variant::Prvhash16 => Self::Prvhash16(Hasher16::new_seeded(len, narrow_seed(seed, 16)?)?),
            Variant::Prvhash8 => Self::Prvhash8(Hasher8::new_seeded(len, narrow_seed(seed, 8)?)?),
        };
        Ok(hasher)
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Prvhash64(h) => h.update(data),
            Self::Prvhash64s(h) => h.update(data),
            Self::Prvhash32(h) => h.update(data),
            Self::Prvhash16(h) => h.update(data),
            Self::Prvhash8(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            Self::Prvhash64(h) => h.finalize(),
            Self::Prvhash64s(h) => h.finalize(),
            Self::Prvhash32(h) => h.finalize(),
            Self::Prvhash16(h) => h.finalize(),
            Self::Prvhash8(h) => h.finalize(),
        }
    }
}

/// Seed as a `bits`-wide word; wider seeds are rejected rather than truncated.
fn narrow_seed<T: TryFrom<u64>>(seed: u64, bits: u32) -> Result<T> {
    T::try_from(seed).map_err(|_| anyhow!("seed {seed:#x} does not fit in a {bits}-bit word"))
}

/// Rejects a seed that does not fit the variant's word.
pub fn check_seed(variant: Variant, seed: u64) -> Result<()> {
    HasherWrapper::new(HashConfig {
        variant,
        bits: 64,
        seed,
    })
    .map(drop)
}

/// Hash everything `reader` yields and return the digest as hex.
pub fn hash_reader(reader: &mut impl Read, config: HashConfig) -> Result<String> {
    let mut hasher = HasherWrapper::new(config)?;
    let mut buffer = [0u8; 128 * 1024]; // 128 KB buffer

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Hash one file.
pub fn hash_file(path: &Path, config: HashConfig) -> Result<String> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;
    hash_reader(&mut file, config)
}

/// Hash files (Rayon parallelizes across files).
pub fn hash_files(files: &[PathBuf], config: HashConfig) -> Result<()> {
    // Reject a bad configuration once, before touching any file.
    HasherWrapper::new(config)?;

    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| match hash_file(file_path, config) {
        Ok(hex_hash) => {
            results.lock().unwrap().push((file_path.clone(), hex_hash));
        }
        Err(e) => {
            errors.lock().unwrap().push((file_path.clone(), e));
        }
    });

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, hex_hash) in results {
        println!("{}  {}", hex_hash, file_path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        eprintln!("Error: {}: {:#}", file_path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
