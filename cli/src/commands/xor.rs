//! Xor Command
//!
//! Encrypt or decrypt a file with the PRVHASH stream cipher. The same
//! command with the same key and nonce reverses itself.

use anyhow::{Context, Result};
use prvhash::StreamCipher;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Stream `input` through the cipher into `output`.
pub fn xor_file(key_hex: &str, nonce_hex: &str, input: &Path, output: &Path) -> Result<()> {
    let key = hex::decode(key_hex).context("Key is not valid hex")?;
    let nonce = hex::decode(nonce_hex).context("Nonce is not valid hex")?;
    let mut cipher = StreamCipher::new(&key, &nonce)?;

    let mut reader = BufReader::new(
        File::open(input).with_context(|| format!("Failed to open: {}", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("Failed to create: {}", output.display()))?,
    );

    xor_stream(&mut cipher, &mut reader, &mut writer)?;
    writer.flush()?;
    cipher.finalize();
    Ok(())
}

fn xor_stream(
    cipher: &mut StreamCipher,
    reader: &mut impl Read,
    writer: &mut impl Write,
) -> Result<()> {
    let mut buffer = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        cipher.apply_keystream(&mut buffer[..n]);
        writer.write_all(&buffer[..n])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_stream_round_trip() {
        let key = [9u8; 16];
        let plaintext: Vec<u8> = (0..200_000u32).map(|i| (i % 253) as u8).collect();

        let mut ciphertext = Vec::new();
        let mut cipher = StreamCipher::new(&key, &[]).unwrap();
        xor_stream(&mut cipher, &mut plaintext.as_slice(), &mut ciphertext).unwrap();
        assert_ne!(ciphertext, plaintext);

        let mut recovered = Vec::new();
        let mut cipher = StreamCipher::new(&key, &[]).unwrap();
        xor_stream(&mut cipher, &mut ciphertext.as_slice(), &mut recovered).unwrap();
        assert_eq!(recovered, plaintext);
    }
}
