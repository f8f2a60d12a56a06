//! PRVHASH Basic Example
//!
//! Minimal usage: `prvhash::hash64s(&data, &mut out)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), prvhash::PrvhashError> {
    let data = b"Hello, World!";

    let mut digest = [0u8; 32];
    prvhash::hash64s(data, &mut digest)?;

    println!("Data:   {:?}", String::from_utf8_lossy(data));
    println!("Hash:   {}", hex::encode(digest));
    println!("Hash64: {:016x}", prvhash::hash64_64(data, 0));

    let mut rng = prvhash::Generator::from_seed(2024);
    println!("Random: {:016x}", rng.next_u64());
    Ok(())
}
