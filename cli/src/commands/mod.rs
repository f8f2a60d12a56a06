//! CLI Commands
//!
//! All prvhash CLI commands organized as separate modules.

mod check;
mod hash;
mod xor;

pub use check::check_mode;
pub use hash::{hash_files, HashConfig, Variant};
pub use xor::xor_file;
