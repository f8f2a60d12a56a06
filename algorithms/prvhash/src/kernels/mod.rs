//! PRVHASH Kernels
//!
//! Width-generic building blocks: the core round, state words, and the
//! message word loader.

pub mod constants;
pub mod core;
pub mod loader;
pub mod word;
