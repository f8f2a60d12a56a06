//! Execution Engine
//!
//! Multi-lane absorption/squeeze state machine and the firewalled keystream
//! built on top of it.

pub mod absorb;
pub mod firewall;
pub mod keystream;
