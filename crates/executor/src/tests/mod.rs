//! Test modules for the executor crate.

pub mod atomic;
pub mod recording;
pub mod serialization;
