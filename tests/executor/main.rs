//! Integration tests for the rejson command layer
//!
//! Every test drives [`rejson::ReJson`] over the in-process
//! [`rejson::MemoryStore`], so the whole path runs end to end: build,
//! wire encoding, store dispatch, reply decoding.

mod codec;
mod common;
mod concurrency;
mod errors;
mod query;
mod scenarios;
