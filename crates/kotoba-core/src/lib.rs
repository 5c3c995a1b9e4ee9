//! kotoba-core
//!
//! Pure domain types for the vocabulary notebook: records, patches,
//! filters, the built-in dictionary, and the wire shapes of the proxy
//! endpoints. No I/O happens in this crate.

pub mod dictionary;
pub mod error;
pub mod export;
pub mod models;
pub mod phonetic;
pub mod query;
pub mod storage_keys;
pub mod wire;
