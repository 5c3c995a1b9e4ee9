//! kotoba-storage
//!
//! Local key/value persistence and the vocabulary library built on it.

pub mod backend;
pub mod error;
pub mod library;
pub mod state;
