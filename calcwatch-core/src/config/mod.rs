//! Configuration types
//!
//! The watch keeps no persistent settings; every (re)start begins from
//! [`WatchConfig::default`].

pub mod language;
pub mod types;

pub use language::Language;
pub use types::*;
