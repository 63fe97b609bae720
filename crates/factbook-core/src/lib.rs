//! # factbook-core
//!
//! Fact tables, the read-only fact store, configuration, and error handling
//! for factbook.

pub mod config;
pub mod error;
pub mod facts;
pub mod language;
pub mod store;

pub use error::FactError;
pub use language::LanguageCode;
pub use store::{FactCollection, FactStore};
