//! dictionary module
pub mod isle_dictionary;

/// Re-export
pub use isle_dictionary::{Dictionary, IsleDictionary, ParseMode};
