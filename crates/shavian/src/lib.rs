//! shavian — English to Shavian alphabet transliteration
//!
//! Combines an ISLE phonetic dictionary lookup with rule-based heuristics
//! for out-of-vocabulary words. Given a tagged and lemmatized token stream,
//! produces deterministic Shavian script output.

/// Configuration module - defines ShavianConfig and its sections
pub mod config;

/// Dictionary module - ISLE pronunciation dictionary import
pub mod dictionary;

/// Error module - defines ShavianError, ShavianResult and component errors
pub mod errors;

/// Lexicon module - derived glyph readings with deterministic disambiguation
pub mod lexicon;

/// Mapper module - greedy longest-match phoneme to glyph codec
pub mod mapper;

/// Data model module - part-of-speech tags, pronunciations, tokens
pub mod models;

/// Service module - the ShavianService facade
pub mod service;

/// Transliterator module - the per-token rule engine and tagger contract
pub mod transliterator;

/// Re-exports
pub use config::ShavianConfig;
pub use errors::{ShavianError, ShavianResult};
pub use service::ShavianService;
