//! Error definitions
//!
//! One error enum per component, aggregated into [`ShavianError`] at the
//! crate boundary. Transliteration itself is infallible by design: every
//! engine branch bottoms out in verbatim pass-through, so only construction
//! (configuration and dictionary import) can fail.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Configuration (`ShavianConfig`) related errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// dictionary.path is empty
  #[error("dictionary.path must not be empty")]
  EmptyDictionaryPath,

  /// logging.level is not a level tracing understands
  #[error("logging.level is not a valid level: actual={actual}")]
  InvalidLogLevel {
    /// The level string that failed to parse
    actual: String,
  },

  /// The configuration document itself failed to deserialize
  #[error("failed to deserialize configuration: {0}")]
  Deserialize(String),
}

/// Dictionary import related errors
///
/// Wrapped io errors are held in `Arc` so the enum stays `Clone`, matching
/// the construct-once / share-everywhere lifecycle of the dictionary.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// The dictionary source file could not be opened or read
  #[error("failed to read dictionary source {path:?}: {source}")]
  Io {
    /// Path of the dictionary source
    path: PathBuf,
    /// Underlying io error
    #[source]
    source: Arc<io::Error>,
  },

  /// A source line does not match the ISLE line grammar
  #[error("malformed dictionary line {line}: {reason}")]
  MalformedLine {
    /// 1-based line number in the source
    line: usize,
    /// What was missing or unparseable
    reason: String,
  },

  /// A tag string has no Penn Treebank translation
  ///
  /// An exhaustive taxonomy is a configuration invariant; this surfaces a
  /// broken dictionary build, not a runtime contingency.
  #[error("unknown part-of-speech tag: {tag}")]
  UnknownPosTag {
    /// The offending tag string, trimmed
    tag: String,
  },
}

/// Top-level error type for the shavian crate
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ShavianError {
  /// Configuration validation or deserialization failed
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Dictionary import failed
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),
}

/// Crate-wide result alias
pub type ShavianResult<T> = Result<T, ShavianError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dictionary_error_displays_line_number() {
    let err = DictionaryError::MalformedLine {
      line: 42,
      reason: "missing pronunciation field".to_string(),
    };
    assert_eq!(
      err.to_string(),
      "malformed dictionary line 42: missing pronunciation field"
    );
  }

  #[test]
  fn shavian_error_wraps_component_errors_transparently() {
    let err: ShavianError = ConfigError::EmptyDictionaryPath.into();
    assert_eq!(err.to_string(), "dictionary.path must not be empty");

    let err: ShavianError = DictionaryError::UnknownPosTag {
      tag: "zzz".to_string(),
    }
    .into();
    assert!(err.to_string().contains("zzz"));
  }

  #[test]
  fn errors_are_cloneable() {
    let err = DictionaryError::Io {
      path: PathBuf::from("/tmp/isle.txt"),
      source: Arc::new(io::Error::new(io::ErrorKind::NotFound, "gone")),
    };
    let cloned = err.clone();
    assert!(cloned.to_string().contains("isle.txt"));
  }
}
