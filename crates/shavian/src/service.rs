//! ShavianService: the integration facade of the shavian crate.
//!
//! Wires the dictionary import, the phoneme codec, the lexicon build, and
//! the transliteration engine together. Callers outside the crate only need
//! this type plus a [`SpeechTagger`] implementation.
//!
//! The service is immutable after `init`: the dictionary, mapping tables,
//! and lexicon are built once and shared read-only, so any number of
//! concurrent `encode` calls proceed without locking. To pick up a changed
//! dictionary, build a second service off to the side and swap the `Arc`
//! that holds it; nothing is ever mutated in place.

use std::sync::Arc;

use tracing::info;

use crate::config::ShavianConfig;
use crate::dictionary::{Dictionary, IsleDictionary};
use crate::errors::ShavianResult;
use crate::lexicon::Lexicon;
use crate::mapper::{ShawMapper, ShawMappingData};
use crate::transliterator::{ShavianTransliterator, SpeechTagger};

/// Facade over the full dictionary → lexicon → engine pipeline.
pub struct ShavianService {
  transliterator: ShavianTransliterator,
}

impl std::fmt::Debug for ShavianService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ShavianService").finish_non_exhaustive()
  }
}

impl ShavianService {
  /// Initialization: validate configuration, import the dictionary from
  /// disk, build the lexicon, and wire the engine.
  ///
  /// # Errors
  /// - Configuration is invalid (empty dictionary path, unknown log level)
  /// - The dictionary file cannot be read
  /// - A dictionary line is malformed and `parse_mode` is strict
  pub fn init(config: &ShavianConfig, tagger: Arc<dyn SpeechTagger>) -> ShavianResult<Self> {
    config.validate()?;

    let dictionary = Arc::new(IsleDictionary::from_path(
      &config.dictionary.path,
      config.dictionary.parse_mode,
    )?);
    info!(path = %config.dictionary.path.display(), "dictionary loaded");

    Ok(Self::from_parts(dictionary, tagger))
  }

  /// Builds a service from an already-imported dictionary. Useful when the
  /// caller owns the dictionary source or substitutes a test double.
  pub fn from_parts(dictionary: Arc<dyn Dictionary>, tagger: Arc<dyn SpeechTagger>) -> Self {
    let mapping = Arc::new(ShawMappingData::new());
    let mapper = ShawMapper::new(&mapping);
    let lexicon = Arc::new(Lexicon::build(dictionary.as_ref(), &mapper));
    let transliterator = ShavianTransliterator::new(dictionary, tagger, mapping, lexicon);
    Self { transliterator }
  }

  /// Encodes English text into the Shavian alphabet. Never fails; words the
  /// pipeline cannot pronounce pass through unchanged.
  pub fn encode(&self, english: &str) -> String {
    self.transliterator.transliterate(english)
  }
}
