//! transliterator module
pub mod shavian_transliterator;
pub mod tagger;

/// Re-export
pub use shavian_transliterator::ShavianTransliterator;
pub use tagger::{SpeechTagger, expand_with_whitespace};
