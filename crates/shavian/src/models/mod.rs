//! models module
pub mod model_definition;

/// Re-export major data model types
pub use model_definition::{DictionaryEntry, Pronunciation, PtbPosTag, Syllable, SpeechToken, UdPosTag};
