//! lexicon module
pub mod shaw_lexicon;

/// Re-export
pub use shaw_lexicon::{Lexicon, LexiconEntry};
