//! shavian crate example
//!
//! Builds the full pipeline from an in-memory dictionary and a minimal
//! tagger, then encodes a few English sentences into the Shavian alphabet.
//! A production caller would plug in a statistical tagger here; this example
//! uses a character-class tokenizer that tags every word as a common noun.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use shavian::ShavianService;
use shavian::dictionary::{IsleDictionary, ParseMode};
use shavian::models::{SpeechToken, UdPosTag};
use shavian::transliterator::SpeechTagger;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A few ISLE-format lines, enough to encode the demo sentences.
const DEMO_DICTIONARY: &str = "\
a(dt) 0.9 1 ə #
cat(nn) 0.2 1 k ˈæ t #
don't(vbp) 0.1 1 d ˈoʊ n t #
java(nn) 0.0 2 dʒ ˈɑ . v ə #
sat(vbd) 0.1 1 s ˈæ t #
script(nn) 0.1 1 s k ɹ ˈɪ p t #
mat(nn) 0.1 1 m ˈæ t #
on(in) 0.5 1 ˈɑ n #
";

/// Minimal tagger: alphabetic runs become noun tokens that are their own
/// lemma, everything else becomes punctuation or whitespace tokens.
struct NounTagger;

impl SpeechTagger for NounTagger {
  fn tag_sentence(&self, text: &str) -> Vec<SpeechToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for c in text.chars() {
      if c.is_alphanumeric() {
        word.push(c);
        continue;
      }
      if !word.is_empty() {
        tokens.push(SpeechToken::new(word.as_str(), UdPosTag::Noun, word.to_lowercase()));
        word.clear();
      }
      let pos = if c.is_whitespace() { UdPosTag::White } else { UdPosTag::Punct };
      tokens.push(SpeechToken::new(c.to_string(), pos, c.to_string()));
    }
    if !word.is_empty() {
      tokens.push(SpeechToken::new(word.as_str(), UdPosTag::Noun, word.to_lowercase()));
    }
    tokens
  }
}

fn main() -> AppResult<()> {
  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set
  // Default: info for global, debug for shavian
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shavian=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  // 1. Import the dictionary and wire the pipeline
  let dictionary = IsleDictionary::from_source(DEMO_DICTIONARY, ParseMode::Strict)?;
  let service = ShavianService::from_parts(Arc::new(dictionary), Arc::new(NounTagger));

  // 2. Encode a few sentences
  let inputs = [
    "the cat sat on a mat.",
    "don't",
    "JavaScript",
    "a cat's mat",
  ];
  for input in inputs {
    println!("{input}\n  -> {}", service.encode(input));
  }

  Ok(())
}
