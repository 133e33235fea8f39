//! Speech tagger contract
//!
//! Part-of-speech tagging and lemmatization are external to this crate: the
//! engine consumes whatever token stream the tagger produces. The trait is
//! deliberately narrow (one operation, one production implementation on the
//! caller's side) so test doubles slot in without wider dynamic dispatch.

use crate::models::{SpeechToken, UdPosTag};

/// Capability interface for the external tagging + lemmatization engine.
///
/// The returned stream must be in input order and include whitespace tokens
/// (see [`expand_with_whitespace`]); the transliterator relies on them to
/// reconstruct the spacing of the original text.
pub trait SpeechTagger: Send + Sync {
  /// Tags and lemmatizes a text into an ordered token stream.
  fn tag_sentence(&self, text: &str) -> Vec<SpeechToken>;
}

/// Interleaves whitespace tokens recovered from the raw text between the
/// tagger's word tokens.
///
/// Taggers usually drop inter-token whitespace; this walks the raw text and
/// reinserts each skipped run as a `White` token so the output string keeps
/// the original spacing. A token whose surface cannot be located in the raw
/// text is passed through without advancing the cursor.
pub fn expand_with_whitespace(tokens: Vec<SpeechToken>, raw_text: &str) -> Vec<SpeechToken> {
  let mut result = Vec::with_capacity(tokens.len() * 2);
  let mut cursor = 0usize;

  for token in tokens {
    match raw_text[cursor..].find(&token.surface) {
      Some(offset) => {
        if offset > 0 {
          let whitespace = &raw_text[cursor..cursor + offset];
          result.push(SpeechToken::new(whitespace, UdPosTag::White, " "));
        }
        cursor += offset + token.surface.len();
        result.push(token);
      }
      None => result.push(token),
    }
  }

  if cursor < raw_text.len() {
    result.push(SpeechToken::new(&raw_text[cursor..], UdPosTag::White, " "));
  }

  result
}

#[cfg(test)]
mod tests {
  use super::*;

  fn word(surface: &str) -> SpeechToken {
    SpeechToken::new(surface, UdPosTag::Noun, surface)
  }

  #[test]
  fn reinserts_whitespace_runs_between_tokens() {
    let tokens = vec![word("big"), word("dog")];
    let expanded = expand_with_whitespace(tokens, "big  dog");

    assert_eq!(expanded.len(), 3);
    assert_eq!(expanded[1].surface, "  ");
    assert!(expanded[1].pos.is_whitespace());
    assert_eq!(expanded[2].surface, "dog");
  }

  #[test]
  fn keeps_trailing_whitespace() {
    let expanded = expand_with_whitespace(vec![word("dog")], "dog ");
    assert_eq!(expanded.last().unwrap().surface, " ");
  }

  #[test]
  fn adjacent_tokens_get_no_whitespace() {
    let expanded = expand_with_whitespace(vec![word("dog"), word(",")], "dog,");
    assert_eq!(expanded.len(), 2);
  }

  #[test]
  fn unlocatable_token_passes_through() {
    let expanded = expand_with_whitespace(vec![word("cat")], "dog");
    assert_eq!(expanded.len(), 2);
    assert_eq!(expanded[0].surface, "cat");
    assert!(expanded[1].pos.is_whitespace());
  }
}
