//! Greedy longest-match phoneme → glyph codec

use crate::mapper::mapping_data::{IGNORED_MARKS, ShawMappingData};
use crate::models::{Pronunciation, Syllable};

/// Capability interface for the pronunciation → glyph-string conversion.
///
/// Exactly one production implementation ([`ShawMapper`]); the trait exists
/// so lexicon construction can be tested against a scripted double.
pub trait PhonemeMapper: Send + Sync {
  /// Converts one pronunciation into the target script. Never errors:
  /// unmapped phoneme sequences degrade to verbatim pass-through.
  fn map(&self, pronunciation: &Pronunciation) -> String;
}

/// Greedy longest-match substitution over the merged IPA → Shavian table.
#[derive(Debug, Clone)]
pub struct ShawMapper {
  /// Patterns sorted by descending length. The ordering is load-bearing:
  /// scanning this list front-to-back is what makes matching greedy.
  pairs: Vec<(&'static str, &'static str)>,
}

impl ShawMapper {
  /// Builds the ordered pattern list from the static mapping tables.
  ///
  /// Length ties are broken lexicographically so construction is
  /// deterministic regardless of table iteration order.
  pub fn new(mapping: &ShawMappingData) -> Self {
    let mut pairs: Vec<(&'static str, &'static str)> =
      mapping.ipa_to_shaw().iter().map(|(&k, &v)| (k, v)).collect();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    Self { pairs }
  }

  fn map_syllable(&self, syllable: &Syllable) -> String {
    let mut text: String = syllable.phonemes().concat();
    text.retain(|c| !IGNORED_MARKS.contains(&c));

    let mut converted = String::new();
    let mut remaining = text.as_str();
    'scan: while !remaining.is_empty() {
      for (pattern, shaw) in &self.pairs {
        if let Some(rest) = remaining.strip_prefix(pattern) {
          converted.push_str(shaw);
          remaining = rest;
          // Restart from the longest pattern: some multi-character
          // phonemes are themselves prefixes of longer ones.
          continue 'scan;
        }
      }
      // Nothing matched the head of the remainder: pass it through.
      converted.push_str(remaining);
      break;
    }
    converted
  }
}

impl PhonemeMapper for ShawMapper {
  fn map(&self, pronunciation: &Pronunciation) -> String {
    // Syllable boundaries are not marked in the output.
    pronunciation
      .syllables()
      .iter()
      .map(|syllable| self.map_syllable(syllable))
      .collect()
  }
}
