//! Shavian lexicon construction and lookup
//!
//! Derives one glyph string per dictionary sense, resolves competing
//! pronunciation variants deterministically, and serves case-insensitive
//! lookups. Built once at startup; concurrent readers share it without
//! locking. A dictionary reload must build a new `Lexicon` off to the side
//! and publish it by `Arc` swap.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::info;

use crate::dictionary::Dictionary;
use crate::mapper::PhonemeMapper;
use crate::models::{DictionaryEntry, UdPosTag};

/// The /hw/ onset cluster. Variants spelling a word with 𐑣𐑢 lose to
/// variants using plain 𐑢.
const HW_CLUSTER: &str = "𐑣𐑢";

/// One derived reading: glyph string plus the tag-set it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
  shavian: String,
  tags: BTreeSet<UdPosTag>,
}

impl LexiconEntry {
  /// Glyph string in the target script.
  pub fn shavian(&self) -> &str {
    &self.shavian
  }

  /// Tag-set this reading was recorded under.
  pub fn tags(&self) -> &BTreeSet<UdPosTag> {
    &self.tags
  }

  /// True when any tag in the set satisfies the predicate.
  pub fn test_tags(&self, predicate: impl Fn(UdPosTag) -> bool) -> bool {
    self.tags.iter().any(|&tag| predicate(tag))
  }
}

/// Immutable map from lowercased headword to its ordered readings.
#[derive(Debug)]
pub struct Lexicon {
  entries: HashMap<String, Vec<LexiconEntry>>,
}

impl Lexicon {
  /// Derives the full lexicon from a dictionary and a phoneme mapper.
  pub fn build(dictionary: &dyn Dictionary, mapper: &dyn PhonemeMapper) -> Self {
    let mut entries: HashMap<String, Vec<LexiconEntry>> = HashMap::new();

    for headword in dictionary.words() {
      // Written words carry multiple senses and thus multiple entries,
      // e.g. wind (verb, to turn) and wind (noun, a breeze).
      let variants: Vec<LexiconEntry> = dictionary
        .entries(&headword)
        .iter()
        .map(|entry| derive_entry(mapper, entry))
        .collect();

      // Group by exact tag-set: some words have differing pronunciations
      // even within the same part of speech. BTreeMap keyed on the sorted
      // tag-sets fixes the cross-group order deterministically.
      let mut by_tags: BTreeMap<BTreeSet<UdPosTag>, Vec<LexiconEntry>> = BTreeMap::new();
      for variant in variants {
        by_tags.entry(variant.tags.clone()).or_default().push(variant);
      }

      let readings: Vec<LexiconEntry> = by_tags
        .into_values()
        .flat_map(|mut group| {
          rank_variants(&mut group);
          group
        })
        .collect();

      entries.insert(headword.to_lowercase(), readings);
    }

    info!(headwords = entries.len(), "lexicon built");
    Self { entries }
  }

  /// True when the word has at least one reading. Case-insensitive.
  pub fn has_word(&self, word: &str) -> bool {
    self.entries.contains_key(&word.to_lowercase())
  }

  /// Ordered readings for a word; empty for an unknown word, never an
  /// error. Case-insensitive exact match only.
  pub fn entries(&self, word: &str) -> &[LexiconEntry] {
    self
      .entries
      .get(&word.to_lowercase())
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }
}

/// Maps one dictionary entry to its glyph string. Alternate pronunciations
/// on a single line map independently and concatenate.
fn derive_entry(mapper: &dyn PhonemeMapper, entry: &DictionaryEntry) -> LexiconEntry {
  let shavian: String = entry
    .pronunciations
    .iter()
    .map(|pronunciation| mapper.map(pronunciation))
    .collect();
  LexiconEntry {
    shavian,
    tags: entry.tags.clone(),
  }
}

/// Orders same-tag-set variants, best reading first:
/// 1. a variant containing the 𐑣𐑢 cluster loses to one without it
///    (prefer /w/ over /hw/ when both exist for the same reading);
/// 2. otherwise the longer glyph string wins, the shorter being treated as
///    a reduced fast-speech form.
fn rank_variants(variants: &mut [LexiconEntry]) {
  if variants.len() <= 1 {
    return;
  }
  variants.sort_by(|a, b| {
    let a_hw = a.shavian.contains(HW_CLUSTER);
    let b_hw = b.shavian.contains(HW_CLUSTER);
    if a_hw != b_hw {
      return a_hw.cmp(&b_hw);
    }
    let a_len = a.shavian.chars().count();
    let b_len = b.shavian.chars().count();
    b_len.cmp(&a_len)
  });
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::{IsleDictionary, ParseMode};
  use crate::mapper::{ShawMapper, ShawMappingData};
  use crate::models::Pronunciation;

  fn build(source: &str) -> Lexicon {
    let dictionary =
      IsleDictionary::from_source(source, ParseMode::Strict).expect("fixture should parse");
    let mapper = ShawMapper::new(&ShawMappingData::new());
    Lexicon::build(&dictionary, &mapper)
  }

  #[test]
  fn derives_glyph_strings_per_sense() {
    let lexicon = build(
      "wind(nn) 0.3 1 w ˈɪ n d #\n\
       wind(vb) 0.1 1 w ˈɑɪ n d #\n",
    );
    let readings = lexicon.entries("wind");
    assert_eq!(readings.len(), 2);
    // Cross-group order follows the canonical tag-set order: NOUN < VERB.
    assert_eq!(readings[0].tags(), &BTreeSet::from([UdPosTag::Noun]));
    assert_eq!(readings[0].shavian(), "𐑢𐑦𐑯𐑛");
    assert_eq!(readings[1].shavian(), "𐑢𐑲𐑯𐑛");
  }

  #[test]
  fn plain_w_variant_beats_hw_cluster() {
    let lexicon = build(
      "whale(nn) 0.1 1 h w ˈeɪ l #\n\
       whale(nn) 0.1 1 w ˈeɪ l #\n",
    );
    let readings = lexicon.entries("whale");
    assert_eq!(readings[0].shavian(), "𐑢𐑱𐑤");
    assert_eq!(readings[1].shavian(), "𐑣𐑢𐑱𐑤");
  }

  #[test]
  fn longer_variant_beats_fast_speech_reduction() {
    let lexicon = build(
      "because(in) 0.1 2 b ɪ . k ˈɔ z #\n\
       because(in) 0.1 1 k ə z #\n",
    );
    let readings = lexicon.entries("because");
    assert_eq!(readings[0].shavian(), "𐑚𐑦𐑒𐑷𐑟");
    assert_eq!(readings[1].shavian(), "𐑒𐑩𐑟");
  }

  #[test]
  fn lookup_is_case_insensitive() {
    let lexicon = build("paris(nnp) 0.1 2 p ˈɛ . ɹ ɪ s #\n");
    assert!(lexicon.has_word("Paris"));
    assert_eq!(lexicon.entries("PARIS").len(), 1);
  }

  #[test]
  fn missing_word_returns_empty_not_error() {
    let lexicon = build("run(vb) 0.2 1 ɹ ˈʌ n #\n");
    assert!(!lexicon.has_word("walk"));
    assert!(lexicon.entries("walk").is_empty());
  }

  #[test]
  fn alternates_on_one_line_concatenate() {
    struct CountingMapper;
    impl PhonemeMapper for CountingMapper {
      fn map(&self, _pronunciation: &Pronunciation) -> String {
        "x".to_string()
      }
    }
    let dictionary = IsleDictionary::from_source(
      "window(nn) 0.1 2 w ˈɪ n . d oʊ # w ˈɪ n . d ə #\n",
      ParseMode::Strict,
    )
    .expect("fixture should parse");
    let lexicon = Lexicon::build(&dictionary, &CountingMapper);
    assert_eq!(lexicon.entries("window")[0].shavian(), "xx");
  }
}
