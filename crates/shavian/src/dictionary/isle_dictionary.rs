//! ISLE pronunciation dictionary import
//!
//! Parses the ISLE dictionary line grammar into per-headword entry lists:
//!
//! ```text
//! HEADWORD(tag1,tag2,...) <freq> <syllable-count> pron1syl1 . pron1syl2 # pron2syl1 ...
//! ```
//!
//! Alternate pronunciations are separated by `#`, syllables within a
//! pronunciation by `.`, phonemes by spaces. Blank lines and lines starting
//! with `#` are comments. The multimap is built once at startup and never
//! mutated; a reload must construct a fresh dictionary and publish it by
//! `Arc` swap.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::error_definition::DictionaryError;
use crate::models::{DictionaryEntry, Pronunciation, PtbPosTag, Syllable, UdPosTag};

/// Raw-tag marker that injects the ABBR category alongside the surviving tags.
const ABBREVIATION_MARKER: &str = "+abbreviation";

/// Capability interface over the raw pronunciation dictionary.
pub trait Dictionary: Send + Sync {
  /// All distinct headwords in lexicographic order.
  ///
  /// The ordering is part of the contract: lexicon construction iterates
  /// this list and must be deterministic.
  fn words(&self) -> Vec<String>;

  /// All entries recorded for a headword; empty for an unknown headword.
  fn entries(&self, headword: &str) -> &[DictionaryEntry];
}

/// Malformed-line policy for the dictionary import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
  /// Log and skip lines that do not parse. The shipped ISLE source contains
  /// a handful of irregular lines, so this is the default.
  #[default]
  Lenient,
  /// Fail the whole build on the first malformed line.
  Strict,
}

/// In-memory multimap from headword to its dictionary entries.
#[derive(Debug)]
pub struct IsleDictionary {
  entries: HashMap<String, Vec<DictionaryEntry>>,
}

impl IsleDictionary {
  /// Imports a dictionary from any buffered reader.
  pub fn from_reader(reader: impl BufRead, mode: ParseMode) -> Result<Self, DictionaryError> {
    let mut entries: HashMap<String, Vec<DictionaryEntry>> = HashMap::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
      let line_no = index + 1;
      let line = line.map_err(|e| DictionaryError::MalformedLine {
        line: line_no,
        reason: format!("read failure: {e}"),
      })?;

      match parse_line(&line, line_no) {
        Ok(Some(entry)) => {
          entries.entry(entry.headword.clone()).or_default().push(entry);
        }
        Ok(None) => {}
        Err(e) => match mode {
          ParseMode::Strict => return Err(e),
          ParseMode::Lenient => {
            warn!(line = line_no, error = %e, "skipping malformed dictionary line");
            skipped += 1;
          }
        },
      }
    }

    info!(
      headwords = entries.len(),
      skipped, "dictionary import complete"
    );
    Ok(Self { entries })
  }

  /// Imports a dictionary held in memory as a string.
  pub fn from_source(source: &str, mode: ParseMode) -> Result<Self, DictionaryError> {
    Self::from_reader(source.as_bytes(), mode)
  }

  /// Imports a dictionary from a source file.
  pub fn from_path(path: impl AsRef<Path>, mode: ParseMode) -> Result<Self, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DictionaryError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_reader(BufReader::new(file), mode)
  }
}

impl Dictionary for IsleDictionary {
  fn words(&self) -> Vec<String> {
    let mut words: Vec<String> = self.entries.keys().cloned().collect();
    words.sort();
    words
  }

  fn entries(&self, headword: &str) -> &[DictionaryEntry] {
    self.entries.get(headword).map(Vec::as_slice).unwrap_or(&[])
  }
}

/// Parses one source line. `Ok(None)` means the line is skipped by contract
/// (comment, blank, or a multi-word pairing headword).
fn parse_line(line: &str, line_no: usize) -> Result<Option<DictionaryEntry>, DictionaryError> {
  if line.trim().is_empty() || line.starts_with('#') {
    return Ok(None);
  }

  let fields: Vec<&str> = line.split_whitespace().collect();
  if fields.len() < 4 {
    return Err(DictionaryError::MalformedLine {
      line: line_no,
      reason: "expected headword, frequency, syllable count, and a pronunciation".to_string(),
    });
  }

  let (headword, tag_field) = split_headword(fields[0]);
  if headword.contains('_') {
    // Underscores join multi-word pairings, which are out of scope.
    return Ok(None);
  }
  if headword.is_empty() {
    return Err(DictionaryError::MalformedLine {
      line: line_no,
      reason: "empty headword".to_string(),
    });
  }

  let tags = parse_tags(tag_field).map_err(|e| match e {
    DictionaryError::UnknownPosTag { tag } => DictionaryError::MalformedLine {
      line: line_no,
      reason: format!("unknown part-of-speech tag: {tag}"),
    },
    other => other,
  })?;

  // fields[1] is the corpus frequency and fields[2] the syllable count;
  // neither participates in transliteration.
  let pronunciations = parse_pronunciations(&fields[3..]);
  if pronunciations.is_empty() {
    return Err(DictionaryError::MalformedLine {
      line: line_no,
      reason: "no pronunciation field".to_string(),
    });
  }

  Ok(Some(DictionaryEntry {
    headword: headword.to_string(),
    tags,
    pronunciations,
  }))
}

/// Splits `headword(tag1,tag2)` into the headword and the raw tag string.
fn split_headword(field: &str) -> (&str, Option<&str>) {
  match field.split_once('(') {
    Some((head, rest)) => (head, Some(rest.trim_end_matches(')'))),
    None => (field, None),
  }
}

/// Translates the raw comma-separated tag string into the canonical tag-set.
fn parse_tags(tag_field: Option<&str>) -> Result<BTreeSet<UdPosTag>, DictionaryError> {
  let raw_tags: Vec<&str> = match tag_field {
    Some(s) => s.split(',').collect(),
    None => Vec::new(),
  };
  let is_abbreviation = raw_tags.contains(&ABBREVIATION_MARKER);

  let mut tags = BTreeSet::new();
  for raw in raw_tags {
    let Some(tag) = normalize_tag(raw) else {
      continue;
    };
    tags.insert(PtbPosTag::parse(tag)?.to_ud());
    if is_abbreviation {
      tags.insert(UdPosTag::Abbr);
    }
  }
  Ok(tags)
}

/// Applies the tag normalization rules; `None` drops the tag entirely.
fn normalize_tag(raw: &str) -> Option<&str> {
  let tag = strip_rank_suffix(raw);
  if tag.starts_with('+')
    || tag.starts_with("root:")
    || tag.contains("_root")
    || tag.starts_with("fw_misspelling:")
    || tag == "punc"
    || tag == "of"
  {
    return None;
  }
  if tag.starts_with("nnp_") || tag.starts_with("_country") {
    return Some("nnp");
  }
  if tag.starts_with("nnps_") {
    return Some("nnps");
  }
  Some(tag)
}

/// Removes a trailing `_<float>` ranking: `nnp_surname_0.001` → `nnp_surname`.
fn strip_rank_suffix(tag: &str) -> &str {
  if let Some(index) = tag.rfind('_') {
    let suffix = &tag[index + 1..];
    if suffix.contains('.') && suffix.parse::<f64>().is_ok() {
      return &tag[..index];
    }
  }
  tag
}

/// Splits the pronunciation field into alternates, syllables, and phonemes.
///
/// A trailing `#` field terminator produces an empty alternate, which is
/// ignored rather than rejected.
fn parse_pronunciations(fields: &[&str]) -> Vec<Pronunciation> {
  let joined = fields.join(" ");
  joined
    .split('#')
    .filter_map(|alternate| {
      let syllables: Vec<Syllable> = alternate
        .split(" . ")
        .filter_map(|syllable| {
          let phonemes: Vec<String> =
            syllable.split_whitespace().map(str::to_string).collect();
          if phonemes.is_empty() {
            None
          } else {
            Some(Syllable::new(phonemes))
          }
        })
        .collect();
      if syllables.is_empty() {
        None
      } else {
        Some(Pronunciation::new(syllables))
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn import(source: &str) -> IsleDictionary {
    IsleDictionary::from_source(source, ParseMode::Lenient).expect("import should succeed")
  }

  #[test]
  fn parses_a_simple_line() {
    let dict = import("bake(vb,nn)  0.0455 1 b ˈeɪ k #\n");
    let entries = dict.entries("bake");
    assert_eq!(entries.len(), 1);
    assert_eq!(
      entries[0].tags,
      BTreeSet::from([UdPosTag::Verb, UdPosTag::Noun])
    );
    assert_eq!(entries[0].pronunciations.len(), 1);
    assert_eq!(entries[0].pronunciations[0].syllables().len(), 1);
    assert_eq!(
      entries[0].pronunciations[0].syllables()[0].phonemes(),
      ["b", "ˈeɪ", "k"]
    );
  }

  #[test]
  fn splits_syllables_and_alternates() {
    let dict = import("window(nn) 0.1 2 w ˈɪ n . d oʊ # w ˈɪ n . d ə #\n");
    let entry = &dict.entries("window")[0];
    assert_eq!(entry.pronunciations.len(), 2);
    assert_eq!(entry.pronunciations[0].syllables().len(), 2);
    assert_eq!(entry.pronunciations[1].syllables()[1].phonemes(), ["d", "ə"]);
  }

  #[test]
  fn skips_comments_and_blank_lines() {
    let dict = import("# header comment\n\n   \nrun(vb) 0.2 1 ɹ ˈʌ n #\n");
    assert_eq!(dict.words(), vec!["run".to_string()]);
  }

  #[test]
  fn skips_pairing_joiner_headwords() {
    let dict = import("a_la_mode(nn) 0.0 3 ɑ . l ɑ . m oʊ d #\nrun(vb) 0.2 1 ɹ ˈʌ n #\n");
    assert_eq!(dict.words(), vec!["run".to_string()]);
  }

  #[test]
  fn words_are_sorted_and_distinct() {
    let dict = import(
      "zoo(nn) 0.1 1 z ˈu #\n\
       ant(nn) 0.1 1 ˈæ n t #\n\
       ant(nnp) 0.1 1 ˈæ n t #\n",
    );
    assert_eq!(dict.words(), vec!["ant".to_string(), "zoo".to_string()]);
    assert_eq!(dict.entries("ant").len(), 2);
  }

  #[test]
  fn tag_normalization_collapses_proper_noun_families() {
    let dict = import("smith(nnp_surname_0.001,nn) 0.1 1 s m ˈɪ ɵ #\n");
    let entry = &dict.entries("smith")[0];
    assert_eq!(
      entry.tags,
      BTreeSet::from([UdPosTag::Propn, UdPosTag::Noun])
    );
  }

  #[test]
  fn tag_normalization_drops_markers_and_fillers() {
    let dict = import("read(+read.v,root:read,fw_misspelling:reed,punc,of,vbd) 0.1 1 ɹ ˈɛ d #\n");
    let entry = &dict.entries("read")[0];
    assert_eq!(entry.tags, BTreeSet::from([UdPosTag::Verb]));
  }

  #[test]
  fn abbreviation_marker_injects_abbr_category() {
    let dict = import("dr(+abbreviation,nnp) 0.1 1 d ˈɑ k t ɚ #\n");
    let entry = &dict.entries("dr")[0];
    assert_eq!(
      entry.tags,
      BTreeSet::from([UdPosTag::Propn, UdPosTag::Abbr])
    );
  }

  #[test]
  fn line_without_tags_yields_empty_tag_set() {
    let dict = import("hm 0.1 1 h ˈʌ m #\n");
    assert!(dict.entries("hm")[0].tags.is_empty());
  }

  #[test]
  fn lenient_mode_skips_unknown_tags() {
    let dict = import("odd(zzz) 0.1 1 ˈɑ d #\nrun(vb) 0.2 1 ɹ ˈʌ n #\n");
    assert_eq!(dict.words(), vec!["run".to_string()]);
  }

  #[test]
  fn strict_mode_fails_on_unknown_tags() {
    let err = IsleDictionary::from_source("odd(zzz) 0.1 1 ˈɑ d #\n", ParseMode::Strict).unwrap_err();
    assert!(matches!(
      err,
      DictionaryError::MalformedLine { line: 1, .. }
    ));
  }

  #[test]
  fn strict_mode_fails_on_truncated_lines() {
    let err = IsleDictionary::from_source("odd(nn) 0.1\n", ParseMode::Strict).unwrap_err();
    assert!(matches!(err, DictionaryError::MalformedLine { line: 1, .. }));
  }

  #[test]
  fn unknown_headword_returns_empty_slice() {
    let dict = import("run(vb) 0.2 1 ɹ ˈʌ n #\n");
    assert!(dict.entries("walk").is_empty());
  }

  #[test]
  fn rank_suffix_stripping_is_exact() {
    assert_eq!(strip_rank_suffix("nnp_surname_0.001"), "nnp_surname");
    assert_eq!(strip_rank_suffix("nnp_surname"), "nnp_surname");
    assert_eq!(strip_rank_suffix("vbz"), "vbz");
  }
}
