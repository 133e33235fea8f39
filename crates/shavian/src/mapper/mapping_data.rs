//! Static Shavian mapping tables
//!
//! IPA-phoneme → Shavian-glyph tables and the glyph classes the
//! transliteration rules test against. Constructed once at startup and
//! treated as read-only afterwards; sharing is lock-free.

use std::collections::{HashMap, HashSet};

/// Marker prefixed to proper nouns and camelCase segment boundaries.
pub const NAMING_DOT: char = '·';

/// IPA stress and release diacritics stripped before glyph matching.
pub const IGNORED_MARKS: [char; 3] = ['ˈ', 'ˌ', '˺'];

/// Consonant phonemes. The ISLE source writes /θ/ as `ɵ`.
const CONSONANTS: &[(&str, &str)] = &[
  ("p", "𐑐"),
  ("b", "𐑚"),
  ("d", "𐑛"),
  ("t", "𐑑"),
  ("k", "𐑒"),
  ("g", "𐑜"),
  ("f", "𐑓"),
  ("v", "𐑝"),
  ("ɵ", "𐑔"),
  ("ð", "𐑞"),
  ("s", "𐑕"),
  ("z", "𐑟"),
  ("ʃ", "𐑖"),
  ("ʒ", "𐑠"),
  ("tʃ", "𐑗"),
  ("dʒ", "𐑡"),
  ("j", "𐑘"),
  ("w", "𐑢"),
  ("ŋ", "𐑙"),
  ("h", "𐑣"),
  ("l̩", "𐑩𐑤"),
  ("l", "𐑤"),
  ("ɹ", "𐑮"),
  ("r", "𐑮"),
  ("m", "𐑥"),
  ("n", "𐑯"),
  ("n̩", "𐑩𐑯"),
];

/// Vowel phonemes, long and diphthong spellings included.
const VOWELS: &[(&str, &str)] = &[
  ("ɪ", "𐑦"),
  ("i", "𐑰"),
  ("iː", "𐑰"),
  ("ɛ", "𐑧"),
  ("eɪ", "𐑱"),
  ("æ", "𐑨"),
  ("ɑɪ", "𐑲"),
  ("aɪ", "𐑲"),
  ("ə", "𐑩"),
  ("ʌ", "𐑳"),
  ("ɒ", "𐑪"),
  ("oʊ", "𐑴"),
  ("ʊ", "𐑫"),
  ("u", "𐑵"),
  ("aʊ", "𐑬"),
  ("ɔi", "𐑶"),
  ("ɔɪ", "𐑶"),
  ("ɑ", "𐑭"),
  ("ɑː", "𐑭"),
  ("ɔ", "𐑷"),
  ("ɔː", "𐑷"),
  ("ei", "𐑱"),
  ("iə", "𐑾"),
  ("ju", "𐑿"),
];

/// R-colored vowels, merged into the main table at construction.
const R_COLORED: &[(&str, &str)] = &[
  ("ɑɹ", "𐑸"),
  ("ɑːɹ", "𐑸"),
  ("ɔɹ", "𐑹"),
  ("ɔəɹ", "𐑹"),
  ("ɛəɹ", "𐑺"),
  ("ɛɹ", "𐑺"),
  ("ɝ", "𐑻"),
  ("ɜɹ", "𐑻"),
  ("ɚ", "𐑼"),
  ("əɹ", "𐑼"),
  ("ɪɹ", "𐑽"),
  ("ɪəɹ", "𐑽"),
];

/// Irregular-reduction function words written with a single letter.
const ABBREVIATIONS: &[(&str, &str)] = &[
  ("to", "𐑑"),
  ("the", "𐑞"),
  ("and", "𐑯"),
  ("of", "𐑝"),
];

/// Nasal consonant glyphs.
const NASALS: [char; 3] = ['𐑙', '𐑥', '𐑯'];

/// Sibilant fricatives and affricates: a final one of these takes the
/// 𐑦𐑟 plural/possessive ending.
const SIBILANTS: [char; 6] = ['𐑕', '𐑟', '𐑖', '𐑠', '𐑗', '𐑡'];

/// Unvoiced consonant glyphs: a final one of these takes the 𐑕 ending.
const UNVOICED: [char; 8] = ['𐑐', '𐑑', '𐑒', '𐑓', '𐑔', '𐑕', '𐑖', '𐑗'];

/// Merged phoneme tables plus the glyph classes used by the rule engine.
#[derive(Debug, Clone)]
pub struct ShawMappingData {
  ipa_to_shaw: HashMap<&'static str, &'static str>,
  abbreviations: HashMap<&'static str, &'static str>,
  consonants: HashSet<char>,
  nasals: HashSet<char>,
  sibilants: HashSet<char>,
  unvoiced: HashSet<char>,
}

impl ShawMappingData {
  /// Builds the merged tables. Cheap; intended to run once at startup.
  pub fn new() -> Self {
    let ipa_to_shaw = CONSONANTS
      .iter()
      .chain(VOWELS)
      .chain(R_COLORED)
      .copied()
      .collect();

    // Single-glyph consonant outputs only; the syllabic l̩/n̩ spellings open
    // with a schwa and must not classify 𐑩 as a consonant.
    let consonants = CONSONANTS
      .iter()
      .filter_map(|(_, glyphs)| {
        let mut chars = glyphs.chars();
        match (chars.next(), chars.next()) {
          (Some(c), None) => Some(c),
          _ => None,
        }
      })
      .collect();

    Self {
      ipa_to_shaw,
      abbreviations: ABBREVIATIONS.iter().copied().collect(),
      consonants,
      nasals: NASALS.into_iter().collect(),
      sibilants: SIBILANTS.into_iter().collect(),
      unvoiced: UNVOICED.into_iter().collect(),
    }
  }

  /// Full IPA pattern → glyph table (consonants, vowels, r-colored merged).
  pub fn ipa_to_shaw(&self) -> &HashMap<&'static str, &'static str> {
    &self.ipa_to_shaw
  }

  /// Fixed single-glyph spellings for the closed abbreviation word set.
  pub fn abbreviations(&self) -> &HashMap<&'static str, &'static str> {
    &self.abbreviations
  }

  /// Consonant glyph class.
  pub fn consonants(&self) -> &HashSet<char> {
    &self.consonants
  }

  /// Nasal glyph class.
  pub fn nasals(&self) -> &HashSet<char> {
    &self.nasals
  }

  /// Sibilant/affricate glyph class.
  pub fn sibilants(&self) -> &HashSet<char> {
    &self.sibilants
  }

  /// Unvoiced consonant glyph class.
  pub fn unvoiced(&self) -> &HashSet<char> {
    &self.unvoiced
  }
}

impl Default for ShawMappingData {
  fn default() -> Self {
    Self::new()
  }
}
