//! Data Model Definition
//!
//! Core vocabulary of the crate: part-of-speech tag sets, pronunciation
//! structure, dictionary entries, and the tagger token contract.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::error_definition::DictionaryError;

/// Universal Dependencies part-of-speech categories, plus the custom
/// categories produced by the tokenization pipeline.
///
/// This is a closed set: the transliteration rules match exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UdPosTag {
  /// adjective
  Adj,
  /// adposition
  Adp,
  /// adverb
  Adv,
  /// auxiliary
  Aux,
  /// coordinating conjunction
  Cconj,
  /// determiner
  Det,
  /// interjection
  Intj,
  /// noun
  Noun,
  /// numeral
  Num,
  /// particle
  Part,
  /// pronoun
  Pron,
  /// proper noun
  Propn,
  /// punctuation
  Punct,
  /// subordinating conjunction
  Sconj,
  /// symbol
  Sym,
  /// verb
  Verb,
  /// other
  X,
  /// Custom: whitespace run between words
  White,
  /// Custom: dictionary-marked abbreviation
  Abbr,
  /// Custom: fused contraction such as `don't`
  Cont,
}

impl UdPosTag {
  /// Whitespace token produced during raw-text reconstruction.
  pub fn is_whitespace(self) -> bool {
    self == UdPosTag::White
  }

  /// Verb category.
  pub fn is_verb(self) -> bool {
    self == UdPosTag::Verb
  }

  /// Common noun category (proper nouns are separate).
  pub fn is_noun(self) -> bool {
    self == UdPosTag::Noun
  }

  /// Proper noun category.
  pub fn is_proper_noun(self) -> bool {
    self == UdPosTag::Propn
  }

  /// Pronoun category.
  pub fn is_pronoun(self) -> bool {
    self == UdPosTag::Pron
  }

  /// Adjective category.
  pub fn is_adjective(self) -> bool {
    self == UdPosTag::Adj
  }

  /// Symbol category.
  pub fn is_symbol(self) -> bool {
    self == UdPosTag::Sym
  }

  /// Numeral category.
  pub fn is_number(self) -> bool {
    self == UdPosTag::Num
  }
}

/// Penn Treebank part-of-speech tags as they appear in the ISLE dictionary
/// tag field, together with their fixed translation to [`UdPosTag`].
///
/// The table is exhaustive by construction; a tag string outside it is a
/// dictionary parse error, never a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // variant names are the Penn Treebank tag mnemonics
pub enum PtbPosTag {
  Cc,
  Cd,
  Dt,
  Ex,
  Fw,
  In,
  Jj,
  Jjr,
  Jjs,
  Ls,
  Md,
  Nn,
  Nns,
  Nnp,
  Nnps,
  Pdt,
  Pos,
  Prp,
  Prps,
  Rb,
  Rbr,
  Rbs,
  Rp,
  Sym,
  To,
  Uh,
  Vb,
  Vbd,
  Vbg,
  Vbn,
  Vbp,
  Vbz,
  Wdt,
  Wp,
  Wps,
  Wrb,
}

impl PtbPosTag {
  /// Parses a raw Penn Treebank tag string.
  ///
  /// Trims surrounding whitespace, uppercases, and folds `$` to `S` so that
  /// `prp$` parses as [`PtbPosTag::Prps`].
  pub fn parse(tag: &str) -> Result<Self, DictionaryError> {
    let normalized = tag.trim().to_uppercase().replace('$', "S");
    let parsed = match normalized.as_str() {
      "CC" => PtbPosTag::Cc,
      "CD" => PtbPosTag::Cd,
      "DT" => PtbPosTag::Dt,
      "EX" => PtbPosTag::Ex,
      "FW" => PtbPosTag::Fw,
      "IN" => PtbPosTag::In,
      "JJ" => PtbPosTag::Jj,
      "JJR" => PtbPosTag::Jjr,
      "JJS" => PtbPosTag::Jjs,
      "LS" => PtbPosTag::Ls,
      "MD" => PtbPosTag::Md,
      "NN" => PtbPosTag::Nn,
      "NNS" => PtbPosTag::Nns,
      "NNP" => PtbPosTag::Nnp,
      "NNPS" => PtbPosTag::Nnps,
      "PDT" => PtbPosTag::Pdt,
      "POS" => PtbPosTag::Pos,
      "PRP" => PtbPosTag::Prp,
      "PRPS" => PtbPosTag::Prps,
      "RB" => PtbPosTag::Rb,
      "RBR" => PtbPosTag::Rbr,
      "RBS" => PtbPosTag::Rbs,
      "RP" => PtbPosTag::Rp,
      "SYM" => PtbPosTag::Sym,
      "TO" => PtbPosTag::To,
      "UH" => PtbPosTag::Uh,
      "VB" => PtbPosTag::Vb,
      "VBD" => PtbPosTag::Vbd,
      "VBG" => PtbPosTag::Vbg,
      "VBN" => PtbPosTag::Vbn,
      "VBP" => PtbPosTag::Vbp,
      "VBZ" => PtbPosTag::Vbz,
      "WDT" => PtbPosTag::Wdt,
      "WP" => PtbPosTag::Wp,
      "WPS" => PtbPosTag::Wps,
      "WRB" => PtbPosTag::Wrb,
      _ => {
        return Err(DictionaryError::UnknownPosTag {
          tag: tag.trim().to_string(),
        });
      }
    };
    Ok(parsed)
  }

  /// Translates into the canonical Universal Dependencies category.
  pub fn to_ud(self) -> UdPosTag {
    match self {
      PtbPosTag::Cc => UdPosTag::Cconj,
      PtbPosTag::Cd => UdPosTag::Num,
      PtbPosTag::Dt | PtbPosTag::Pdt => UdPosTag::Det,
      PtbPosTag::Ex | PtbPosTag::Prp | PtbPosTag::Prps => UdPosTag::Pron,
      PtbPosTag::Wdt | PtbPosTag::Wp | PtbPosTag::Wps => UdPosTag::Pron,
      PtbPosTag::Fw => UdPosTag::X,
      PtbPosTag::In => UdPosTag::Sconj,
      PtbPosTag::Jj | PtbPosTag::Jjr | PtbPosTag::Jjs => UdPosTag::Adj,
      PtbPosTag::Ls => UdPosTag::Punct,
      PtbPosTag::Md => UdPosTag::Verb,
      PtbPosTag::Nn | PtbPosTag::Nns => UdPosTag::Noun,
      PtbPosTag::Nnp | PtbPosTag::Nnps => UdPosTag::Propn,
      PtbPosTag::Pos | PtbPosTag::Rp => UdPosTag::Part,
      PtbPosTag::Rb | PtbPosTag::Rbr | PtbPosTag::Rbs | PtbPosTag::Wrb => UdPosTag::Adv,
      PtbPosTag::Sym => UdPosTag::Sym,
      PtbPosTag::To => UdPosTag::Adp,
      PtbPosTag::Uh => UdPosTag::Intj,
      PtbPosTag::Vb
      | PtbPosTag::Vbd
      | PtbPosTag::Vbg
      | PtbPosTag::Vbn
      | PtbPosTag::Vbp
      | PtbPosTag::Vbz => UdPosTag::Verb,
    }
  }
}

/// Ordered, non-empty sequence of phoneme symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
  phonemes: Vec<String>,
}

impl Syllable {
  /// Constructor for Syllable
  pub fn new(phonemes: Vec<String>) -> Self {
    Self { phonemes }
  }

  /// Phoneme symbols in order.
  pub fn phonemes(&self) -> &[String] {
    &self.phonemes
  }
}

/// Ordered, non-empty sequence of syllables: one way to say a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pronunciation {
  syllables: Vec<Syllable>,
}

impl Pronunciation {
  /// Constructor for Pronunciation
  pub fn new(syllables: Vec<Syllable>) -> Self {
    Self { syllables }
  }

  /// Syllables in order.
  pub fn syllables(&self) -> &[Syllable] {
    &self.syllables
  }
}

/// One parsed dictionary line: headword, its part-of-speech tag-set, and the
/// pronunciation variants given on that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
  /// Normalized written form used as the lookup key.
  pub headword: String,

  /// Canonical tag-set for this sense. Empty only when the source line
  /// carried no tag parentheses.
  pub tags: BTreeSet<UdPosTag>,

  /// Pronunciation variants, at least one per line.
  pub pronunciations: Vec<Pronunciation>,
}

/// One tagged token from the external speech tagger.
///
/// Transient per transliteration call; the engine never stores these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechToken {
  /// Surface text as it appeared in the input.
  pub surface: String,

  /// Canonical part-of-speech tag.
  pub pos: UdPosTag,

  /// Base (dictionary) form of the surface word.
  pub lemma: String,
}

impl SpeechToken {
  /// Constructor for SpeechToken
  pub fn new(surface: impl Into<String>, pos: UdPosTag, lemma: impl Into<String>) -> Self {
    Self {
      surface: surface.into(),
      pos,
      lemma: lemma.into(),
    }
  }
}
