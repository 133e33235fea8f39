//! Per-token transliteration rule engine
//!
//! Consumes the tagged token stream, the lexicon, and the static mapping
//! tables, and emits the final Shavian string. Infallible: every rule branch
//! bottoms out in verbatim pass-through, trading pronunciation fidelity for
//! unconditional output.

use std::sync::Arc;

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::lexicon::{Lexicon, LexiconEntry};
use crate::mapper::ShawMappingData;
use crate::mapper::mapping_data::NAMING_DOT;
use crate::models::{SpeechToken, UdPosTag};
use crate::transliterator::tagger::SpeechTagger;

/// Recursion budget for lemma resynthesis and camelCase sub-words. Each
/// recursive call operates on a whole independent sub-word, and one level is
/// all the morphology rules ever need.
const MAX_GUESS_DEPTH: u8 = 1;

/// Suffix glyphs for synthesized inflections.
const ING_SUFFIX: &str = "𐑦𐑙";
const ID_SUFFIX: &str = "𐑦𐑛";
const IZ_SUFFIX: &str = "𐑦𐑟";

/// Placeholder characters the tokenization pipeline substitutes for line
/// breaks and tabs; restored after concatenation.
const NEWLINE_PLACEHOLDER: char = '␍';
const TAB_PLACEHOLDER: char = '␉';

/// The transliteration engine.
///
/// All inputs are immutable after construction and shared through `Arc`, so
/// one engine serves unlimited concurrent `transliterate` calls without
/// locking. The computation is pure and synchronous: no I/O, no suspension
/// points, no shared mutable state.
pub struct ShavianTransliterator {
  dictionary: Arc<dyn Dictionary>,
  tagger: Arc<dyn SpeechTagger>,
  mapping: Arc<ShawMappingData>,
  lexicon: Arc<Lexicon>,
}

impl ShavianTransliterator {
  /// Constructor for ShavianTransliterator
  pub fn new(
    dictionary: Arc<dyn Dictionary>,
    tagger: Arc<dyn SpeechTagger>,
    mapping: Arc<ShawMappingData>,
    lexicon: Arc<Lexicon>,
  ) -> Self {
    Self {
      dictionary,
      tagger,
      mapping,
      lexicon,
    }
  }

  /// Transliterates English text into the Shavian alphabet.
  pub fn transliterate(&self, english: &str) -> String {
    let tokens = self.tagger.tag_sentence(english);
    let tokens = self.fuse_contractions(tokens);

    let mut out = String::new();
    for token in &tokens {
      let shaw = self.transliterate_token(token, 0);
      debug!(surface = %token.surface, shaw = %shaw, "token");
      out.push_str(&shaw);
    }
    restore_control_characters(&out)
  }

  /// Stage 1: single left-to-right fusion pass over the raw token stream.
  /// Consumed tokens are never reconsidered.
  fn fuse_contractions(&self, tokens: Vec<SpeechToken>) -> Vec<SpeechToken> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
      let token = &tokens[i];

      if i + 2 < tokens.len() && is_apostrophe(&tokens[i + 1].surface) {
        let combined = format!("{}'{}", token.surface, tokens[i + 2].surface);

        // A known contraction becomes one CONT-tagged token.
        if !self.dictionary.entries(&combined.to_lowercase()).is_empty() {
          result.push(SpeechToken::new(&combined, UdPosTag::Cont, &combined));
          i += 3;
          continue;
        }

        // word + ' + s is a possessive; keep the head word's tag.
        if tokens[i + 2].surface == "s" {
          result.push(SpeechToken::new(&combined, token.pos, &combined));
          i += 3;
          continue;
        }
      }

      if i + 1 < tokens.len() && is_apostrophe(&tokens[i + 1].surface) {
        let combined = format!("{}'", token.surface);
        result.push(SpeechToken::new(&combined, token.pos, &combined));
        i += 2;
        continue;
      }

      result.push(token.clone());
      i += 1;
    }
    result
  }

  /// Stage 2: the per-token rule cascade, first match wins.
  ///
  /// `depth` tags the recursion level explicitly: lemma resynthesis and
  /// camelCase sub-words re-enter at `depth + 1` and synthesis is refused
  /// past [`MAX_GUESS_DEPTH`], so every chain terminates in pass-through.
  fn transliterate_token(&self, token: &SpeechToken, depth: u8) -> String {
    if token.pos.is_whitespace() {
      return token.surface.clone();
    }

    if let Some(&glyphs) = self.mapping.abbreviations().get(token.surface.as_str()) {
      return glyphs.to_string();
    }

    if token.pos.is_symbol() {
      return token.surface.clone();
    }

    let starts_alphabetic = token.surface.chars().next().is_some_and(char::is_alphabetic);
    if token.pos.is_number() && !starts_alphabetic {
      return token.surface.clone();
    }

    if let Some(base) = token.surface.strip_suffix("'s") {
      let base_token = SpeechToken::new(base, token.pos, &token.lemma);
      return self.possessive(&base_token, depth);
    }
    if let Some(base) = token.surface.strip_suffix('\'') {
      // Only a surviving `s'` spelling reaches here; the bare `word'`
      // fusion ends in a consonant other than s or carries whitespace.
      if base.ends_with('s') {
        let base_token = SpeechToken::new(base, token.pos, &token.lemma);
        return self.possessive(&base_token, depth);
      }
    }

    let variants = self.lexicon.entries(&token.surface);
    if variants.is_empty() {
      return self.guess_pronunciation(token, depth);
    }

    let shaw = select_variant(variants, token.pos);
    let is_proper = token.pos.is_proper_noun() || self.is_name(token, variants);
    if is_proper {
      // The tagger sometimes misses names; the naming dot marks them.
      format!("{NAMING_DOT}{shaw}")
    } else {
      shaw.to_string()
    }
  }

  /// Rule e: possessive synthesis. The base transliterates as its own word
  /// and the sibilant ending follows from its final glyph.
  fn possessive(&self, base_token: &SpeechToken, depth: u8) -> String {
    let base_ends_in_s = base_token.surface.ends_with('s');
    let base = self.transliterate_token(base_token, depth);
    let ending = self.final_s_sound(&base);
    if base_ends_in_s {
      format!("{base}{ending}'")
    } else {
      format!("{base}'{ending}")
    }
  }

  /// Chooses the plural/possessive sibilant from the final glyph of the
  /// base word: sibilant/affricate → 𐑦𐑟, unvoiced → 𐑕, otherwise 𐑟.
  fn final_s_sound(&self, base: &str) -> &'static str {
    match base.chars().last() {
      Some(glyph) if self.mapping.sibilants().contains(&glyph) => IZ_SUFFIX,
      Some(glyph) if self.mapping.unvoiced().contains(&glyph) => "𐑕",
      _ => "𐑟",
    }
  }

  /// Proper-noun override: the tagger did not say PROPN, but the lexicon
  /// only knows the word as a name, or the writer capitalized it.
  fn is_name(&self, token: &SpeechToken, variants: &[LexiconEntry]) -> bool {
    if variants.is_empty() || !token.pos.is_noun() {
      return false;
    }
    let found_proper = variants.iter().any(|v| v.test_tags(UdPosTag::is_proper_noun));
    let found_other = variants.iter().any(|v| {
      v.test_tags(UdPosTag::is_noun)
        || v.test_tags(UdPosTag::is_adjective)
        || v.test_tags(UdPosTag::is_verb)
    });
    let starts_uppercase = token.surface.chars().next().is_some_and(char::is_uppercase);
    found_proper && (!found_other || starts_uppercase)
  }

  /// Rule g: out-of-vocabulary synthesis from the lemma, or camelCase
  /// decomposition, or verbatim pass-through.
  fn guess_pronunciation(&self, token: &SpeechToken, depth: u8) -> String {
    if depth >= MAX_GUESS_DEPTH {
      return token.surface.clone();
    }

    if self.lexicon.has_word(&token.lemma) {
      return self.synthesize_from_lemma(token, depth);
    }

    if is_camel_case(&token.surface) {
      return self.split_camel_case(token, depth);
    }

    token.surface.clone()
  }

  /// Builds inflected forms from the lemma's reading.
  fn synthesize_from_lemma(&self, token: &SpeechToken, depth: u8) -> String {
    let lemma_token = SpeechToken::new(&token.lemma, token.pos, &token.lemma);
    let base = self.transliterate_token(&lemma_token, depth + 1);
    let surface = token.surface.as_str();

    // -ing forms.
    if token.pos.is_verb() && surface.ends_with("ing") {
      return format!("{base}{ING_SUFFIX}");
    }

    // -ed forms: the ending assimilates to the final glyph of the base.
    if token.pos.is_verb() && surface.ends_with("ed") && !token.lemma.ends_with("ed") {
      let ending = match base.chars().last() {
        Some('𐑛') | Some('𐑑') => ID_SUFFIX,
        Some(glyph) if self.mapping.nasals().contains(&glyph) => "𐑛",
        Some(glyph) if self.mapping.consonants().contains(&glyph) => "𐑑",
        _ => "𐑛",
      };
      return format!("{base}{ending}");
    }

    // -(e)s plurals.
    if token.pos.is_noun()
      && !token.pos.is_proper_noun()
      && surface.ends_with('s')
      && !token.lemma.ends_with('s')
    {
      let ending = self.final_s_sound(&base);
      return format!("{base}{ending}");
    }

    base
  }

  /// Transliterates camelCase/TitleCase pieces independently and joins them
  /// with naming dots; a capitalized original gets one leading dot as well.
  fn split_camel_case(&self, token: &SpeechToken, depth: u8) -> String {
    let starts_uppercase = token.surface.chars().next().is_some_and(char::is_uppercase);

    let pieces: Vec<String> = split_camel_segments(&token.surface)
      .into_iter()
      .map(|segment| {
        let lowered = segment.to_lowercase();
        // Each piece is re-tagged on its own, with no surrounding context.
        match self.tagger.tag_sentence(&lowered).into_iter().next() {
          Some(piece_token) => self.transliterate_token(&piece_token, depth + 1),
          None => lowered,
        }
      })
      .collect();

    let joined = pieces.join(&NAMING_DOT.to_string());
    if starts_uppercase {
      format!("{NAMING_DOT}{joined}")
    } else {
      joined
    }
  }
}

/// Picks the reading whose tag-set contains the token's tag, defaulting to
/// the first (best-ranked) reading.
fn select_variant(variants: &[LexiconEntry], pos: UdPosTag) -> &str {
  variants
    .iter()
    .find(|entry| entry.tags().contains(&pos))
    .unwrap_or(&variants[0])
    .shavian()
}

fn is_apostrophe(surface: &str) -> bool {
  surface == "'" || surface == "’"
}

/// Stage 3: restore the line breaks and tabs the tokenizer replaced with
/// placeholder characters.
fn restore_control_characters(text: &str) -> String {
  text
    .chars()
    .map(|c| match c {
      NEWLINE_PLACEHOLDER => '\n',
      TAB_PLACEHOLDER => '\t',
      other => other,
    })
    .collect()
}

/// camelCase/TitleCase shape: an optional leading capital, a lowercase run,
/// then at least one more capital followed by further letters.
fn is_camel_case(surface: &str) -> bool {
  let mut chars = surface.chars().peekable();

  if chars.peek().is_some_and(|c| c.is_ascii_uppercase()) {
    chars.next();
  }
  let mut lower = 0usize;
  while chars.peek().is_some_and(|c| c.is_ascii_lowercase()) {
    chars.next();
    lower += 1;
  }
  if lower == 0 {
    return false;
  }
  let mut upper = 0usize;
  while chars.peek().is_some_and(|c| c.is_ascii_uppercase()) {
    chars.next();
    upper += 1;
  }
  if upper == 0 {
    return false;
  }
  let mut tail = 0usize;
  while chars.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
    chars.next();
    tail += 1;
  }
  tail > 0 && chars.next().is_none()
}

/// Splits before each capital that starts a new segment: a capital after a
/// non-capital, or a capital that begins a capitalized-word run.
fn split_camel_segments(surface: &str) -> Vec<&str> {
  let chars: Vec<char> = surface.chars().collect();
  let mut boundaries = vec![0usize];

  let mut byte_offset = 0usize;
  for (i, &c) in chars.iter().enumerate() {
    if i > 0 && c.is_ascii_uppercase() {
      let after_non_upper = !chars[i - 1].is_ascii_uppercase();
      let begins_word = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
      if after_non_upper || begins_word {
        boundaries.push(byte_offset);
      }
    }
    byte_offset += c.len_utf8();
  }
  boundaries.push(surface.len());
  boundaries.dedup();

  boundaries
    .windows(2)
    .map(|pair| &surface[pair[0]..pair[1]])
    .collect()
}
