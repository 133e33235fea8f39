//! Shared fixtures for the integration tests: a small ISLE-format
//! dictionary and a scripted tagger double standing in for the external
//! tagging engine.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use shavian::ShavianService;
use shavian::dictionary::{IsleDictionary, ParseMode};
use shavian::models::{SpeechToken, UdPosTag};
use shavian::transliterator::SpeechTagger;

/// ISLE-format fixture covering the words the engine tests exercise.
pub const FIXTURE_DICTIONARY: &str = "\
# test fixture, ISLE line grammar
a(dt) 0.9 1 ə #
bake(vb) 0.1 1 b ˈeɪ k #
cat(nn) 0.2 1 k ˈæ t #
dog(nn) 0.2 1 d ˈɔ g #
don't(+do.v,vbp) 0.1 1 d ˈoʊ n t #
fish(nn,vb) 0.1 1 f ˈɪ ʃ #
java(nn) 0.0 2 dʒ ˈɑ . v ə #
judge(nn,vb) 0.1 1 dʒ ˈʌ dʒ #
paris(nnp) 0.0 2 p ˈɛ . ɹ ɪ s #
play(vb,nn) 0.2 1 p l ˈeɪ #
script(nn) 0.1 1 s k ɹ ˈɪ p t #
the(dt) 0.9 1 ð ə #
wind(nn) 0.1 1 w ˈɪ n d #
wind(vb) 0.1 1 w ˈɑɪ n d #
";

/// Deterministic tagger double: a word table plus a character-class
/// tokenizer. Unregistered words default to common nouns that are their own
/// lemma, which is what a statistical tagger does with novel words often
/// enough for these tests.
pub struct ScriptedTagger {
  words: HashMap<String, (UdPosTag, String)>,
}

impl ScriptedTagger {
  pub fn new() -> Self {
    Self {
      words: HashMap::new(),
    }
  }

  /// Registers a surface form with its tag and lemma.
  pub fn with_word(mut self, surface: &str, pos: UdPosTag, lemma: &str) -> Self {
    self.words.insert(surface.to_string(), (pos, lemma.to_string()));
    self
  }

  fn word_token(&self, surface: &str) -> SpeechToken {
    match self.words.get(surface) {
      Some((pos, lemma)) => SpeechToken::new(surface, *pos, lemma),
      None => SpeechToken::new(surface, UdPosTag::Noun, surface.to_lowercase()),
    }
  }

  fn flush(&self, tokens: &mut Vec<SpeechToken>, run: &mut String, digits: bool) {
    if run.is_empty() {
      return;
    }
    if digits {
      tokens.push(SpeechToken::new(run.as_str(), UdPosTag::Num, run.as_str()));
    } else {
      tokens.push(self.word_token(run));
    }
    run.clear();
  }
}

impl SpeechTagger for ScriptedTagger {
  fn tag_sentence(&self, text: &str) -> Vec<SpeechToken> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_digits = false;

    for c in text.chars() {
      if c.is_alphabetic() {
        if run_is_digits {
          self.flush(&mut tokens, &mut run, true);
        }
        run_is_digits = false;
        run.push(c);
        continue;
      }
      if c.is_ascii_digit() {
        if !run_is_digits {
          self.flush(&mut tokens, &mut run, false);
        }
        run_is_digits = true;
        run.push(c);
        continue;
      }
      self.flush(&mut tokens, &mut run, run_is_digits);
      run_is_digits = false;
      match c {
        // The tokenization pipeline replaces line breaks and tabs with
        // placeholder characters; the engine restores them in stage 3.
        '\n' => tokens.push(SpeechToken::new("␍", UdPosTag::Sym, "␍")),
        '\t' => tokens.push(SpeechToken::new("␉", UdPosTag::Sym, "␉")),
        c if c.is_whitespace() => {
          tokens.push(SpeechToken::new(c.to_string(), UdPosTag::White, " "));
        }
        other => {
          let s = other.to_string();
          tokens.push(SpeechToken::new(&s, UdPosTag::Punct, &s));
        }
      }
    }
    self.flush(&mut tokens, &mut run, run_is_digits);
    tokens
  }
}

/// Tagger preloaded with the inflections and names the tests rely on.
pub fn tagger() -> ScriptedTagger {
  ScriptedTagger::new()
    .with_word("the", UdPosTag::Det, "the")
    .with_word("bake", UdPosTag::Verb, "bake")
    .with_word("baking", UdPosTag::Verb, "bake")
    .with_word("baked", UdPosTag::Verb, "bake")
    .with_word("played", UdPosTag::Verb, "play")
    .with_word("cats", UdPosTag::Noun, "cat")
    .with_word("judges", UdPosTag::Noun, "judge")
    .with_word("paris", UdPosTag::Propn, "paris")
    .with_word("Paris", UdPosTag::Noun, "paris")
}

/// Full pipeline over the fixture dictionary and a tagger double.
pub fn service(tagger: ScriptedTagger) -> ShavianService {
  let dictionary = IsleDictionary::from_source(FIXTURE_DICTIONARY, ParseMode::Strict)
    .expect("fixture dictionary should parse");
  ShavianService::from_parts(Arc::new(dictionary), Arc::new(tagger))
}
