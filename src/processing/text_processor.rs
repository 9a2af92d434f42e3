//! Text processing and normalization

use crate::processing::lemmatizer::Lemmatizer;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Which normalization pipeline produced a `NormalizedText`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerMode {
    /// Unicode word segmentation, stopword filtering and lemmatization
    #[default]
    Linguistic,
    /// Degraded mode: whitespace tokens, lemma = token, stems still computed
    Whitespace,
}

/// Index-aligned token, lemma and stem sequences for one document
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedText {
    pub tokens: Vec<String>,
    pub lemmas: Vec<String>,
    pub stems: Vec<String>,
    pub mode: NormalizerMode,
}

impl NormalizedText {
    fn empty(mode: NormalizerMode) -> Self {
        Self {
            tokens: Vec::new(),
            lemmas: Vec::new(),
            stems: Vec::new(),
            mode,
        }
    }

    /// Union of every token, lemma and stem
    pub fn variants(&self) -> HashSet<&str> {
        self.tokens
            .iter()
            .chain(self.lemmas.iter())
            .chain(self.stems.iter())
            .map(|s| s.as_str())
            .collect()
    }
}

pub struct TextProcessor {
    stop_words: HashSet<String>,
    mode: NormalizerMode,
    lemmatizer: Lemmatizer,
    stemmer: Stemmer,
}

impl TextProcessor {
    pub fn new(stop_words: HashSet<String>, mode: NormalizerMode) -> Self {
        Self {
            stop_words,
            mode,
            lemmatizer: Lemmatizer::new(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn mode(&self) -> NormalizerMode {
        self.mode
    }

    /// Lowercase, tokenize and filter `text`, computing lemma and stem per token
    pub fn normalize(&self, text: &str) -> NormalizedText {
        if text.trim().is_empty() {
            return NormalizedText::empty(self.mode);
        }

        let lowered = text.to_lowercase();
        let tokens = match self.mode {
            NormalizerMode::Linguistic => self.tokenize(&lowered),
            NormalizerMode::Whitespace => self.split_whitespace(&lowered),
        };

        let lemmas = match self.mode {
            NormalizerMode::Linguistic => tokens.iter().map(|t| self.lemmatizer.lemmatize(t)).collect(),
            NormalizerMode::Whitespace => tokens.clone(),
        };

        let stems = tokens.iter().map(|t| self.stemmer.stem(t).into_owned()).collect();

        NormalizedText {
            tokens,
            lemmas,
            stems,
            mode: self.mode,
        }
    }

    /// Tokenize lowercased text using Unicode segmentation
    ///
    /// Compound technical terms (`c++`, `ci/cd`, `c#`) are kept whole in
    /// addition to their word parts.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let compound = Self::trim_punctuation(chunk);
            if compound.contains(['+', '#', '/']) && self.keep(compound) {
                tokens.push(compound.to_string());
            }

            for word in chunk.unicode_words() {
                if self.keep(word) {
                    tokens.push(word.to_string());
                }
            }
        }

        tokens
    }

    fn split_whitespace(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(Self::trim_punctuation)
            .filter(|t| self.keep(t))
            .map(|t| t.to_string())
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        token.chars().count() > 1
            && token.chars().any(|c| c.is_alphanumeric())
            && !self.stop_words.contains(token)
    }

    /// Strip surrounding punctuation, keeping trailing `+` and `#`
    fn trim_punctuation(word: &str) -> &str {
        word.trim_start_matches(|c: char| !c.is_alphanumeric())
            .trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
    }
}
