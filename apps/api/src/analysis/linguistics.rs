//! Linguistic analysis behind a pluggable trait: tokenization,
//! part-of-speech tagging, lemmatization, and noun-phrase chunking.
//!
//! Default: `RuleBasedAnalyzer` (lexicon tables + suffix heuristics, pure
//! Rust, deterministic). Fallback: `BasicAnalyzer` (whitespace splitting,
//! every token a noun candidate) for explicitly degraded operation.
//!
//! `AppState` holds the selected backend behind `Arc<dyn LinguisticAnalyzer>`,
//! chosen once at startup via `ANALYZER_MODE` and never switched mid-run.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::lexicon;

// ────────────────────────────────────────────────────────────────────────────
// Token model
// ────────────────────────────────────────────────────────────────────────────

/// Part-of-speech tag assigned by an analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
    Other,
}

impl PartOfSpeech {
    /// Open-class tags the keyword extractor treats as candidates.
    pub fn is_keyword_candidate(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::ProperNoun
                | PartOfSpeech::Adjective
                | PartOfSpeech::Verb
        )
    }

    /// Tags that may appear inside a noun chunk.
    fn is_chunkable(self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Adjective
        )
    }

    fn is_nominal(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

/// A single analyzed token.
#[derive(Debug, Clone)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_alphabetic: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The linguistic capability the extractor depends on. Implement this to swap
/// backends without touching the extractor, handlers, or callers.
pub trait LinguisticAnalyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
    fn noun_chunks(&self, text: &str) -> Vec<Vec<Token>>;
    fn name(&self) -> &'static str;
}

/// Which analyzer backend to run. Parsed from `ANALYZER_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerMode {
    Rule,
    Basic,
}

impl std::str::FromStr for AnalyzerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule" => Ok(AnalyzerMode::Rule),
            "basic" => Ok(AnalyzerMode::Basic),
            other => Err(format!(
                "unknown analyzer mode '{other}' (expected 'rule' or 'basic')"
            )),
        }
    }
}

/// Constructs the configured analyzer. Selecting the basic backend is a
/// degraded mode, not an error: it logs a warning and the extractor copes
/// with coarser tags and missing noun chunks.
pub fn build_analyzer(mode: AnalyzerMode) -> Arc<dyn LinguisticAnalyzer> {
    match mode {
        AnalyzerMode::Rule => Arc::new(RuleBasedAnalyzer::new()),
        AnalyzerMode::Basic => {
            tracing::warn!(
                "basic analyzer selected: no part-of-speech tagging or noun chunks, \
                 keyword quality will be degraded"
            );
            Arc::new(BasicAnalyzer)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedAnalyzer: default backend
// ────────────────────────────────────────────────────────────────────────────

/// Lexicon-driven analyzer. Tags closed classes from word lists, open classes
/// from suffix heuristics; lemmatizes with irregular-form tables plus plural
/// and verbal suffix stripping; chunks maximal adjective/noun runs.
///
/// Tables come from `lexicon` and are loaded once at construction.
pub struct RuleBasedAnalyzer {
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    common_adverbs: HashSet<&'static str>,
    non_adverb_ly: HashSet<&'static str>,
    nominal_exceptions: HashSet<&'static str>,
    participial_adjectives: HashSet<&'static str>,
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    stem_fixups: HashMap<&'static str, &'static str>,
    plural_stable: HashSet<&'static str>,
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish",
];

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self {
            determiners: lexicon::DETERMINERS.iter().copied().collect(),
            pronouns: lexicon::PRONOUNS.iter().copied().collect(),
            prepositions: lexicon::PREPOSITIONS.iter().copied().collect(),
            conjunctions: lexicon::CONJUNCTIONS.iter().copied().collect(),
            auxiliaries: lexicon::AUXILIARIES.iter().copied().collect(),
            common_adverbs: lexicon::COMMON_ADVERBS.iter().copied().collect(),
            non_adverb_ly: lexicon::NON_ADVERB_LY.iter().copied().collect(),
            nominal_exceptions: lexicon::NOMINAL_EXCEPTIONS.iter().copied().collect(),
            participial_adjectives: lexicon::PARTICIPIAL_ADJECTIVES.iter().copied().collect(),
            irregular_verbs: lexicon::IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: lexicon::IRREGULAR_NOUNS.iter().copied().collect(),
            stem_fixups: lexicon::STEM_FIXUPS.iter().copied().collect(),
            plural_stable: lexicon::PLURAL_STABLE.iter().copied().collect(),
        }
    }

    fn token_for(&self, surface: &str) -> Token {
        let lower = surface.to_lowercase();
        let pos = self.tag(surface, &lower);
        let lemma = self.lemmatize(&lower, pos);
        Token {
            surface: surface.to_string(),
            lemma,
            pos,
            is_alphabetic: surface.chars().all(|c| c.is_alphabetic()),
        }
    }

    fn tag(&self, surface: &str, lower: &str) -> PartOfSpeech {
        if !surface.chars().all(|c| c.is_alphabetic()) {
            return if !surface.is_empty() && surface.chars().all(|c| c.is_ascii_digit()) {
                PartOfSpeech::Number
            } else {
                PartOfSpeech::Other
            };
        }

        if self.determiners.contains(lower) {
            return PartOfSpeech::Determiner;
        }
        if self.pronouns.contains(lower) {
            return PartOfSpeech::Pronoun;
        }
        if self.prepositions.contains(lower) {
            return PartOfSpeech::Preposition;
        }
        if self.conjunctions.contains(lower) {
            return PartOfSpeech::Conjunction;
        }
        if self.auxiliaries.contains(lower) {
            return PartOfSpeech::Verb;
        }
        if self.nominal_exceptions.contains(lower) {
            return PartOfSpeech::Noun;
        }
        if self.participial_adjectives.contains(lower) {
            return PartOfSpeech::Adjective;
        }
        if self.common_adverbs.contains(lower)
            || (lower.ends_with("ly") && lower.len() > 4 && !self.non_adverb_ly.contains(lower))
        {
            return PartOfSpeech::Adverb;
        }
        if self.irregular_verbs.contains_key(lower) {
            return PartOfSpeech::Verb;
        }
        if self.irregular_nouns.contains_key(lower) {
            return PartOfSpeech::Noun;
        }
        if verb_suffix_strippable(lower) {
            return PartOfSpeech::Verb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) && lower.len() > 4 {
            return PartOfSpeech::Adjective;
        }
        if surface.chars().next().is_some_and(|c| c.is_uppercase()) {
            return PartOfSpeech::ProperNoun;
        }
        PartOfSpeech::Noun
    }

    fn lemmatize(&self, lower: &str, pos: PartOfSpeech) -> String {
        if self.plural_stable.contains(lower) {
            return lower.to_string();
        }
        if let Some(lemma) = self.irregular_verbs.get(lower) {
            return (*lemma).to_string();
        }
        if let Some(lemma) = self.irregular_nouns.get(lower) {
            return (*lemma).to_string();
        }
        match pos {
            PartOfSpeech::Verb => self.lemmatize_verb(lower),
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun => self.lemmatize_noun(lower),
            _ => lower.to_string(),
        }
    }

    /// Strips "ing"/"ied"/"ed", repairs doubled consonants ("running" ->
    /// "runn" -> "run") and e-dropped stems ("managed" -> "manag" ->
    /// "manage"). Words ending "eed" keep their surface form; past tenses
    /// like "agreed" come from the irregular table instead.
    fn lemmatize_verb(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 3 && has_vowel(stem) {
                return self.repair_stem(stem);
            }
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ied") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
            return word.to_string();
        }
        if word.ends_with("eed") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.len() >= 3 && has_vowel(stem) {
                return self.repair_stem(stem);
            }
        }
        word.to_string()
    }

    fn lemmatize_noun(&self, word: &str) -> String {
        let n = word.len();
        if let Some(stem) = word.strip_suffix("ies") {
            if n > 4 {
                return format!("{stem}y");
            }
        }
        for suffix in ["sses", "xes", "zes", "ches", "shes", "oes"] {
            if word.ends_with(suffix) && n > 5 {
                if let Some(stem) = word.strip_suffix("es") {
                    return stem.to_string();
                }
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            if n > 3 && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
                return stem.to_string();
            }
        }
        word.to_string()
    }

    fn repair_stem(&self, stem: &str) -> String {
        if let Some(fixed) = self.stem_fixups.get(stem) {
            return (*fixed).to_string();
        }
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n >= 4 && chars[n - 1] == chars[n - 2] && is_geminable(chars[n - 1]) {
            return chars[..n - 1].iter().collect();
        }
        stem.to_string()
    }
}

impl Default for RuleBasedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticAnalyzer for RuleBasedAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(|w| self.token_for(w)).collect()
    }

    /// Maximal runs of adjective/noun tokens, trimmed so every chunk ends on
    /// a noun. Single-noun runs count; the extractor keeps only multi-word
    /// phrases after cleaning.
    fn noun_chunks(&self, text: &str) -> Vec<Vec<Token>> {
        let mut chunks = Vec::new();
        let mut run: Vec<Token> = Vec::new();
        for token in self.tokenize(text) {
            if token.pos.is_chunkable() && token.is_alphabetic {
                run.push(token);
            } else {
                flush_chunk(&mut run, &mut chunks);
            }
        }
        flush_chunk(&mut run, &mut chunks);
        chunks
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

fn flush_chunk(run: &mut Vec<Token>, chunks: &mut Vec<Vec<Token>>) {
    while run.last().is_some_and(|t| !t.pos.is_nominal()) {
        run.pop();
    }
    if !run.is_empty() {
        chunks.push(std::mem::take(run));
    }
}

/// True when stripping "ing"/"ed" leaves a plausible stem (at least three
/// characters containing a vowel). Keeps "string", "speed", and "thing" out
/// of the verb class.
fn verb_suffix_strippable(word: &str) -> bool {
    if let Some(stem) = word.strip_suffix("ing") {
        return stem.len() >= 3 && has_vowel(stem);
    }
    if word.ends_with("eed") {
        return false;
    }
    if let Some(stem) = word.strip_suffix("ed") {
        return stem.len() >= 3 && has_vowel(stem);
    }
    false
}

fn has_vowel(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn is_geminable(c: char) -> bool {
    matches!(c, 'b' | 'd' | 'g' | 'm' | 'n' | 'p' | 'r' | 't')
}

// ────────────────────────────────────────────────────────────────────────────
// BasicAnalyzer: degraded fallback backend
// ────────────────────────────────────────────────────────────────────────────

/// Whitespace tokenizer with no linguistic model. Every alphabetic token is
/// treated as a noun candidate so extraction still produces keywords; noun
/// chunks are unavailable, so no phrase keywords are produced.
pub struct BasicAnalyzer;

impl LinguisticAnalyzer for BasicAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|w| Token {
                surface: w.to_string(),
                lemma: w.to_lowercase(),
                pos: PartOfSpeech::Noun,
                is_alphabetic: w.chars().all(|c| c.is_alphabetic()),
            })
            .collect()
    }

    fn noun_chunks(&self, _text: &str) -> Vec<Vec<Token>> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
