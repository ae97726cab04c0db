//! Keyword extraction: turns free document text into a ranked, capped list
//! of salient terms.
//!
//! Single-word candidates come from part-of-speech and stop-word filtering;
//! multi-word candidates come from noun chunks and carry double weight.
//! Detected technical terms are appended so stack names survive even when
//! the linguistic filters would drop them.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::linguistics::{LinguisticAnalyzer, Token};
use crate::analysis::normalize::normalize;
use crate::analysis::vocab::Vocabularies;

/// Extraction tuning knobs, loaded from config.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionOptions {
    /// Minimum surface length for single-word candidates.
    pub min_word_length: usize,
    /// Cap on the returned keyword list.
    pub top_n: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            top_n: 100,
        }
    }
}

pub struct KeywordExtractor {
    analyzer: Arc<dyn LinguisticAnalyzer>,
    vocab: Arc<Vocabularies>,
    options: ExtractionOptions,
}

impl KeywordExtractor {
    pub fn new(
        analyzer: Arc<dyn LinguisticAnalyzer>,
        vocab: Arc<Vocabularies>,
        options: ExtractionOptions,
    ) -> Self {
        Self {
            analyzer,
            vocab,
            options,
        }
    }

    /// Extracts the ranked keyword list for one document.
    ///
    /// Algorithm:
    /// 1. Normalize the text.
    /// 2. Tokenize; keep open-class, non-stop, alphabetic tokens at least
    ///    `min_word_length` long. Collect lemmas.
    /// 3. Clean noun chunks into multi-word phrases.
    /// 4. Rank by frequency (phrases count double), ties by first encounter.
    /// 5. Append detected technical terms, dedup, truncate to `top_n`.
    ///
    /// Never fails; empty or unusable input yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let singles: Vec<String> = self
            .analyzer
            .tokenize(&normalized)
            .iter()
            .filter_map(|t| self.candidate_lemma(t))
            .collect();

        let phrases: Vec<String> = self
            .analyzer
            .noun_chunks(&normalized)
            .iter()
            .filter_map(|chunk| self.clean_phrase(chunk))
            .collect();

        let mut keywords = rank_weighted(&singles, &phrases, self.options.top_n);

        for term in detect_technical_terms(text, &normalized, &self.vocab) {
            if !keywords.iter().any(|k| *k == term) {
                keywords.push(term);
            }
        }

        keywords.truncate(self.options.top_n);
        keywords
    }

    fn candidate_lemma(&self, token: &Token) -> Option<String> {
        if !token.pos.is_keyword_candidate() || !token.is_alphabetic {
            return None;
        }
        if token.surface.chars().count() < self.options.min_word_length {
            return None;
        }
        let lemma = token.lemma.to_lowercase();
        if self.vocab.is_stop_word(&lemma) {
            return None;
        }
        Some(lemma)
    }

    /// Joins a chunk's usable lemmas into a phrase. Phrases that collapse to
    /// fewer than two words are dropped; their constituents are already
    /// covered as single keywords.
    fn clean_phrase(&self, chunk: &[Token]) -> Option<String> {
        let parts: Vec<String> = chunk
            .iter()
            .filter_map(|t| {
                if !t.is_alphabetic {
                    return None;
                }
                let lemma = t.lemma.to_lowercase();
                if lemma.chars().count() < self.options.min_word_length {
                    return None;
                }
                if self.vocab.is_stop_word(&lemma) {
                    return None;
                }
                Some(lemma)
            })
            .collect();

        if parts.len() >= 2 {
            Some(parts.join(" "))
        } else {
            None
        }
    }
}

/// Ranks distinct keywords by weight descending. Phrase occurrences count
/// double. Ties keep first-encounter order: distinct singles in order of
/// first occurrence, then distinct phrases.
fn rank_weighted(singles: &[String], phrases: &[String], top_n: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut weights: HashMap<&str, u32> = HashMap::new();

    for lemma in singles {
        if !weights.contains_key(lemma.as_str()) {
            order.push(lemma);
        }
        *weights.entry(lemma.as_str()).or_insert(0) += 1;
    }

    let mut phrase_counts: HashMap<&str, u32> = HashMap::new();
    let mut phrase_order: Vec<&str> = Vec::new();
    for phrase in phrases {
        if !phrase_counts.contains_key(phrase.as_str()) {
            phrase_order.push(phrase);
        }
        *phrase_counts.entry(phrase.as_str()).or_insert(0) += 1;
    }
    for phrase in phrase_order {
        // phrases contain a space, so they never collide with single lemmas
        order.push(phrase);
        weights.insert(phrase, phrase_counts[phrase] * 2);
    }

    let mut entries: Vec<(&str, u32)> = order.into_iter().map(|k| (k, weights[k])).collect();
    // stable sort keeps encounter order for equal weights
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
        .into_iter()
        .take(top_n)
        .map(|(k, _)| k.to_string())
        .collect()
}

/// Finds technical vocabulary terms and acronyms in a document.
///
/// Vocabulary hits come from the normalized text's whitespace tokens. The
/// acronym scan runs over the original-case text, since normalization
/// lowercases everything and would hide uppercase runs. Acronyms that are
/// ordinary stop words ("AND" in a heading) are dropped. Returned in
/// first-encounter order, deduplicated.
pub fn detect_technical_terms(
    original: &str,
    normalized: &str,
    vocab: &Vocabularies,
) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for word in normalized.split_whitespace() {
        if vocab.is_technical(word) && seen.insert(word.to_string()) {
            found.push(word.to_string());
        }
    }

    for acronym in scan_acronyms(original) {
        if vocab.is_stop_word(&acronym) {
            continue;
        }
        if seen.insert(acronym.clone()) {
            found.push(acronym);
        }
    }

    found
}

/// Alphabetic runs of 2-5 uppercase letters, lowercased ("AWS" -> "aws").
fn scan_acronyms(text: &str) -> Vec<String> {
    let mut acronyms = Vec::new();
    let mut run = String::new();
    for c in text.chars() {
        if c.is_alphabetic() {
            run.push(c);
        } else {
            push_if_acronym(&run, &mut acronyms);
            run.clear();
        }
    }
    push_if_acronym(&run, &mut acronyms);
    acronyms
}

fn push_if_acronym(run: &str, out: &mut Vec<String>) {
    let len = run.chars().count();
    if (2..=5).contains(&len) && run.chars().all(|c| c.is_uppercase()) {
        out.push(run.to_lowercase());
    }
}
