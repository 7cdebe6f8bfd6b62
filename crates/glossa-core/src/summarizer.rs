//! Frequency-based extractive summarization.
//!
//! Every content word of the text gets a weight equal to the number of times
//! it occurs. A sentence scores the sum of the weights of its words, and the
//! summary is the top scoring sentences joined by single spaces, highest
//! score first.

use std::collections::HashMap;

use crate::language::LanguageProcessor;
use crate::preprocess::is_punctuation;

/// Sentences kept when the caller does not ask for a specific count
pub const DEFAULT_SENTENCES: usize = 3;

/// Occurrence counts of content words (no stopwords, no punctuation)
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn build<P: LanguageProcessor + ?Sized>(processor: &P, text: &str) -> Self {
        let mut counts = HashMap::new();

        for word in processor.tokenize(text) {
            if word.is_empty() || is_punctuation(&word) || processor.is_stopword(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Sentence scores keyed by the original sentence text, in first-seen order.
///
/// A sentence without a single scored word never gets an entry. A sentence
/// that occurs twice keeps one entry holding the sum of both occurrences.
#[derive(Debug, Default, Clone)]
pub struct SentenceScores {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl SentenceScores {
    pub fn build<P: LanguageProcessor + ?Sized>(
        processor: &P,
        sentences: &[String],
        table: &FrequencyTable,
    ) -> Self {
        let mut scores = Self::default();

        for sentence in sentences {
            let mut matched = false;
            let mut score = 0;

            for word in processor.tokenize(sentence) {
                if let Some(count) = table.get(&word) {
                    matched = true;
                    score += count;
                }
            }

            if matched {
                scores.add(sentence, score);
            }
        }

        scores
    }

    fn add(&mut self, sentence: &str, score: usize) {
        match self.index.get(sentence) {
            Some(&slot) => self.entries[slot].1 += score,
            None => {
                self.index.insert(sentence.to_string(), self.entries.len());
                self.entries.push((sentence.to_string(), score));
            }
        }
    }

    pub fn get(&self, sentence: &str) -> Option<usize> {
        self.index.get(sentence).map(|&slot| self.entries[slot].1)
    }

    /// Sentences by descending score; equal scores keep first-seen order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(sentence, score)| (sentence.as_str(), *score))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Summarize `text` into at most `n` of its own sentences.
pub fn summarize<P: LanguageProcessor + ?Sized>(processor: &P, text: &str, n: usize) -> String {
    if n == 0 || text.trim().is_empty() {
        return String::new();
    }

    let table = FrequencyTable::build(processor, text);
    if table.is_empty() {
        tracing::debug!("No content words survived filtering");
        return String::new();
    }

    let sentences = processor.sentences(text);
    let scores = SentenceScores::build(processor, &sentences, &table);
    tracing::debug!(
        "Scored {} of {} sentences using {} content words",
        scores.len(),
        sentences.len(),
        table.len()
    );

    scores
        .ranked()
        .into_iter()
        .take(n)
        .map(|(sentence, _)| sentence)
        .collect::<Vec<_>>()
        .join(" ")
}
