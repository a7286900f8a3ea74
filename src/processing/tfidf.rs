//! TF-IDF vectorization for the semantic similarity signal

use crate::error::{Result, ResumeScreenerError};
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Joint TF-IDF vectorizer over a pair of skill documents.
///
/// Mirrors the classic setup: English stop words removed, unigrams plus
/// bigrams, vocabulary capped at the most frequent terms, smoothed IDF and
/// L2-normalized vectors. Fitted fresh per comparison since the corpus is
/// always exactly the two documents being scored.
pub struct TfidfVectorizer {
    stop_words: HashSet<String>,
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            max_features,
        }
    }

    /// Fit over the two documents and return their cosine similarity.
    ///
    /// Fails when no term survives tokenization (degenerate vocabulary);
    /// callers are expected to log and treat that as zero similarity.
    pub fn similarity(&self, doc_a: &str, doc_b: &str) -> Result<f64> {
        let (vector_a, vector_b) = self.fit_transform_pair(doc_a, doc_b)?;
        cosine_similarity(&vector_a, &vector_b)
    }

    /// Fit a joint vocabulary over both documents and produce one TF-IDF
    /// vector per document.
    pub fn fit_transform_pair(&self, doc_a: &str, doc_b: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let terms_a = self.ngrams(doc_a);
        let terms_b = self.ngrams(doc_b);

        let mut corpus_frequency: HashMap<String, usize> = HashMap::new();
        for term in terms_a.iter().chain(terms_b.iter()) {
            *corpus_frequency.entry(term.clone()).or_insert(0) += 1;
        }

        if corpus_frequency.is_empty() {
            return Err(ResumeScreenerError::Processing(
                "Empty vocabulary: documents contain only stop words or degenerate tokens"
                    .to_string(),
            ));
        }

        let vocabulary = self.build_vocabulary(&corpus_frequency);

        let counts_a = term_counts(&terms_a);
        let counts_b = term_counts(&terms_b);

        let mut vector_a = Vec::with_capacity(vocabulary.len());
        let mut vector_b = Vec::with_capacity(vocabulary.len());

        for term in &vocabulary {
            let tf_a = counts_a.get(term).copied().unwrap_or(0) as f64;
            let tf_b = counts_b.get(term).copied().unwrap_or(0) as f64;

            let document_frequency =
                (tf_a > 0.0) as usize as f64 + (tf_b > 0.0) as usize as f64;
            // Smoothed IDF over the two-document corpus.
            let idf = ((1.0 + 2.0) / (1.0 + document_frequency)).ln() + 1.0;

            vector_a.push(tf_a * idf);
            vector_b.push(tf_b * idf);
        }

        l2_normalize(&mut vector_a);
        l2_normalize(&mut vector_b);

        Ok((vector_a, vector_b))
    }

    /// Lower-cased unigrams and bigrams with stop words removed. Bigrams are
    /// built from the filtered token sequence.
    fn ngrams(&self, doc: &str) -> Vec<String> {
        let tokens: Vec<String> = doc
            .unicode_words()
            .map(|word| word.to_lowercase())
            .filter(|word| word.chars().count() > 1 && !self.stop_words.contains(word))
            .collect();

        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }

    /// Sorted vocabulary, truncated to the `max_features` most frequent
    /// terms when the full vocabulary is larger.
    fn build_vocabulary(&self, corpus_frequency: &HashMap<String, usize>) -> Vec<String> {
        if corpus_frequency.len() <= self.max_features {
            let mut vocabulary: Vec<String> = corpus_frequency.keys().cloned().collect();
            vocabulary.sort();
            return vocabulary;
        }

        let mut ranked: Vec<(&String, &usize)> = corpus_frequency.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let mut vocabulary: Vec<String> = ranked
            .into_iter()
            .take(self.max_features)
            .map(|(term, _)| term.clone())
            .collect();
        vocabulary.sort();
        vocabulary
    }

    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any",
            "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
            "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
            "each", "few", "for", "from", "further", "go", "had", "has", "have", "having", "he",
            "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
            "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off",
            "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same",
            "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
            "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
            "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
            "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
            "yours",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

fn term_counts(terms: &[String]) -> HashMap<&String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(vector: &mut [f64]) {
    let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// Cosine similarity between two equal-length vectors.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ResumeScreenerError::Processing(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_one() {
        let vectorizer = TfidfVectorizer::default();
        let score = vectorizer
            .similarity("python react sql", "python react sql")
            .unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let vectorizer = TfidfVectorizer::default();
        let score = vectorizer
            .similarity("python django flask", "photoshop illustrator figma")
            .unwrap();
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_scores_between_bounds() {
        let vectorizer = TfidfVectorizer::default();
        let score = vectorizer
            .similarity("python react sql", "python terraform ansible")
            .unwrap();
        assert!(score > 0.0);
        assert!(score < 1.0);
    }

    #[test]
    fn test_degenerate_vocabulary_is_an_error() {
        let vectorizer = TfidfVectorizer::default();
        let result = vectorizer.similarity("the and of", "to in a");
        assert!(result.is_err());
    }

    #[test]
    fn test_bigrams_contribute_to_similarity() {
        let vectorizer = TfidfVectorizer::default();
        let score = vectorizer
            .similarity("time management leadership", "time management teamwork")
            .unwrap();
        assert!(score > 0.0);
    }

    #[test]
    fn test_vocabulary_cap_still_scores() {
        let vectorizer = TfidfVectorizer::new(3);
        let score = vectorizer
            .similarity("python react sql docker", "python react terraform jenkins")
            .unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
        let identical = cosine_similarity(&[0.5, 0.5], &[0.5, 0.5]).unwrap();
        assert!((identical - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_dimension_mismatch() {
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }
}
