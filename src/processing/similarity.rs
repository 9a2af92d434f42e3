//! TF-IDF document similarity between a job text and a batch of resumes

use crate::error::{MatcherError, Result};
use log::{debug, warn};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Sparse term-weight vector keyed by vocabulary index
pub type SparseVector = HashMap<usize, f64>;

pub struct DocumentSimilarity {
    stop_words: HashSet<String>,
    token_regex: Regex,
}

impl DocumentSimilarity {
    pub fn new(stop_words: HashSet<String>) -> Result<Self> {
        let token_regex = Regex::new(r"\b\w\w+\b")?;
        Ok(Self {
            stop_words,
            token_regex,
        })
    }

    /// Cosine similarity between `job_text` and every resume, in input order.
    ///
    /// The vector space is fitted over the whole batch (job first), so every
    /// resume must be present before any score exists. An empty vocabulary
    /// yields zero for every resume.
    pub fn similarities(&self, job_text: &str, resume_texts: &[String]) -> Result<Vec<f64>> {
        let mut corpus: Vec<Vec<String>> = Vec::with_capacity(resume_texts.len() + 1);
        corpus.push(self.terms(job_text));
        corpus.extend(resume_texts.iter().map(|text| self.terms(text)));

        let vocabulary = Self::build_vocabulary(&corpus);
        if vocabulary.is_empty() {
            warn!("Similarity corpus has an empty vocabulary; semantic scores default to 0");
            return Ok(vec![0.0; resume_texts.len()]);
        }
        debug!(
            "Fitted TF-IDF space: {} documents, {} terms",
            corpus.len(),
            vocabulary.len()
        );

        let idf = Self::inverse_document_frequency(&corpus, &vocabulary);
        let vectors: Vec<SparseVector> = corpus
            .iter()
            .map(|terms| Self::tfidf_vector(terms, &vocabulary, &idf))
            .collect();

        let (job_vector, resume_vectors) = vectors
            .split_first()
            .ok_or_else(|| MatcherError::Vectorization("Empty corpus".to_string()))?;

        resume_vectors
            .iter()
            .map(|resume_vector| {
                let similarity = cosine_similarity(job_vector, resume_vector);
                if similarity.is_finite() {
                    Ok(similarity.clamp(0.0, 1.0))
                } else {
                    Err(MatcherError::Vectorization(format!(
                        "Non-finite similarity value: {}",
                        similarity
                    )))
                }
            })
            .collect()
    }

    /// Lowercased terms of at least two word characters, minus stop words
    fn terms(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(|term| term.to_string())
            .collect()
    }

    fn build_vocabulary(corpus: &[Vec<String>]) -> BTreeMap<String, usize> {
        let terms: BTreeSet<&String> = corpus.iter().flatten().collect();
        terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect()
    }

    /// Smoothed IDF: ln((1 + n) / (1 + df)) + 1
    fn inverse_document_frequency(corpus: &[Vec<String>], vocabulary: &BTreeMap<String, usize>) -> Vec<f64> {
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for terms in corpus {
            let unique: HashSet<&String> = terms.iter().collect();
            for term in unique {
                if let Some(&idx) = vocabulary.get(term) {
                    document_frequency[idx] += 1;
                }
            }
        }

        let n = corpus.len() as f64;
        document_frequency
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect()
    }

    /// Raw term counts weighted by IDF, L2-normalised
    fn tfidf_vector(terms: &[String], vocabulary: &BTreeMap<String, usize>, idf: &[f64]) -> SparseVector {
        let mut vector = SparseVector::new();
        for term in terms {
            if let Some(&idx) = vocabulary.get(term) {
                *vector.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        for (idx, weight) in vector.iter_mut() {
            *weight *= idf[*idx];
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }

        vector
    }
}

/// Cosine similarity of two sparse vectors; 0 when either is all zeros
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f64 = small
        .iter()
        .filter_map(|(idx, x)| large.get(idx).map(|y| x * y))
        .sum();
    let norm_a = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.values().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
