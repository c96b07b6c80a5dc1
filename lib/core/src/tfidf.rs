// TF-IDF text vectorizer over product descriptions
use crate::{Error, Result, SparseVector, StopWordsFilter};
use ahash::AHashMap;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Lowercasing tokenizer that splits on non-alphanumeric characters
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWordsFilter,
    min_token_len: usize,
}

impl Tokenizer {
    pub fn new(stop_words: StopWordsFilter, min_token_len: usize) -> Self {
        Self {
            stop_words,
            min_token_len: min_token_len.max(1),
        }
    }

    /// Tokenize text, dropping stop words and tokens shorter than `min_token_len` chars
    #[inline]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty() && s.chars().count() >= self.min_token_len)
            .filter(|s| !self.stop_words.is_stop_word(s))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWordsFilter::english(), 2)
    }
}

/// Term-frequency × inverse-document-frequency vectorizer
///
/// ```text
/// idf(t)   = ln((1 + N) / (1 + df(t))) + 1
/// w(t, d)  = tf(t, d) × idf(t)
/// ```
///
/// Each document vector is then scaled to unit length. Vocabulary columns
/// are assigned in lexicographic term order so the mapping is stable across
/// runs.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: AHashMap<String, u32>,
    terms: Vec<String>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    #[must_use]
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
        }
    }

    /// Learn the vocabulary and IDF weights, returning one unit vector per document.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<SparseVector>> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let term_counts: Vec<AHashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut counts: AHashMap<String, u32> = AHashMap::new();
                for token in self.tokenizer.tokenize(doc.as_ref()) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut doc_freq: BTreeMap<&str, u32> = BTreeMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.terms = doc_freq.keys().map(|t| t.to_string()).collect();
        self.idf = doc_freq
            .values()
            .map(|&df| (((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0) as f32)
            .collect();
        self.vocabulary = self
            .terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col as u32))
            .collect();

        if self.terms.is_empty() {
            warn!("Vocabulary is empty: every description is stop words or punctuation");
        }
        debug!("Fitted vocabulary of {} terms over {} documents", self.terms.len(), documents.len());

        let vectors: Vec<SparseVector> = term_counts.iter().map(|c| self.weigh(c)).collect();

        let zero = vectors.iter().filter(|v| v.is_zero()).count();
        if zero > 0 {
            warn!("{} descriptions produced zero vectors and will match nothing", zero);
        }

        Ok(vectors)
    }

    fn weigh(&self, counts: &AHashMap<String, u32>) -> SparseVector {
        let pairs = counts
            .iter()
            .filter_map(|(term, &tf)| {
                self.vocabulary
                    .get(term)
                    .map(|&col| (col, tf as f32 * self.idf[col as usize]))
            })
            .collect();
        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        vector
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Terms in column order
    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn column(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.column(term).map(|col| self.idf[col as usize])
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}
