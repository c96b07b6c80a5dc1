//! Engine configuration
//!
//! Controls tokenization and query defaults. Serializable so a deployment
//! can keep it in a JSON file next to the dataset.

use prodsim_core::{Error, Result, StopWords, StopWordsFilter, TfidfVectorizer, Tokenizer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Neighbours returned when the caller does not ask for a count
    pub default_top_n: usize,
    /// Shortest token (in chars) kept in the vocabulary
    pub min_token_len: usize,
    pub stop_words: StopWords,
    /// Decimal places kept in result scores
    pub score_precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            min_token_len: 2,
            stop_words: StopWords::English,
            score_precision: 3,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_top_n == 0 {
            return Err(Error::InvalidConfig("default_top_n must be positive".to_string()));
        }
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig("min_token_len must be positive".to_string()));
        }
        if self.score_precision > 6 {
            return Err(Error::InvalidConfig(
                "score_precision must be at most 6".to_string(),
            ));
        }
        Ok(())
    }

    pub fn vectorizer(&self) -> TfidfVectorizer {
        TfidfVectorizer::new(Tokenizer::new(
            StopWordsFilter::from_config(&self.stop_words),
            self.min_token_len,
        ))
    }

    /// Round `score` to `score_precision` decimal places
    #[inline]
    pub fn round_score(&self, score: f32) -> f32 {
        let scale = 10f64.powi(self.score_precision as i32);
        ((score as f64 * scale).round() / scale) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_top_n() {
        let config = EngineConfig {
            default_top_n: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_round_score() {
        let config = EngineConfig::default();
        assert_eq!(config.round_score(0.123456), 0.123);
        assert_eq!(config.round_score(0.9996), 1.0);
    }

    #[test]
    fn test_partial_json() {
        let config: EngineConfig = serde_json::from_str(r#"{"default_top_n": 8}"#).unwrap();
        assert_eq!(config.default_top_n, 8);
        assert_eq!(config.min_token_len, 2);
        assert_eq!(config.stop_words, StopWords::English);

        let config: EngineConfig = serde_json::from_str(r#"{"stop_words": "none"}"#).unwrap();
        assert_eq!(config.stop_words, StopWords::None);
    }
}
