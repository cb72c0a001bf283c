use serde::{Deserialize, Serialize};

use super::defaults;

/// Tunables for the selection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Hard ceiling on questions per request; requested counts are clamped.
    pub max_questions: usize,
    /// Over-fetch factor for the "unanswered" strategy's candidate scan.
    pub unanswered_buffer_multiplier: usize,
    /// Attempt budget multiplier for random-rank draws from the index.
    pub draw_attempt_multiplier: usize,
    /// Result cap for fallback indexed scans.
    pub scan_result_cap: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_questions: defaults::DEFAULT_MAX_QUESTIONS,
            unanswered_buffer_multiplier: defaults::DEFAULT_UNANSWERED_BUFFER_MULTIPLIER,
            draw_attempt_multiplier: defaults::DEFAULT_DRAW_ATTEMPT_MULTIPLIER,
            scan_result_cap: defaults::DEFAULT_SCAN_RESULT_CAP,
        }
    }
}

impl SelectionConfig {
    /// Parse from a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = SelectionConfig::default();
        assert_eq!(config.max_questions, 120);
        assert_eq!(config.unanswered_buffer_multiplier, 3);
        assert_eq!(config.draw_attempt_multiplier, 3);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = SelectionConfig::from_toml_str("max_questions = 50\n").unwrap();
        assert_eq!(config.max_questions, 50);
        assert_eq!(
            config.scan_result_cap,
            defaults::DEFAULT_SCAN_RESULT_CAP
        );
    }
}
