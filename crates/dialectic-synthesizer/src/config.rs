//! Synthesizer configuration

use dialectic_text::{MAX_THEME_LEN, MIN_THEME_LEN};
use serde::{Deserialize, Serialize};

/// Theme bounds, draft-confidence terms and quality weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesizerConfig {
    /// Themes must be strictly longer than this (characters)
    pub min_theme_len: usize,
    /// Themes must be strictly shorter than this (characters)
    pub max_theme_len: usize,

    /// Weight of the inputs' mean confidence
    pub base_confidence_weight: f64,
    /// Bonus per shared theme
    pub shared_theme_step: f64,
    /// Cap on the shared-theme bonus
    pub shared_theme_cap: f64,
    /// Bonus per complementary premise pair
    pub complementary_step: f64,
    /// Cap on the complementary bonus
    pub complementary_cap: f64,
    /// Penalty per irreconcilable conflict
    pub irreconcilable_step: f64,
    /// Cap on the irreconcilable penalty
    pub irreconcilable_cap: f64,

    /// Weight of coverage in the quality score
    pub coverage_weight: f64,
    /// Weight of coherence in the quality score
    pub coherence_weight: f64,
    /// Weight of advancement in the quality score
    pub advancement_weight: f64,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            min_theme_len: MIN_THEME_LEN,
            max_theme_len: MAX_THEME_LEN,
            base_confidence_weight: 0.4,
            shared_theme_step: 0.1,
            shared_theme_cap: 0.3,
            complementary_step: 0.05,
            complementary_cap: 0.2,
            irreconcilable_step: 0.1,
            irreconcilable_cap: 0.3,
            coverage_weight: 0.4,
            coherence_weight: 0.3,
            advancement_weight: 0.3,
        }
    }
}

impl SynthesizerConfig {
    /// Check bounds ordering and that every weight lies in [0, 1]
    pub fn validate(&self) -> Result<(), String> {
        if self.min_theme_len >= self.max_theme_len {
            return Err(format!(
                "min_theme_len ({}) must be below max_theme_len ({})",
                self.min_theme_len, self.max_theme_len
            ));
        }
        let fields = [
            ("base_confidence_weight", self.base_confidence_weight),
            ("shared_theme_step", self.shared_theme_step),
            ("shared_theme_cap", self.shared_theme_cap),
            ("complementary_step", self.complementary_step),
            ("complementary_cap", self.complementary_cap),
            ("irreconcilable_step", self.irreconcilable_step),
            ("irreconcilable_cap", self.irreconcilable_cap),
            ("coverage_weight", self.coverage_weight),
            ("coherence_weight", self.coherence_weight),
            ("advancement_weight", self.advancement_weight),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }
        Ok(())
    }
}
