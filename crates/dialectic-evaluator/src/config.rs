//! Evaluator configuration

use serde::{Deserialize, Serialize};

/// Weight of the logical score in the overall score (default: 0.4)
pub const LOGICAL_WEIGHT: f64 = 0.4;

/// Weight of the evidence score in the overall score (default: 0.3)
pub const EVIDENCE_WEIGHT: f64 = 0.3;

/// Weight of the support score in the overall score (default: 0.3)
pub const SUPPORT_WEIGHT: f64 = 0.3;

/// Overall weights and strength/weakness thresholds
///
/// Strength thresholds are exclusive lower bounds ("above"), weakness
/// thresholds exclusive upper bounds ("below").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Weight of the logical score
    pub logical_weight: f64,
    /// Weight of the evidence score
    pub evidence_weight: f64,
    /// Weight of the support score
    pub support_weight: f64,

    /// Logical score above this is a strength
    pub strong_logic_threshold: f64,
    /// Evidence score above this is a strength
    pub strong_evidence_threshold: f64,
    /// Support score above this is a strength
    pub strong_support_threshold: f64,
    /// Confidence above this is a strength
    pub high_confidence_threshold: f64,
    /// This many premises or more is a strength
    pub comprehensive_premise_count: usize,

    /// Logical score below this is a weakness
    pub weak_logic_threshold: f64,
    /// Evidence score below this is a weakness
    pub weak_evidence_threshold: f64,
    /// Support score below this is a weakness
    pub weak_support_threshold: f64,
    /// Confidence below this is a weakness
    pub low_confidence_threshold: f64,
    /// Fewer premises than this is a weakness
    pub min_premise_count: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            logical_weight: LOGICAL_WEIGHT,
            evidence_weight: EVIDENCE_WEIGHT,
            support_weight: SUPPORT_WEIGHT,
            strong_logic_threshold: 0.7,
            strong_evidence_threshold: 0.6,
            strong_support_threshold: 0.5,
            high_confidence_threshold: 0.8,
            comprehensive_premise_count: 3,
            weak_logic_threshold: 0.4,
            weak_evidence_threshold: 0.3,
            weak_support_threshold: 0.2,
            low_confidence_threshold: 0.4,
            min_premise_count: 2,
        }
    }
}

impl EvaluatorConfig {
    /// Check that every weight and threshold lies in [0, 1]
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("logical_weight", self.logical_weight),
            ("evidence_weight", self.evidence_weight),
            ("support_weight", self.support_weight),
            ("strong_logic_threshold", self.strong_logic_threshold),
            ("strong_evidence_threshold", self.strong_evidence_threshold),
            ("strong_support_threshold", self.strong_support_threshold),
            ("high_confidence_threshold", self.high_confidence_threshold),
            ("weak_logic_threshold", self.weak_logic_threshold),
            ("weak_evidence_threshold", self.weak_evidence_threshold),
            ("weak_support_threshold", self.weak_support_threshold),
            ("low_confidence_threshold", self.low_confidence_threshold),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0, 1], got {}", name, value));
            }
        }

        let total = self.logical_weight + self.evidence_weight + self.support_weight;
        if total > 1.0 + 1e-9 {
            return Err(format!("score weights sum to {}, must not exceed 1", total));
        }
        Ok(())
    }
}
