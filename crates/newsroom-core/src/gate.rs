//! Publishing gate.
//!
//! A draft may be published only when both its SEO score and its content
//! score reach their thresholds. The SEO score is supplied by the caller;
//! this crate never computes it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum SEO score required to publish.
pub const DEFAULT_MIN_SEO_SCORE: i32 = 60;

/// Minimum content score required to publish.
pub const DEFAULT_MIN_CONTENT_SCORE: i32 = 60;

/// Returns `true` if a draft with these scores may be published under the
/// default thresholds.
pub const fn can_publish(seo_score: i32, content_score: i32) -> bool {
    seo_score >= DEFAULT_MIN_SEO_SCORE && content_score >= DEFAULT_MIN_CONTENT_SCORE
}

/// Gate thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PublishingGate {
    /// Minimum SEO score (inclusive).
    pub min_seo_score: i32,
    /// Minimum content score (inclusive).
    pub min_content_score: i32,
}

impl Default for PublishingGate {
    fn default() -> Self {
        Self {
            min_seo_score: DEFAULT_MIN_SEO_SCORE,
            min_content_score: DEFAULT_MIN_CONTENT_SCORE,
        }
    }
}

/// Outcome of running a draft through the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PublishingDecision {
    /// Whether the draft may move to `published`.
    pub can_publish: bool,
    /// SEO score that was evaluated.
    pub seo_score: i32,
    /// Content score that was evaluated.
    pub content_score: i32,
    /// SEO threshold that was applied.
    pub min_seo_score: i32,
    /// Content threshold that was applied.
    pub min_content_score: i32,
    /// One message per unmet threshold. Empty when publishing is allowed.
    pub blockers: Vec<String>,
}

impl PublishingGate {
    /// Create a gate, falling back to the default for any unset threshold.
    pub fn new(min_seo_score: Option<i32>, min_content_score: Option<i32>) -> Self {
        Self {
            min_seo_score: min_seo_score.unwrap_or(DEFAULT_MIN_SEO_SCORE),
            min_content_score: min_content_score.unwrap_or(DEFAULT_MIN_CONTENT_SCORE),
        }
    }

    /// Returns `true` if both scores meet their thresholds.
    pub const fn allows(&self, seo_score: i32, content_score: i32) -> bool {
        seo_score >= self.min_seo_score && content_score >= self.min_content_score
    }

    /// Evaluate both scores and explain any refusal.
    #[tracing::instrument(skip(self), fields(min_seo = self.min_seo_score, min_content = self.min_content_score))]
    pub fn evaluate(&self, seo_score: i32, content_score: i32) -> PublishingDecision {
        let mut blockers = Vec::new();
        if seo_score < self.min_seo_score {
            blockers.push(format!(
                "SEO score {seo_score} is below minimum {}",
                self.min_seo_score
            ));
        }
        if content_score < self.min_content_score {
            blockers.push(format!(
                "content score {content_score} is below minimum {}",
                self.min_content_score
            ));
        }

        let can_publish = self.allows(seo_score, content_score);
        tracing::debug!(can_publish, blockers = blockers.len(), "gate evaluated");

        PublishingDecision {
            can_publish,
            seo_score,
            content_score,
            min_seo_score: self.min_seo_score,
            min_content_score: self.min_content_score,
            blockers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds() {
        assert!(!can_publish(59, 100));
        assert!(can_publish(60, 60));
        assert!(!can_publish(100, 59));
        assert!(!can_publish(0, 0));
        assert!(can_publish(100, 100));
    }

    #[test]
    fn default_gate_matches_free_function() {
        let gate = PublishingGate::default();
        for (seo, content) in [(59, 100), (60, 60), (100, 59), (-1, 200)] {
            assert_eq!(gate.allows(seo, content), can_publish(seo, content));
        }
    }

    #[test]
    fn new_falls_back_to_defaults() {
        assert_eq!(PublishingGate::new(None, None), PublishingGate::default());
        let gate = PublishingGate::new(Some(80), None);
        assert_eq!(gate.min_seo_score, 80);
        assert_eq!(gate.min_content_score, DEFAULT_MIN_CONTENT_SCORE);
    }

    #[test]
    fn custom_thresholds_apply() {
        let gate = PublishingGate::new(Some(80), Some(40));
        assert!(!gate.allows(70, 90));
        assert!(gate.allows(80, 40));
    }

    #[test]
    fn decision_lists_each_blocker() {
        let decision = PublishingGate::default().evaluate(40, 50);
        assert!(!decision.can_publish);
        assert_eq!(decision.blockers.len(), 2);
        assert!(decision.blockers[0].contains("SEO score 40"));
        assert!(decision.blockers[1].contains("content score 50"));
    }

    #[test]
    fn passing_decision_has_no_blockers() {
        let decision = PublishingGate::default().evaluate(75, 80);
        assert!(decision.can_publish);
        assert!(decision.blockers.is_empty());
        assert_eq!(decision.min_seo_score, 60);
    }
}
