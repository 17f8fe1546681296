use crate::match_validation::match_status::VerificationStatus;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};
use strum::IntoStaticStr;

const OUTCOME: &str = "outcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Rejected,
    NotConfigured,
    Active,
    Inactive,
    Invalid,
    ProviderError,
}

impl From<&VerificationStatus> for Outcome {
    fn from(status: &VerificationStatus) -> Self {
        match status {
            VerificationStatus::NotChecked | VerificationStatus::Malformed => Outcome::Rejected,
            VerificationStatus::NotConfigured => Outcome::NotConfigured,
            VerificationStatus::ProviderError(_) => Outcome::ProviderError,
            VerificationStatus::Invalid => Outcome::Invalid,
            VerificationStatus::Inactive => Outcome::Inactive,
            VerificationStatus::Active => Outcome::Active,
        }
    }
}

pub struct VerificationMetrics {
    labels: Labels,
    pub attempts: Counter,
    pub attempt_failures: Counter,
}

impl VerificationMetrics {
    pub fn new(labels: &Labels) -> Self {
        VerificationMetrics {
            labels: labels.clone(),
            attempts: counter!("gstin.verification.attempts", labels.clone()),
            attempt_failures: counter!("gstin.verification.attempt_failures", labels.clone()),
        }
    }

    pub fn record_outcome(&self, status: &VerificationStatus) {
        let outcome: &'static str = Outcome::from(status).into();
        counter!(
            "gstin.verification.requests",
            self.labels.clone_with_labels(&[(OUTCOME, outcome)])
        )
        .increment(1);
    }
}

impl Default for VerificationMetrics {
    fn default() -> Self {
        VerificationMetrics::new(&NO_LABEL)
    }
}
