/// Outcome of a verification, as computed by this crate.
///
/// The provider's own wording stays in [crate::VerificationResult::status];
/// this is the interpretation of it.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum VerificationStatus {
    #[default]
    NotChecked,
    /// Rejected locally by the format or checksum gate, no call was made.
    Malformed,
    /// No provider key is configured, no call was made.
    NotConfigured,
    /// Every provider attempt failed; holds the last error.
    ProviderError(String),
    /// The provider answered but the registration is not active.
    Invalid,
    /// Cancelled, suspended as inactive or surrendered.
    Inactive,
    Active,
}

impl VerificationStatus {
    pub fn is_valid(&self) -> bool {
        *self == VerificationStatus::Active
    }

    /// Whether the provider actually answered.
    pub fn is_provider_verdict(&self) -> bool {
        matches!(
            self,
            VerificationStatus::Active | VerificationStatus::Inactive | VerificationStatus::Invalid
        )
    }
}
