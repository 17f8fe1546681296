use crate::error::{GstinError, ProviderError};
use crate::gstin::Gstin;
use crate::match_validation::match_status::VerificationStatus;
use crate::match_validation::response::ProviderPayload;
use serde::{Deserialize, Serialize};

/// Status and code reported when no provider key is configured.
pub const MISSING_API_KEY: &str = "MISSING_API_KEY";
pub const PROVIDER_UNAVAILABLE: &str = "PROVIDER_UNAVAILABLE";
pub const INACTIVE_REGISTRATION: &str = "INACTIVE_REGISTRATION";
pub const NOT_VERIFIED: &str = "NOT_VERIFIED";

/// What the request-handling layer gets back from a verification.
///
/// Serializes with camelCase keys and leaves out absent fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    /// Provider wording, or [MISSING_API_KEY].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip)]
    pub verification_status: VerificationStatus,
}

impl VerificationResult {
    pub fn malformed(err: &GstinError) -> Self {
        VerificationResult {
            message: Some(err.to_string()),
            code: Some(err.code().to_string()),
            verification_status: VerificationStatus::Malformed,
            ..Default::default()
        }
    }

    pub fn not_configured() -> Self {
        VerificationResult {
            status: Some(MISSING_API_KEY.to_string()),
            message: Some("GSTIN verification service is not configured".to_string()),
            code: Some(MISSING_API_KEY.to_string()),
            verification_status: VerificationStatus::NotConfigured,
            ..Default::default()
        }
    }

    pub fn provider_unavailable(err: &ProviderError) -> Self {
        let message = err.to_string();
        VerificationResult {
            message: Some(message.clone()),
            code: Some(PROVIDER_UNAVAILABLE.to_string()),
            verification_status: VerificationStatus::ProviderError(message),
            ..Default::default()
        }
    }

    /// The provider answered but refused the GSTIN itself ("not found" and
    /// the like). A verdict, not an outage.
    pub fn provider_rejected(gstin: &Gstin, message: String) -> Self {
        VerificationResult {
            state_code: Some(gstin.state_code().to_string()),
            message: Some(message),
            code: Some(NOT_VERIFIED.to_string()),
            verification_status: VerificationStatus::Invalid,
            ..Default::default()
        }
    }

    /// Result for a provider answer about an already validated `gstin`.
    pub fn from_payload(gstin: &Gstin, payload: &ProviderPayload) -> Self {
        let verification_status = payload.verification_status();
        let status = payload.status();
        let (message, code) = match &verification_status {
            VerificationStatus::Active => ("GSTIN is active".to_string(), None),
            VerificationStatus::Inactive => (
                format!(
                    "GSTIN registration is {}",
                    status.as_deref().unwrap_or("inactive")
                ),
                Some(INACTIVE_REGISTRATION.to_string()),
            ),
            _ => (
                payload
                    .message()
                    .unwrap_or_else(|| "GSTIN could not be verified as active".to_string()),
                Some(NOT_VERIFIED.to_string()),
            ),
        };
        VerificationResult {
            valid: verification_status.is_valid(),
            legal_name: payload.legal_name(),
            trade_name: payload.trade_name(),
            state_code: Some(
                payload
                    .state_code()
                    .unwrap_or_else(|| gstin.state_code().to_string()),
            ),
            status,
            message: Some(message),
            code,
            verification_status,
        }
    }
}
