// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod error;
mod gstin;
mod match_validation;
mod normalization;
mod observability;
mod secondary_validation;
mod state_codes;

// This is the public API of the GSTIN verification library
pub use error::{ConfigError, GstinError, ProviderError};
pub use gstin::Gstin;
pub use match_validation::config::{
    ProviderConfig, API_KEY_ENV, DEFAULT_PROVIDER_ENDPOINT, ENDPOINT_ENV, MAX_PROVIDER_ATTEMPTS,
    TIMEOUT_ENV,
};
pub use match_validation::http_validator::HttpGstinVerifier;
pub use match_validation::match_status::VerificationStatus;
pub use match_validation::match_validator::GstinVerifier;
pub use match_validation::response::{infer_verification_status, ProviderPayload};
pub use match_validation::verification_result::{
    VerificationResult, INACTIVE_REGISTRATION, MISSING_API_KEY, NOT_VERIFIED,
    PROVIDER_UNAVAILABLE,
};
pub use normalization::normalize;
pub use observability::labels::Labels;
pub use secondary_validation::{
    compute_check_char, is_likely_valid, FormatGrammar, GstinChecksum, GstinComposite,
    GstinFormat, Validator, GSTIN_LENGTH,
};
pub use state_codes::state_name;
