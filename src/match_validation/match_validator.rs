use crate::match_validation::verification_result::VerificationResult;
use async_trait::async_trait;

#[async_trait]
pub trait GstinVerifier: Send + Sync {
    // Both methods take the raw, untrusted input and never fail: every path
    // ends in a VerificationResult.
    fn blocking_verify(&self, raw: &str) -> VerificationResult;

    async fn verify(&self, raw: &str) -> VerificationResult;
}
