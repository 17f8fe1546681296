use super::{
    config::ProviderConfig,
    match_validator::GstinVerifier,
    metrics::VerificationMetrics,
    response::ProviderPayload,
    verification_result::VerificationResult,
};
use crate::error::{ConfigError, ProviderError};
use crate::gstin::Gstin;
use crate::observability::labels::{Labels, NO_LABEL};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::error::Error;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Verifies GSTINs against the configured third-party provider.
///
/// Input is normalized and run through the local format/checksum gate
/// first; nothing goes on the wire for malformed input or when no key is
/// configured. Otherwise each configured key parameter spelling is tried in
/// turn and the first usable answer wins.
///
/// `blocking_verify` must not be called from within an async runtime.
pub struct HttpGstinVerifier {
    config: ProviderConfig,
    client: reqwest::Client,
    // Created on first use, building it inside an async runtime panics
    blocking_client: OnceLock<reqwest::blocking::Client>,
    metrics: VerificationMetrics,
}

impl HttpGstinVerifier {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_labels(config, &NO_LABEL)
    }

    pub fn with_labels(config: ProviderConfig, labels: &Labels) -> Self {
        HttpGstinVerifier {
            config,
            client: reqwest::Client::new(),
            blocking_client: OnceLock::new(),
            metrics: VerificationMetrics::new(labels),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ProviderConfig::from_env()?))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    // Err holds the final result when there is nothing to ask the provider.
    fn prepare(&self, raw: &str) -> Result<(Gstin, &str), VerificationResult> {
        let gstin = Gstin::parse_with(raw, self.config.grammar).map_err(|err| {
            debug!(code = err.code(), "GSTIN rejected before verification: {err}");
            VerificationResult::malformed(&err)
        })?;
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            warn!("GSTIN provider key is not configured, skipping verification");
            VerificationResult::not_configured()
        })?;
        Ok((gstin, api_key))
    }

    fn request_url(
        &self,
        gstin: &Gstin,
        api_key: &str,
        key_param: &str,
    ) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &self.config.endpoint,
            &[
                (self.config.gstin_param.as_str(), gstin.as_str()),
                (key_param, api_key),
            ],
        )
        .map_err(|e| ProviderError::Request(format!("invalid provider endpoint: {e}")))
    }

    // The blocking client defaults to a 30s timeout, so it is built with the
    // configured one (or none at all).
    fn blocking_client(&self) -> Result<&reqwest::blocking::Client, ProviderError> {
        if let Some(client) = self.blocking_client.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(request_error)?;
        Ok(self.blocking_client.get_or_init(|| client))
    }

    fn blocking_attempt(&self, url: Url) -> Result<ProviderPayload, ProviderError> {
        let response = self
            .blocking_client()?
            .get(url)
            .send()
            .map_err(request_error)?;
        check_status(response.status())?;
        let body = response.text().map_err(request_error)?;
        ProviderPayload::parse(&body)
    }

    async fn attempt(&self, url: Url) -> Result<ProviderPayload, ProviderError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await.map_err(request_error)?;
        check_status(response.status())?;
        let body = response.text().await.map_err(request_error)?;
        ProviderPayload::parse(&body)
    }

    fn attempt_failed(&self, key_param: &str, err: &ProviderError) {
        self.metrics.attempt_failures.increment(1);
        warn!(key_param, "GSTIN provider attempt failed: {err}");
    }

    // A provider-reported error on the final attempt is the provider's
    // answer about this GSTIN; earlier ones usually mean a wrong key spelling.
    fn exhausted(&self, gstin: &Gstin, last_error: ProviderError) -> VerificationResult {
        let result = match last_error {
            ProviderError::Reported(message) => {
                VerificationResult::provider_rejected(gstin, message)
            }
            err => VerificationResult::provider_unavailable(&err),
        };
        self.finish(result)
    }

    fn finish(&self, result: VerificationResult) -> VerificationResult {
        self.metrics.record_outcome(&result.verification_status);
        result
    }
}

fn check_status(status: StatusCode) -> Result<(), ProviderError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ProviderError::UnexpectedStatus(status.as_u16()))
    }
}

// The request URL carries the provider key, so it is stripped from the message.
fn request_error(err: reqwest::Error) -> ProviderError {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    ProviderError::Request(message)
}

#[async_trait]
impl GstinVerifier for HttpGstinVerifier {
    fn blocking_verify(&self, raw: &str) -> VerificationResult {
        let (gstin, api_key) = match self.prepare(raw) {
            Ok(prepared) => prepared,
            Err(result) => return self.finish(result),
        };

        let mut last_error = ProviderError::NoKeyParam;
        for key_param in self.config.attempted_key_params() {
            self.metrics.attempts.increment(1);
            debug!(%gstin, key_param, "querying GSTIN provider");
            let outcome = self
                .request_url(&gstin, api_key, key_param)
                .and_then(|url| self.blocking_attempt(url));
            match outcome {
                Ok(payload) => {
                    return self.finish(VerificationResult::from_payload(&gstin, &payload))
                }
                Err(err) => {
                    self.attempt_failed(key_param, &err);
                    last_error = err;
                }
            }
        }
        self.exhausted(&gstin, last_error)
    }

    async fn verify(&self, raw: &str) -> VerificationResult {
        let (gstin, api_key) = match self.prepare(raw) {
            Ok(prepared) => prepared,
            Err(result) => return self.finish(result),
        };

        let mut last_error = ProviderError::NoKeyParam;
        for key_param in self.config.attempted_key_params() {
            self.metrics.attempts.increment(1);
            debug!(%gstin, key_param, "querying GSTIN provider");
            let outcome = match self.request_url(&gstin, api_key, key_param) {
                Ok(url) => self.attempt(url).await,
                Err(err) => Err(err),
            };
            match outcome {
                Ok(payload) => {
                    return self.finish(VerificationResult::from_payload(&gstin, &payload))
                }
                Err(err) => {
                    self.attempt_failed(key_param, &err);
                    last_error = err;
                }
            }
        }
        self.exhausted(&gstin, last_error)
    }
}
