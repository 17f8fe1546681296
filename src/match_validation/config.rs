use crate::error::ConfigError;
use crate::secondary_validation::FormatGrammar;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};
use std::{env, fmt, time::Duration};
use tracing::{info, warn};

pub const DEFAULT_PROVIDER_ENDPOINT: &str = "https://appyflow.in/api/verifyGST";
pub const DEFAULT_GSTIN_PARAM: &str = "gstNo";
pub const DEFAULT_KEY_PARAM_NAMES: [&str; 2] = ["key_secret", "api_key"];

/// Only this many key parameter spellings are tried per verification.
pub const MAX_PROVIDER_ATTEMPTS: usize = 2;

pub const API_KEY_ENV: &str = "GSTIN_PROVIDER_API_KEY";
pub const ENDPOINT_ENV: &str = "GSTIN_PROVIDER_ENDPOINT";
pub const TIMEOUT_ENV: &str = "GSTIN_PROVIDER_TIMEOUT_SECS";

fn default_gstin_param() -> String {
    DEFAULT_GSTIN_PARAM.to_string()
}

fn default_key_param_names() -> Vec<String> {
    DEFAULT_KEY_PARAM_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Where and how the third-party GST lookup is called.
///
/// The provider is queried with
/// `GET {endpoint}?{gstin_param}={gstin}&{key_param}={api_key}`, once per
/// entry of `key_param_names` (at most [MAX_PROVIDER_ATTEMPTS]) until one of
/// them answers.
///
/// No timeout is applied unless one is configured; callers own their
/// deadline policy.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gstin_param")]
    pub gstin_param: String,
    #[serde(default = "default_key_param_names")]
    pub key_param_names: Vec<String>,
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub grammar: FormatGrammar,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            endpoint: DEFAULT_PROVIDER_ENDPOINT.to_string(),
            api_key: None,
            gstin_param: default_gstin_param(),
            key_param_names: default_key_param_names(),
            timeout: None,
            grammar: FormatGrammar::default(),
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("gstin_param", &self.gstin_param)
            .field("key_param_names", &self.key_param_names)
            .field("timeout", &self.timeout)
            .field("grammar", &self.grammar)
            .finish()
    }
}

impl ProviderConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [ProviderConfig::from_env] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ProviderConfig::default();

        match lookup(API_KEY_ENV) {
            Some(key) => config.set_api_key(key),
            None => warn!("{API_KEY_ENV} not set, GSTIN verification is not configured"),
        }

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                config.endpoint = endpoint.to_string();
            }
        } else {
            info!("{ENDPOINT_ENV} not set, using default: {DEFAULT_PROVIDER_ENDPOINT}");
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: TIMEOUT_ENV,
                    value: timeout.clone(),
                    reason: e.to_string(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// A blank key counts as no key at all.
    pub fn set_api_key(&mut self, api_key: String) {
        let api_key = api_key.trim();
        self.api_key = if api_key.is_empty() {
            None
        } else {
            Some(api_key.to_string())
        };
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.set_api_key(api_key.to_string());
        self
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_gstin_param(mut self, gstin_param: String) -> Self {
        self.gstin_param = gstin_param;
        self
    }

    pub fn with_key_param_names(mut self, key_param_names: Vec<String>) -> Self {
        self.key_param_names = key_param_names;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_grammar(mut self, grammar: FormatGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Key parameter spellings that will be tried, in order.
    pub fn attempted_key_params(&self) -> impl Iterator<Item = &str> {
        self.key_param_names
            .iter()
            .map(String::as_str)
            .take(MAX_PROVIDER_ATTEMPTS)
    }
}
