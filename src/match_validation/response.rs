use crate::error::ProviderError;
use crate::match_validation::match_status::VerificationStatus;
use serde_json::{Map, Value};

// Objects some providers wrap the taxpayer record in, searched after the root.
const NESTED_OBJECT_KEYS: &[&str] = &["taxpayerInfo", "data", "result"];

const LEGAL_NAME_KEYS: &[&str] = &["lgnm", "legalName", "legal_name", "legalNameOfBusiness"];
const TRADE_NAME_KEYS: &[&str] = &["tradeNam", "tradeName", "trade_name"];
const STATUS_KEYS: &[&str] = &["sts", "status", "gstinStatus", "gstin_status"];
const STATE_CODE_KEYS: &[&str] = &["stateCode", "state_code", "stcd"];
const MESSAGE_KEYS: &[&str] = &["message", "msg"];
const POSITIVE_FLAG_KEYS: &[&str] = &["valid", "isValid", "is_valid", "active", "isActive"];

const ERROR_FLAG_KEY: &str = "error";

// Checked in this order, before anything positive.
const NEGATIVE_STATUS_MARKERS: &[&str] = &["cancel", "inactive", "surrender"];
const POSITIVE_STATUS_MARKER: &str = "active";

/// Loosely typed provider answer. Every field is looked up through a list
/// of candidate keys, first at the root and then in the known wrapper
/// objects; the first non-empty hit wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderPayload {
    root: Map<String, Value>,
}

impl ProviderPayload {
    pub fn parse(body: &str) -> Result<Self, ProviderError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ProviderError::InvalidPayload(e.to_string()))?;
        Self::from_value(value)
    }

    /// Fails on anything but a JSON object, and on payloads flagged with
    /// `"error": true`.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        let Value::Object(root) = value else {
            return Err(ProviderError::InvalidPayload(
                "expected a JSON object".to_string(),
            ));
        };
        let payload = ProviderPayload { root };
        if payload.root.get(ERROR_FLAG_KEY).is_some_and(is_truthy) {
            let message = payload
                .message()
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ProviderError::Reported(message));
        }
        Ok(payload)
    }

    fn scopes(&self) -> impl Iterator<Item = &Map<String, Value>> {
        std::iter::once(&self.root).chain(
            NESTED_OBJECT_KEYS
                .iter()
                .filter_map(|key| self.root.get(*key).and_then(Value::as_object)),
        )
    }

    fn first_string(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            self.scopes()
                .find_map(|scope| scope.get(*key).and_then(as_non_empty_string))
        })
    }

    pub fn legal_name(&self) -> Option<String> {
        self.first_string(LEGAL_NAME_KEYS)
    }

    pub fn trade_name(&self) -> Option<String> {
        self.first_string(TRADE_NAME_KEYS)
    }

    pub fn status(&self) -> Option<String> {
        self.first_string(STATUS_KEYS)
    }

    pub fn state_code(&self) -> Option<String> {
        self.first_string(STATE_CODE_KEYS)
    }

    pub fn message(&self) -> Option<String> {
        self.first_string(MESSAGE_KEYS)
    }

    /// Any of the provider specific "this one is fine" flags.
    pub fn has_positive_flag(&self) -> bool {
        self.scopes().any(|scope| {
            POSITIVE_FLAG_KEYS
                .iter()
                .any(|key| scope.get(*key).is_some_and(is_truthy))
        })
    }

    pub fn verification_status(&self) -> VerificationStatus {
        infer_verification_status(
            self.status().as_deref(),
            self.has_positive_flag(),
            self.legal_name().is_some() || self.trade_name().is_some(),
        )
    }
}

fn as_non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "active"
        ),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Reads a verdict out of the provider status text.
///
/// Negative wording always wins, so "Inactive" is never read as "active".
/// Flags and names only matter when there is no status text at all.
pub fn infer_verification_status(
    status: Option<&str>,
    has_positive_flag: bool,
    has_name: bool,
) -> VerificationStatus {
    match status.map(str::to_lowercase) {
        Some(status)
            if NEGATIVE_STATUS_MARKERS
                .iter()
                .any(|marker| status.contains(*marker)) =>
        {
            VerificationStatus::Inactive
        }
        Some(status) if status.contains(POSITIVE_STATUS_MARKER) => VerificationStatus::Active,
        Some(_) => VerificationStatus::Invalid,
        None if has_positive_flag || has_name => VerificationStatus::Active,
        None => VerificationStatus::Invalid,
    }
}
