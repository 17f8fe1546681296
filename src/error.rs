use thiserror::Error;

/// Why a candidate was rejected before any provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GstinError {
    #[error("GSTIN is empty")]
    Empty,

    #[error("GSTIN must be 15 characters long, got {length}")]
    InvalidLength { length: usize },

    #[error("GSTIN does not follow the state code / PAN / entity code / Z / check character layout")]
    InvalidFormat,

    #[error("GSTIN check character is '{found}', expected '{expected}'")]
    InvalidChecksum { expected: char, found: char },
}

impl GstinError {
    /// Machine readable code reported alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            GstinError::Empty => "EMPTY_INPUT",
            GstinError::InvalidLength { .. } => "INVALID_LENGTH",
            GstinError::InvalidFormat => "INVALID_FORMAT",
            GstinError::InvalidChecksum { .. } => "INVALID_CHECKSUM",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// A single failed provider attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Error making HTTP request: {0}")]
    Request(String),

    #[error("Unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    #[error("Unreadable provider response: {0}")]
    InvalidPayload(String),

    #[error("Provider reported an error: {0}")]
    Reported(String),

    #[error("No provider key parameter is configured")]
    NoKeyParam,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GstinError::Empty.code(), "EMPTY_INPUT");
        assert_eq!(
            GstinError::InvalidLength { length: 3 }.code(),
            "INVALID_LENGTH"
        );
        assert_eq!(GstinError::InvalidFormat.code(), "INVALID_FORMAT");
        assert_eq!(
            GstinError::InvalidChecksum {
                expected: 'V',
                found: 'W'
            }
            .code(),
            "INVALID_CHECKSUM"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GstinError::InvalidLength { length: 14 }.to_string(),
            "GSTIN must be 15 characters long, got 14"
        );
        assert_eq!(
            GstinError::InvalidChecksum {
                expected: 'V',
                found: 'W'
            }
            .to_string(),
            "GSTIN check character is 'W', expected 'V'"
        );
    }
}
