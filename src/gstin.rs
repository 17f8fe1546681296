use crate::error::GstinError;
use crate::normalization::normalize;
use crate::secondary_validation::{
    compute_check_char, FormatGrammar, GstinFormat, Validator, GSTIN_LENGTH,
};
use crate::state_codes::state_name;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A GSTIN that passed normalization, format and checksum validation.
///
/// The inner string is always the canonical form (uppercase, no whitespace)
/// and is only ASCII, so the positional accessors slice it directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gstin(String);

impl Gstin {
    /// Parses with the strict grammar.
    pub fn parse(raw: &str) -> Result<Self, GstinError> {
        Self::parse_with(raw, FormatGrammar::Strict)
    }

    pub fn parse_with(raw: &str, grammar: FormatGrammar) -> Result<Self, GstinError> {
        let canonical = normalize(raw);
        if canonical.is_empty() {
            return Err(GstinError::Empty);
        }
        let length = canonical.chars().count();
        if length != GSTIN_LENGTH {
            return Err(GstinError::InvalidLength { length });
        }
        if !GstinFormat::new(grammar).is_valid_match(&canonical) {
            return Err(GstinError::InvalidFormat);
        }
        let (prefix, check) = canonical.split_at(GSTIN_LENGTH - 1);
        let expected = compute_check_char(prefix).ok_or(GstinError::InvalidFormat)?;
        let found = check.chars().next().ok_or(GstinError::InvalidFormat)?;
        if expected != found {
            return Err(GstinError::InvalidChecksum { expected, found });
        }
        Ok(Gstin(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two digit state or union territory code.
    pub fn state_code(&self) -> &str {
        &self.0[0..2]
    }

    pub fn state_name(&self) -> Option<&'static str> {
        state_name(self.state_code())
    }

    /// The PAN of the registered entity.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    /// Registration number of the entity within its state.
    pub fn entity_code(&self) -> char {
        self.0.as_bytes()[12] as char
    }

    pub fn check_char(&self) -> char {
        self.0.as_bytes()[14] as char
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for Gstin {
    type Err = GstinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gstin::parse(s)
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Gstin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Gstin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Gstin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Gstin::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_parse_valid() {
        let gstin = Gstin::parse("27AAPFU0939F1ZV").unwrap();
        assert_eq!(gstin.as_str(), "27AAPFU0939F1ZV");
        assert_eq!(gstin.state_code(), "27");
        assert_eq!(gstin.state_name(), Some("Maharashtra"));
        assert_eq!(gstin.pan(), "AAPFU0939F");
        assert_eq!(gstin.entity_code(), '1');
        assert_eq!(gstin.check_char(), 'V');
        assert_eq!(gstin.to_string(), "27AAPFU0939F1ZV");
    }

    #[test]
    fn test_parse_normalizes() {
        let gstin: Gstin = " 27aapfu0939f1zv\n".parse().unwrap();
        assert_eq!(gstin.as_str(), "27AAPFU0939F1ZV");
        assert_eq!(gstin, Gstin::parse("27 AAPFU 0939 F1ZV").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Gstin::parse(""), Err(GstinError::Empty));
        assert_eq!(Gstin::parse("   "), Err(GstinError::Empty));
        assert_eq!(
            Gstin::parse("27AAPFU0939F1Z"),
            Err(GstinError::InvalidLength { length: 14 })
        );
        assert_eq!(
            Gstin::parse("27AAPFU0939F1ZVV"),
            Err(GstinError::InvalidLength { length: 16 })
        );
        assert_eq!(
            Gstin::parse("27AAPFU0939F1YV"),
            Err(GstinError::InvalidFormat)
        );
        assert_eq!(
            Gstin::parse("27AAPFU0939F1Z-"),
            Err(GstinError::InvalidFormat)
        );
        assert_eq!(
            Gstin::parse("  22aaaaa0000a1z5  "),
            Err(GstinError::InvalidChecksum {
                expected: 'C',
                found: '5'
            })
        );
    }

    #[test]
    fn test_multibyte_input_reports_character_length() {
        assert_eq!(
            Gstin::parse("27AAPFU0939F1Zé"),
            Err(GstinError::InvalidFormat)
        );
        assert_eq!(
            Gstin::parse("27AAPFU0939Fé"),
            Err(GstinError::InvalidLength { length: 13 })
        );
    }

    #[test]
    fn test_lenient_grammar() {
        // 'Y' in position 14 only passes the lenient grammar
        assert_eq!(
            Gstin::parse("27AAPFU0939F1YX"),
            Err(GstinError::InvalidFormat)
        );
        let gstin = Gstin::parse_with("27aapfu0939f1yx", FormatGrammar::Lenient).unwrap();
        assert_eq!(gstin.as_str(), "27AAPFU0939F1YX");
        assert_eq!(
            Gstin::parse_with("27AAPFU0939F1YW", FormatGrammar::Lenient),
            Err(GstinError::InvalidChecksum {
                expected: 'X',
                found: 'W'
            })
        );
    }

    #[test]
    fn test_unassigned_state_code_still_parses() {
        let gstin = Gstin::parse("00AAPFU0939F1ZB").unwrap();
        assert_eq!(gstin.state_code(), "00");
        assert_eq!(gstin.state_name(), None);
    }

    #[test]
    fn test_parse_agrees_with_composite_gate() {
        use crate::secondary_validation::GstinComposite;

        let candidates = vec![
            "27AAPFU0939F1ZV",
            " 27aapfu0939f1zv ",
            "22AAAAA0000A1Z5",
            "27AAPFU0939F1YX",
            "27AAPFU0939F1Z",
            "",
        ];
        for grammar in [FormatGrammar::Strict, FormatGrammar::Lenient] {
            for candidate in &candidates {
                assert_eq!(
                    Gstin::parse_with(candidate, grammar).is_ok(),
                    GstinComposite::new(grammar).is_valid_match(&normalize(candidate))
                );
            }
        }
    }

    #[test]
    fn test_serde() {
        let gstin = Gstin::parse("29AAGCB7383J1Z4").unwrap();
        assert_tokens(&gstin, &[Token::Str("29AAGCB7383J1Z4")]);
        assert_de_tokens_error::<Gstin>(
            &[Token::Str("29AAGCB7383J1Z5")],
            "GSTIN check character is '5', expected '4'",
        );
        assert_de_tokens_error::<Gstin>(
            &[Token::Str("29AAGCB")],
            "GSTIN must be 15 characters long, got 7",
        );
    }
}
