use crate::secondary_validation::{Validator, GSTIN_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // state code, PAN (5 letters, 4 digits, 1 letter), entity code, 'Z', check character
    static ref STRICT_GSTIN_REGEX: Regex =
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9]Z[0-9A-Z]$").unwrap();
    static ref LENIENT_GSTIN_REGEX: Regex =
        Regex::new(r"^[0-9]{2}[A-Z0-9]{10}[0-9][A-Z][0-9A-Z]$").unwrap();
}

/// Positional grammar a candidate is checked against.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatGrammar {
    /// Official layout, with the PAN section spelled out and a literal `Z`
    /// in position 14.
    #[default]
    Strict,
    /// Generic alphanumeric PAN section and any letter in position 14.
    Lenient,
}

impl FormatGrammar {
    fn regex(&self) -> &'static Regex {
        match self {
            FormatGrammar::Strict => &STRICT_GSTIN_REGEX,
            FormatGrammar::Lenient => &LENIENT_GSTIN_REGEX,
        }
    }
}

/// Structural check of an already normalized candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GstinFormat {
    pub grammar: FormatGrammar,
}

impl GstinFormat {
    pub fn new(grammar: FormatGrammar) -> Self {
        GstinFormat { grammar }
    }
}

impl Validator for GstinFormat {
    fn is_valid_match(&self, candidate: &str) -> bool {
        candidate.len() == GSTIN_LENGTH && self.grammar.regex().is_match(candidate)
    }
}
