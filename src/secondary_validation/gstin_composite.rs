use crate::normalization::normalize;
use crate::secondary_validation::{FormatGrammar, GstinChecksum, GstinFormat, Validator};

/// Format and checksum together. Used as the local gate in front of any
/// provider call.
#[derive(Clone, Copy, Debug, Default)]
pub struct GstinComposite {
    pub grammar: FormatGrammar,
}

impl GstinComposite {
    pub fn new(grammar: FormatGrammar) -> Self {
        GstinComposite { grammar }
    }
}

impl Validator for GstinComposite {
    fn is_valid_match(&self, candidate: &str) -> bool {
        GstinFormat::new(self.grammar).is_valid_match(candidate)
            && GstinChecksum.is_valid_match(candidate)
    }
}

/// Normalizes `raw` and runs it through the strict composite gate.
pub fn is_likely_valid(raw: &str) -> bool {
    GstinComposite::default().is_valid_match(&normalize(raw))
}
