use crate::secondary_validation::{mod36_char, mod36_value, Validator, GSTIN_LENGTH};

pub struct GstinChecksum;

/// Check character for the 14 leading characters of a GSTIN.
///
/// Characters at even (0-based) indices are weighted 1, odd ones 2. Each
/// product is folded back into base 36 by adding its quotient and remainder,
/// and the check value is whatever brings the sum to a multiple of 36.
/// Returns `None` unless `prefix` is exactly 14 characters of `0-9A-Z`.
pub fn compute_check_char(prefix: &str) -> Option<char> {
    let mut sum = 0;
    let mut count = 0;
    for (i, c) in prefix.chars().enumerate() {
        if i >= GSTIN_LENGTH - 1 {
            return None;
        }
        let value = mod36_value(c)?;
        let weight = if i % 2 == 0 { 1 } else { 2 };
        let product = value * weight;
        sum += product / 36 + product % 36;
        count += 1;
    }
    if count != GSTIN_LENGTH - 1 {
        return None;
    }
    Some(mod36_char((36 - sum % 36) % 36))
}

impl Validator for GstinChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        let prefix: String = chars.by_ref().take(GSTIN_LENGTH - 1).collect();
        let (Some(actual), None) = (chars.next(), chars.next()) else {
            return false;
        };
        compute_check_char(&prefix) == Some(actual)
    }
}
