mod gstin_checksum;
mod gstin_composite;
mod gstin_format;

pub use crate::secondary_validation::gstin_checksum::{compute_check_char, GstinChecksum};
pub use crate::secondary_validation::gstin_composite::{is_likely_valid, GstinComposite};
pub use crate::secondary_validation::gstin_format::{FormatGrammar, GstinFormat};

/// Number of characters in a GSTIN.
pub const GSTIN_LENGTH: usize = 15;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

const MOD36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Value of a character in the `0-9A-Z` alphabet. Lowercase is not part of it.
#[inline]
fn mod36_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' | 'A'..='Z' => c.to_digit(36),
        _ => None,
    }
}

#[inline]
fn mod36_char(value: u32) -> char {
    MOD36_ALPHABET[(value % 36) as usize] as char
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mod36_alphabet_mapping() {
        assert_eq!(mod36_value('0'), Some(0));
        assert_eq!(mod36_value('9'), Some(9));
        assert_eq!(mod36_value('A'), Some(10));
        assert_eq!(mod36_value('Z'), Some(35));
        assert_eq!(mod36_value('a'), None);
        assert_eq!(mod36_value('-'), None);
        assert_eq!(mod36_value('é'), None);
        for value in 0..36 {
            assert_eq!(mod36_value(mod36_char(value)), Some(value));
        }
    }
}
