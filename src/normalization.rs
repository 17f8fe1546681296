/// Canonical comparison form of a GSTIN candidate: every whitespace character
/// removed, the remainder upper-cased.
///
/// This never fails. Anything that is not a GSTIN is simply carried through
/// and rejected later by the validators.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}
