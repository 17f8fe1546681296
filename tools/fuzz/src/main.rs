use afl::fuzz;
use gstin_verify::{
    compute_check_char, normalize, FormatGrammar, Gstin, GstinChecksum, GstinComposite,
    GstinFormat, Validator,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let canonical = normalize(input);
    assert_eq!(normalize(&canonical), canonical);

    for grammar in [FormatGrammar::Strict, FormatGrammar::Lenient] {
        let format = GstinFormat::new(grammar).is_valid_match(&canonical);
        let checksum = GstinChecksum.is_valid_match(&canonical);
        let composite = GstinComposite::new(grammar).is_valid_match(&canonical);
        assert_eq!(composite, format && checksum);
        assert_eq!(Gstin::parse_with(input, grammar).is_ok(), composite);
    }

    // Any well formed prefix completed with its check character must pass.
    let prefix: String = canonical.chars().take(14).collect();
    if let Some(check) = compute_check_char(&prefix) {
        assert!(GstinChecksum.is_valid_match(&format!("{prefix}{check}")));
    }
}
