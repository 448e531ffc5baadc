//! Phone-number canonicalization.

/// Canonical length: country code `7` plus ten digits.
const CANONICAL_LEN: usize = 11;

/// Reduce a phone number to its 11-digit `7XXXXXXXXXX` form.
///
/// Non-digits are dropped, a leading trunk `8` becomes `7`, and bare
/// ten-digit numbers get the `7` prefix. Any other digit count is `None`.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => Some(format!("7{digits}")),
        CANONICAL_LEN => match digits.strip_prefix('8') {
            Some(rest) => Some(format!("7{rest}")),
            None => Some(digits),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+7 (701) 123-45-67", Some("77011234567"))]
    #[case("87011234567", Some("77011234567"))]
    #[case("8 701 123 45 67", Some("77011234567"))]
    #[case("7011234567", Some("77011234567"))]
    #[case("77011234567", Some("77011234567"))]
    #[case("", None)]
    #[case("12345", None)]
    #[case("tel: 7 701 123 45 6", None)]
    #[case("770112345678", None)]
    #[case("+1 202 555 0100", Some("12025550100"))]
    fn canonical_forms(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_phone(raw).as_deref(), expected);
    }
}
