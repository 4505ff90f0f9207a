//! CPF (Brazilian tax id) validation and display formatting.
//!
//! A CPF is 11 digits; the last two are check digits computed with a mod-11
//! weighted sum over the preceding digits. Both functions here accept input
//! with or without the conventional `DDD.DDD.DDD-DD` punctuation.

/// Extracts the digit characters of `input`, dropping everything else.
fn digits_of(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Checks whether `input` is a structurally valid CPF.
///
/// Non-digit characters are ignored, so both `"11144477735"` and
/// `"111.444.777-35"` are accepted forms of the same number. Sequences of
/// eleven identical digits are rejected outright: they satisfy the mod-11
/// arithmetic but are not issued.
pub fn is_valid(input: &str) -> bool {
    let digits = digits_of(input);

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    // First check digit: weights 10..=2 over positions 0..9.
    if check_digit(&digits[..9], 10) != digits[9] {
        return false;
    }

    // Second check digit: weights 11..=2 over positions 0..10.
    if check_digit(&digits[..10], 11) != digits[10] {
        return false;
    }

    true
}

/// Formats raw keystroke input with the `DDD.DDD.DDD-DD` mask, as far as the
/// available digits allow. Partial input is fine: `"123"` stays `"123"`,
/// `"123456"` becomes `"123.456"`. Digits beyond the eleventh are dropped.
pub fn format_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect();

    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference number whose check digits work out to 3 and 5.
    const VALID: &str = "11144477735";

    #[test]
    fn accepts_known_valid_cpf() {
        assert!(is_valid(VALID));
    }

    #[test]
    fn accepts_punctuated_form() {
        assert!(is_valid("111.444.777-35"));
    }

    #[test]
    fn rejects_repeated_digit_sequences() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!is_valid(&cpf), "repeated sequence {} must fail", cpf);
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid(""));
        assert!(!is_valid("1114447773"));
        assert!(!is_valid("111444777355"));
        // Punctuation does not count toward the length
        assert!(!is_valid("111.444.777-3"));
    }

    #[test]
    fn rejects_mutated_check_digits() {
        // Flip the first check digit (position 9)
        assert!(!is_valid("11144477745"));
        // Flip the second check digit (position 10)
        assert!(!is_valid("11144477736"));
    }

    #[test]
    fn rejects_mutated_body_digit() {
        assert!(!is_valid("21144477735"));
    }

    #[test]
    fn mask_grows_with_input() {
        assert_eq!(format_input(""), "");
        assert_eq!(format_input("1"), "1");
        assert_eq!(format_input("123"), "123");
        assert_eq!(format_input("1234"), "123.4");
        assert_eq!(format_input("123456"), "123.456");
        assert_eq!(format_input("1234567"), "123.456.7");
        assert_eq!(format_input("123456789"), "123.456.789");
        assert_eq!(format_input("1234567890"), "123.456.789-0");
        assert_eq!(format_input("12345678901"), "123.456.789-01");
    }

    #[test]
    fn mask_strips_existing_punctuation() {
        assert_eq!(format_input("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_input("123-456"), "123.456");
    }

    #[test]
    fn mask_caps_at_eleven_digits() {
        assert_eq!(format_input("123456789012345"), "123.456.789-01");
    }
}
