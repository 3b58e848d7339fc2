//! Validation functions for tax identifiers and postal codes
//!
//! Check-digit implementations for CPF, CNPJ and CUIT, plus the structural
//! checks for DNI and CPA. Every function accepts formatted or bare input and
//! returns a plain `bool`; none of them can fail.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;
const CUIT_LEN: usize = 11;

const CUIT_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Province letters that may lead a CPA. `I` and `O` are not assigned.
const CPA_PROVINCES: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";

static CPA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][0-9]{4}[A-Z]{3}$").expect("CPA pattern is valid")
});

/// Keep only ASCII digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digit_values(value: &str) -> Vec<u32> {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .filter_map(|c| c.to_digit(10))
        .collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// CPF check digit over `digits` (9 or 10 of them).
fn cpf_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (top - i as u32))
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

/// CNPJ check digit over `digits` (12 or 13 of them).
///
/// Weights start at `len - 7` and count down to 2, then wrap to 9.
fn cnpj_digit(digits: &[u32]) -> u32 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0;
    for &d in digits {
        sum += d * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// CUIT verifier over the first 10 digits. 10 means no digit can satisfy it.
fn cuit_verifier(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(CUIT_WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();

    match 11 - sum % 11 {
        11 => 0,
        v => v,
    }
}

/// Validate a Brazilian CPF (11 digits, two check digits)
pub fn cpf(value: &str) -> bool {
    let digits = digit_values(value);

    if digits.len() != CPF_LEN {
        trace!(kind = "cpf", len = digits.len(), "rejected: wrong length");
        return false;
    }
    if all_same(&digits) {
        trace!(kind = "cpf", "rejected: repeated digits");
        return false;
    }

    let ok = cpf_digit(&digits[..9]) == digits[9] && cpf_digit(&digits[..10]) == digits[10];
    if !ok {
        trace!(kind = "cpf", "rejected: check digit mismatch");
    }
    ok
}

/// Validate a Brazilian CNPJ (14 digits, two check digits)
pub fn cnpj(value: &str) -> bool {
    let digits = digit_values(value);

    if digits.len() != CNPJ_LEN {
        trace!(kind = "cnpj", len = digits.len(), "rejected: wrong length");
        return false;
    }
    if all_same(&digits) {
        trace!(kind = "cnpj", "rejected: repeated digits");
        return false;
    }

    let ok = cnpj_digit(&digits[..12]) == digits[12] && cnpj_digit(&digits[..13]) == digits[13];
    if !ok {
        trace!(kind = "cnpj", "rejected: check digit mismatch");
    }
    ok
}

/// Validate an Argentine CUIT (11 digits, one check digit)
pub fn cuit(value: &str) -> bool {
    let digits = digit_values(value);

    if digits.len() != CUIT_LEN {
        trace!(kind = "cuit", len = digits.len(), "rejected: wrong length");
        return false;
    }

    let verifier = cuit_verifier(&digits[..10]);
    if verifier == 10 {
        trace!(kind = "cuit", "rejected: unresolvable verifier");
        return false;
    }

    let ok = verifier == digits[10];
    if !ok {
        trace!(kind = "cuit", "rejected: check digit mismatch");
    }
    ok
}

/// Validate an Argentine DNI.
///
/// Only the length (7 or 8 digits) is checked; DNI numbers carry no public
/// check digit.
pub fn dni(value: &str) -> bool {
    let len = digit_values(value).len();
    let ok = len == 7 || len == 8;
    if !ok {
        trace!(kind = "dni", len, "rejected: wrong length");
    }
    ok
}

/// Validate an Argentine postal code (CPA), e.g. `C1000AAA`
pub fn cpa(value: &str) -> bool {
    let code: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if !CPA_PATTERN.is_match(&code) {
        trace!(kind = "cpa", "rejected: does not match LDDDDLLL");
        return false;
    }

    // Pattern guarantees an ASCII letter up front
    let province = code.as_bytes()[0];
    let ok = CPA_PROVINCES.contains(&province);
    if !ok {
        trace!(kind = "cpa", province = %(province as char), "rejected: unknown province");
    }
    ok
}

/// Compute both CPF check digits for a 9-digit base
pub fn cpf_check_digits(base: &str) -> Option<[u8; 2]> {
    let mut digits = digit_values(base);
    if digits.len() != 9 {
        return None;
    }

    let first = cpf_digit(&digits);
    digits.push(first);
    let second = cpf_digit(&digits);
    Some([first as u8, second as u8])
}

/// Compute both CNPJ check digits for a 12-digit base
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    let mut digits = digit_values(base);
    if digits.len() != 12 {
        return None;
    }

    let first = cnpj_digit(&digits);
    digits.push(first);
    let second = cnpj_digit(&digits);
    Some([first as u8, second as u8])
}

/// Compute the CUIT check digit for a 10-digit base.
///
/// Returns `None` when the base has the wrong length or when no check digit
/// can make it valid.
pub fn cuit_check_digit(base: &str) -> Option<u8> {
    let digits = digit_values(base);
    if digits.len() != 10 {
        return None;
    }

    match cuit_verifier(&digits) {
        10 => None,
        v => Some(v as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_valid() {
        assert!(cpf("11144477735"));
        assert!(cpf("111.444.777-35")); // Formatted
        assert!(cpf(" 111 444 777 35 "));
    }

    #[test]
    fn test_cpf_invalid() {
        assert!(!cpf("12345678900")); // Wrong second digit
        assert!(!cpf("11144477736"));
        assert!(!cpf("11111111111")); // Repeated digits
        assert!(!cpf("00000000000"));
        assert!(!cpf("1114447773")); // Too short
        assert!(!cpf("111444777350")); // Too long
        assert!(!cpf(""));
        assert!(!cpf("abc.def.ghi-jk"));
    }

    #[test]
    fn test_cpf_remainder_ten_maps_to_zero() {
        // First verifier of 123456789 has remainder 10
        assert_eq!(cpf_check_digits("123456789"), Some([0, 9]));
        assert!(cpf("12345678909"));
    }

    #[test]
    fn test_cnpj_valid() {
        assert!(cnpj("11444777000161"));
        assert!(cnpj("11.444.777/0001-61"));
    }

    #[test]
    fn test_cnpj_invalid() {
        assert!(!cnpj("12345678000190"));
        assert!(!cnpj("11444777000162"));
        assert!(!cnpj("11111111111111")); // Repeated digits
        assert!(!cnpj("1144477700016")); // Too short
        assert!(!cnpj(""));
    }

    #[test]
    fn test_cnpj_check_digits() {
        assert_eq!(cnpj_check_digits("11.444.777/0001"), Some([6, 1]));
        assert_eq!(cnpj_check_digits("123"), None);
    }

    #[test]
    fn test_cuit_valid() {
        assert!(cuit("20123456786"));
        assert!(cuit("20-17254359-7"));
        // Remainder 0 gives verifier 0
        assert!(cuit("20123456700"));
    }

    #[test]
    fn test_cuit_invalid() {
        assert!(!cuit("20123456787"));
        assert!(!cuit("2012345678")); // Too short
        assert!(!cuit(""));
    }

    #[test]
    fn test_cuit_unresolvable_verifier() {
        // Base 2012345676 sums to 1 mod 11, so the verifier would be 10
        for last in 0..=9 {
            assert!(!cuit(&format!("2012345676{last}")));
        }
        assert_eq!(cuit_check_digit("2012345676"), None);
    }

    #[test]
    fn test_dni() {
        assert!(dni("1234567"));
        assert!(dni("12.345.678"));
        assert!(!dni("123456"));
        assert!(!dni("123456789"));
        assert!(!dni(""));
    }

    #[test]
    fn test_cpa_valid() {
        assert!(cpa("C1000AAA"));
        assert!(cpa("c1000aaa")); // Case-insensitive
        assert!(cpa(" B 1636 ABC "));
    }

    #[test]
    fn test_cpa_invalid() {
        assert!(!cpa("I1000AAA")); // Not a province
        assert!(!cpa("O1000AAA"));
        assert!(!cpa("C100AAA")); // Three digits
        assert!(!cpa("C1000AA"));
        assert!(!cpa("C1000AAAA"));
        assert!(!cpa("11000AAA"));
        assert!(!cpa("C-1000-AAA"));
        assert!(!cpa(""));
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("11.444.777/0001-61"), "11444777000161");
        assert_eq!(digits_only("٣٤٥"), ""); // Non-ASCII digits are ignored
    }
}
