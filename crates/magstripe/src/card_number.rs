//! Card number validation: brand patterns and the Luhn checksum

/// Card brands recognized by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Diners,
    Discover,
}

impl CardBrand {
    /// Get a human-readable name for the brand
    pub fn name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Diners => "Diners Club",
            CardBrand::Discover => "Discover",
        }
    }
}

/// Issuer prefix and total length for each supported brand
const BRAND_PATTERNS: &[(CardBrand, &[&str], usize)] = &[
    (CardBrand::Visa, &["4"], 16),
    (CardBrand::Mastercard, &["51", "52", "53", "54", "55"], 16),
    (CardBrand::Amex, &["34", "37"], 15),
    (CardBrand::Diners, &["30", "36", "38"], 14),
    (CardBrand::Discover, &["6011"], 16),
];

/// Identify the brand of a digit string by issuer prefix and exact length
///
/// # Arguments
/// * `digits` - The card number, digits only
///
/// # Returns
/// * `Some(CardBrand)` - The matching brand
/// * `None` - If no supported brand pattern matches
pub fn brand(digits: &str) -> Option<CardBrand> {
    BRAND_PATTERNS.iter().find_map(|(brand, prefixes, length)| {
        let matches = digits.len() == *length
            && prefixes.iter().any(|prefix| digits.starts_with(prefix));
        matches.then_some(*brand)
    })
}

/// Validate a candidate card number
///
/// Non-digit characters (separators some readers or operators insert) are
/// stripped first. The number must match a supported brand pattern and pass
/// the Luhn checksum. A `true` result does not imply a card with this
/// number has ever been issued.
///
/// # Example
/// ```
/// use magstripe::card_number::validate;
///
/// assert!(validate("4111-1111-1111-1111"));
/// assert!(!validate("4111 1111 1111 1112"));
/// ```
pub fn validate(candidate: &str) -> bool {
    let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();

    if brand(&digits).is_none() {
        return false;
    }

    luhn(&digits)
}

/// Luhn mod-10 checksum over an ASCII digit string
///
/// The parity `x` selects which position set gets doubled, so the classic
/// every-second-digit-from-the-right rule holds for both odd and even
/// length numbers.
fn luhn(digits: &str) -> bool {
    let x = digits.len() % 2;
    let mut checksum = 0u32;

    for (i, byte) in digits.bytes().enumerate() {
        let digit = u32::from(byte.wrapping_sub(b'0'));
        if i % 2 == x {
            let doubled = digit * 2;
            checksum += if doubled >= 10 { doubled - 9 } else { doubled };
        } else {
            checksum += digit;
        }
    }

    checksum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_known_good() {
        assert!(validate("4111111111111111"));
        assert!(validate("5105105105105100"));
        assert!(validate("4242424242424242"));
    }

    #[test]
    fn test_validate_bad_checksum() {
        assert!(!validate("4111111111111112"));
        assert!(!validate("4242424242424241"));
    }

    #[test]
    fn test_validate_strips_separators() {
        assert!(validate("4111-1111-1111-1111"));
        assert!(validate("4111 1111 1111 1111"));
        assert!(!validate("4111 1111 1111 1112"));
    }

    #[test]
    fn test_validate_odd_length_brands() {
        // Amex is 15 digits, Diners 14; the length-parity selection in the
        // checksum has to hold for these as well as the 16-digit brands.
        assert!(validate("378282246310005"));
        assert!(validate("30569309025904"));
        assert!(validate("6011111111111117"));
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        // Passes Luhn but matches no brand pattern
        assert!(!validate("9111111111111113"));
    }

    #[test]
    fn test_wrong_length_rejected() {
        // Visa prefix but 15 digits
        assert!(!validate("411111111111111"));
        assert!(!validate(""));
    }

    #[test]
    fn test_brand_identification() {
        assert_eq!(brand("4242424242424242"), Some(CardBrand::Visa));
        assert_eq!(brand("5555555555554444"), Some(CardBrand::Mastercard));
        assert_eq!(brand("378282246310005"), Some(CardBrand::Amex));
        assert_eq!(brand("30569309025904"), Some(CardBrand::Diners));
        assert_eq!(brand("6011111111111117"), Some(CardBrand::Discover));
        assert_eq!(brand("9111111111111113"), None);
    }
}
