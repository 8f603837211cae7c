use std::iter;

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::error::OrdkeyError;
use crate::generators::alphabet::Alphabet;
use crate::generators::bound::Bound;
use crate::generators::traits::KeyGenerator;

static DEFAULT_GENERATOR: Lazy<MidpointGenerator> = Lazy::new(MidpointGenerator::default);

/// Generates a key strictly between two optional bounds using the default
/// (base95) alphabet.
///
/// An absent lower bound means "start of the list", an absent upper bound
/// "end of the list".
pub fn generate(lower: Option<&str>, upper: Option<&str>) -> Result<String, OrdkeyError> {
    DEFAULT_GENERATOR.between(&Bound::from(lower), &Bound::from(upper))
}

/// Digit-by-digit midpoint key generator over a fixed [`Alphabet`].
///
/// Stateless: the same bounds always produce the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointGenerator {
    alphabet: Alphabet,
}

impl MidpointGenerator {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    fn check_bounds(&self, lower: &str, upper: Option<&str>) -> Result<(), OrdkeyError> {
        if let Some(upper) = upper {
            if lower >= upper {
                debug!("Rejecting bounds {:?} >= {:?}", lower, upper);
                return Err(OrdkeyError::OrderingViolation {
                    lower: lower.to_string(),
                    upper: upper.to_string(),
                });
            }
        }
        for key in iter::once(lower).chain(upper) {
            if key.as_bytes().last() == Some(&self.alphabet.zero()) {
                debug!("Rejecting bound {:?} with trailing zero", key);
                return Err(OrdkeyError::TrailingZeroViolation(key.to_string()));
            }
        }
        for key in iter::once(lower).chain(upper) {
            self.check_digits(key)?;
        }
        Ok(())
    }

    fn check_digits(&self, key: &str) -> Result<(), OrdkeyError> {
        match key
            .chars()
            .find(|c| !c.is_ascii() || !self.alphabet.contains(*c as u8))
        {
            Some(digit) => Err(OrdkeyError::InvalidDigit {
                key: key.to_string(),
                digit,
            }),
            None => Ok(()),
        }
    }

    // Bounds must already be checked: `lower < upper`, no trailing zeros,
    // every byte a digit of the alphabet.
    fn midpoint(&self, mut lower: &[u8], mut upper: Option<&[u8]>) -> String {
        let zero = self.alphabet.zero();
        let mut key = String::new();

        loop {
            if let Some(b) = upper {
                // `lower` is padded with zeros; `b` cannot run out first while
                // the digits match.
                let shared = b
                    .iter()
                    .zip(lower.iter().copied().chain(iter::repeat(zero)))
                    .take_while(|(digit_b, digit_a)| **digit_b == *digit_a)
                    .count();
                if shared > 0 {
                    key.extend(b[..shared].iter().map(|&d| char::from(d)));
                    lower = lower.get(shared..).unwrap_or_default();
                    upper = Some(&b[shared..]);
                }
            }

            let digit_a = lower.first().copied().unwrap_or(zero);
            let digit_b = upper
                .and_then(|b| b.first().copied())
                .unwrap_or(self.alphabet.upper_limit());

            if digit_b.saturating_sub(digit_a) > 1 {
                key.push(char::from(self.alphabet.midpoint(digit_a, digit_b)));
                return key;
            }

            match upper {
                // A strict prefix of a longer `upper` already sorts below it.
                Some(b) if b.len() > 1 => {
                    key.push(char::from(b[0]));
                    return key;
                }
                // Keep `lower`'s leading digit and continue after it with no upper bound.
                _ => {
                    key.push(char::from(digit_a));
                    lower = lower.get(1..).unwrap_or_default();
                    upper = None;
                }
            }
        }
    }
}

impl KeyGenerator for MidpointGenerator {
    fn between(&self, lower: &Bound, upper: &Bound) -> Result<String, OrdkeyError> {
        let lower = lower.as_key().unwrap_or("");
        let upper = upper.as_key();
        self.check_bounds(lower, upper)?;

        let key = self.midpoint(lower.as_bytes(), upper.map(str::as_bytes));
        trace!("Generated {:?} between {:?} and {:?}", key, lower, upper);
        Ok(key)
    }

    fn validate(&self, key: &str) -> Result<(), OrdkeyError> {
        if key.is_empty() {
            return Err(OrdkeyError::EmptyKey);
        }
        if key.as_bytes().last() == Some(&self.alphabet.zero()) {
            return Err(OrdkeyError::TrailingZeroViolation(key.to_string()));
        }
        self.check_digits(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn base10() -> MidpointGenerator {
        MidpointGenerator::new(Alphabet::BASE10)
    }

    fn between(lower: Option<&str>, upper: Option<&str>) -> Result<String, OrdkeyError> {
        base10().between(&Bound::from(lower), &Bound::from(upper))
    }

    // Maps arbitrary bytes onto canonical base10 digits.
    fn to_key(raw: &[u8]) -> Option<String> {
        let key: String = raw.iter().map(|b| char::from(b'0' + b % 10)).collect();
        let key = key.trim_end_matches('0');
        (!key.is_empty()).then(|| key.to_string())
    }

    fn assert_between(lower: Option<&str>, upper: Option<&str>) -> String {
        let key = between(lower, upper).unwrap();
        assert!(lower.is_none_or(|a| a < key.as_str()), "{key:?} <= {lower:?}");
        assert!(upper.is_none_or(|b| key.as_str() < b), "{key:?} >= {upper:?}");
        assert!(!key.ends_with('0'), "{key:?} has a trailing zero");
        key
    }

    #[test]
    fn first_key_is_middle_digit() {
        assert_eq!(between(None, None).unwrap(), "5");
        assert_eq!(generate(None, None).unwrap(), "P");
    }

    #[test]
    fn carries_when_digits_are_adjacent() {
        assert_eq!(between(Some("49"), Some("5")).unwrap(), "495");
        assert_eq!(between(Some("499"), Some("5")).unwrap(), "4995");
    }

    #[test]
    fn takes_upper_prefix_when_upper_is_longer() {
        assert_eq!(between(Some("4"), Some("51")).unwrap(), "5");
    }

    #[test]
    fn elides_shared_prefix() {
        let key = between(Some("001"), Some("001002")).unwrap();
        assert!(key.starts_with("001"));
        assert_eq!(&key[3..], between(None, Some("002")).unwrap());
        assert_eq!(key, "001001");
    }

    #[test]
    fn inserts_at_start_of_list() {
        assert_eq!(between(None, Some("1")).unwrap(), "05");
        assert_eq!(between(None, Some("05")).unwrap(), "03");
        for upper in ["5", "3", "2", "1", "05", "03", "02", "01"] {
            assert_between(None, Some(upper));
        }
    }

    #[test]
    fn inserts_at_end_of_list() {
        assert_eq!(between(Some("5"), None).unwrap(), "8");
        assert_eq!(between(Some("9"), None).unwrap(), "95");
        assert_eq!(between(Some("99"), None).unwrap(), "995");
        for lower in ["5", "8", "9", "95", "98", "99"] {
            assert_between(Some(lower), None);
        }
    }

    #[test]
    fn inserts_between_keys() {
        for (lower, upper) in [
            ("05", "1"),
            ("001", "002"),
            ("001", "001002"),
            ("001", "001001"),
            ("499", "5"),
        ] {
            assert_between(Some(lower), Some(upper));
        }
    }

    #[test]
    fn base95_handles_letters() {
        let key = generate(Some("O"), Some("OO")).unwrap();
        assert!("O" < key.as_str() && key.as_str() < "OO");
        assert_eq!(key, "O8");
    }

    #[test]
    fn empty_lower_means_start_of_list() {
        assert_eq!(between(Some(""), None).unwrap(), between(None, None).unwrap());
        assert_eq!(between(Some(""), Some("3")).unwrap(), "2");
    }

    #[test]
    fn rejects_out_of_order_bounds() {
        for (lower, upper) in [("2", "1"), ("11", "1"), ("", ""), ("1", "1"), ("555", "555")] {
            assert!(
                matches!(
                    between(Some(lower), Some(upper)),
                    Err(OrdkeyError::OrderingViolation { .. })
                ),
                "{lower:?}, {upper:?}"
            );
        }
        assert!(matches!(
            between(None, Some("")),
            Err(OrdkeyError::OrderingViolation { .. })
        ));
    }

    #[test]
    fn rejects_trailing_zero() {
        assert_eq!(
            between(Some("10"), None),
            Err(OrdkeyError::TrailingZeroViolation("10".to_string()))
        );
        assert_eq!(
            between(None, Some("10")),
            Err(OrdkeyError::TrailingZeroViolation("10".to_string()))
        );
        assert!(matches!(
            generate(Some("1 "), None),
            Err(OrdkeyError::TrailingZeroViolation(_))
        ));
    }

    #[test]
    fn rejects_digits_outside_alphabet() {
        assert_eq!(
            between(Some("1a"), None),
            Err(OrdkeyError::InvalidDigit {
                key: "1a".to_string(),
                digit: 'a'
            })
        );
        assert!(matches!(
            generate(None, Some("é")),
            Err(OrdkeyError::InvalidDigit { digit: 'é', .. })
        ));
    }

    #[test]
    fn validate_accepts_only_canonical_keys() {
        let generator = base10();
        assert!(generator.validate("495").is_ok());
        assert_eq!(generator.validate(""), Err(OrdkeyError::EmptyKey));
        assert!(matches!(
            generator.validate("50"),
            Err(OrdkeyError::TrailingZeroViolation(_))
        ));
        assert!(matches!(
            generator.validate("5x"),
            Err(OrdkeyError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn two_digit_alphabet_still_splits() {
        let generator = MidpointGenerator::new(Alphabet::new(b'0', b'2').unwrap());
        let first = generator.between(&Bound::Unbounded, &Bound::Unbounded).unwrap();
        assert_eq!(first, "1");
        let before = generator.between(&Bound::Unbounded, &Bound::key("1")).unwrap();
        assert_eq!(before, "01");
        let after = generator.between(&Bound::key("1"), &Bound::Unbounded).unwrap();
        assert_eq!(after, "11");
    }

    #[quickcheck]
    fn result_is_strictly_between(a: Vec<u8>, b: Vec<u8>) -> TestResult {
        let (Some(a), Some(b)) = (to_key(&a), to_key(&b)) else {
            return TestResult::discard();
        };
        if a == b {
            return TestResult::discard();
        }
        let (lower, upper) = if a < b { (a, b) } else { (b, a) };
        let key = between(Some(lower.as_str()), Some(upper.as_str())).unwrap();
        TestResult::from_bool(
            lower < key && key < upper && !key.ends_with('0') && base10().validate(&key).is_ok(),
        )
    }

    #[quickcheck]
    fn open_ends_are_respected(a: Vec<u8>) -> TestResult {
        let Some(a) = to_key(&a) else {
            return TestResult::discard();
        };
        let after = between(Some(a.as_str()), None).unwrap();
        let before = between(None, Some(a.as_str())).unwrap();
        TestResult::from_bool(a < after && !after.ends_with('0') && before < a && !before.ends_with('0'))
    }

    #[quickcheck]
    fn is_deterministic(a: Vec<u8>) -> bool {
        let a = to_key(&a);
        between(a.as_deref(), None) == between(a.as_deref(), None)
    }
}
