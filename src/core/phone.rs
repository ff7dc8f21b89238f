use crate::domain::ports::PhoneNumbering;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_REGION: &str = "DE";

static EDGE_NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\D+|\D+$").expect("valid edge pattern"));
static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D").expect("valid digit pattern"));

/// Strips punctuation and labels, keeping digits and a leading `+`.
///
/// A `+` directly in front of the first digit survives the edge trim, so
/// `"+49 170 1234567"` keeps its international marker.
pub fn clean_phone_text(raw: &str) -> String {
    let trimmed = EDGE_NON_DIGITS.replace_all(raw, "");
    let plus = raw
        .find(|c: char| c.is_ascii_digit())
        .is_some_and(|first_digit| raw[..first_digit].ends_with('+'));

    let digits = NON_DIGITS.replace_all(&trimmed, "");
    if plus && !digits.is_empty() {
        format!("+{}", digits)
    } else {
        digits.into_owned()
    }
}

/// Local numbers get exactly one leading zero; `+` and `00` numbers pass through.
pub fn to_dialable(cleaned: &str) -> String {
    if cleaned.starts_with('+') || cleaned.starts_with("00") {
        cleaned.to_string()
    } else {
        format!("0{}", cleaned.trim_start_matches('0'))
    }
}

#[derive(Debug, Clone)]
pub struct PhoneNormalizer<N: PhoneNumbering> {
    numbering: N,
    region: String,
}

impl<N: PhoneNumbering> PhoneNormalizer<N> {
    pub fn new(numbering: N, region: impl Into<String>) -> Self {
        Self {
            numbering,
            region: region.into(),
        }
    }

    /// Canonical digits-only international form, or `None` when the number
    /// cannot be parsed or is not both possible and valid.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let dialable = to_dialable(&clean_phone_text(raw));
        let number = self.numbering.parse(&dialable, &self.region)?;

        if !(self.numbering.is_possible(&number) && self.numbering.is_valid(&number)) {
            tracing::debug!("Implausible phone number: {:?} -> {:?}", raw, dialable);
            return None;
        }

        let e164 = self.numbering.format_e164(&number);
        Some(e164.trim_start_matches('+').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::numbering::LibPhoneNumbering;

    fn normalizer() -> PhoneNormalizer<LibPhoneNumbering> {
        PhoneNormalizer::new(LibPhoneNumbering, DEFAULT_REGION)
    }

    #[test]
    fn test_clean_phone_text() {
        assert_eq!(clean_phone_text("tel: 0170-1234567 !!"), "01701234567");
        assert_eq!(clean_phone_text("(030) 123 456-78"), "03012345678");
        assert_eq!(clean_phone_text("+49 (170) 123 4567"), "+491701234567");
        assert_eq!(clean_phone_text("Mobil: +49 170 1234567"), "+491701234567");
        assert_eq!(clean_phone_text("0049/170/1234567"), "00491701234567");
        assert_eq!(clean_phone_text("n/a"), "");
        assert_eq!(clean_phone_text("+"), "");
    }

    #[test]
    fn test_to_dialable() {
        assert_eq!(to_dialable("1701234567"), "01701234567");
        assert_eq!(to_dialable("01701234567"), "01701234567");
        // `00` marks an international prefix and skips the trunk-zero rule
        assert_eq!(to_dialable("0001701234567"), "0001701234567");
        assert_eq!(to_dialable("00491701234567"), "00491701234567");
        assert_eq!(to_dialable("+491701234567"), "+491701234567");
        assert_eq!(to_dialable(""), "0");
    }

    #[test]
    fn test_normalize_local_mobile() {
        assert_eq!(
            normalizer().normalize("tel: 0170-1234567 !!").as_deref(),
            Some("491701234567")
        );
        // missing trunk zero is restored
        assert_eq!(
            normalizer().normalize("170 1234567").as_deref(),
            Some("491701234567")
        );
    }

    #[test]
    fn test_normalize_international_forms() {
        assert_eq!(
            normalizer().normalize("0049 170 1234567").as_deref(),
            Some("491701234567")
        );
        assert_eq!(
            normalizer().normalize("+49 170 1234567").as_deref(),
            Some("491701234567")
        );
    }

    #[test]
    fn test_normalize_rejects_implausible() {
        assert_eq!(normalizer().normalize("12345"), None);
        assert_eq!(normalizer().normalize(""), None);
        assert_eq!(normalizer().normalize("keine Angabe"), None);
    }

    #[test]
    fn test_canonical_form_reparses_to_itself() {
        let numbering = LibPhoneNumbering;
        let canonical = normalizer().normalize("0170 1234567").unwrap();
        assert!(canonical.chars().all(|c| c.is_ascii_digit()));

        let restored = format!("+{}", canonical);
        let number = numbering.parse(&restored, DEFAULT_REGION).unwrap();
        assert!(numbering.is_possible(&number));
        assert!(numbering.is_valid(&number));
        assert_eq!(normalizer().normalize(&restored), Some(canonical));
    }
}
