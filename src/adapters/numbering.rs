use crate::domain::ports::PhoneNumbering;
use phonenumber::metadata::DATABASE;
use phonenumber::{country, Mode, PhoneNumber};

/// `PhoneNumbering` backed by the libphonenumber metadata of the `phonenumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumbering;

impl LibPhoneNumbering {
    fn region_id(region: &str) -> Option<country::Id> {
        region.to_ascii_uppercase().parse::<country::Id>().ok()
    }
}

impl PhoneNumbering for LibPhoneNumbering {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, region: &str) -> Option<PhoneNumber> {
        let id = Self::region_id(region)?;
        match phonenumber::parse(Some(id), text) {
            Ok(number) => Some(number),
            Err(e) => {
                tracing::debug!("Phone parse failed for {:?}: {}", text, e);
                None
            }
        }
    }

    /// Length-only check against the numbering plan of the number's region.
    fn is_possible(&self, number: &PhoneNumber) -> bool {
        let Some(metadata) = number.metadata(&DATABASE) else {
            return false;
        };
        let general = metadata.descriptors().general();
        // national() 的字串含義大利式前導零
        let length = number.national().to_string().len() as u16;
        general.possible_length().contains(&length)
            || general.possible_local_length().contains(&length)
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn format_e164(&self, number: &PhoneNumber) -> String {
        number.format().mode(Mode::E164).to_string()
    }

    fn supports_region(&self, region: &str) -> bool {
        Self::region_id(region).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_region() {
        let numbering = LibPhoneNumbering;
        assert!(numbering.supports_region("DE"));
        assert!(numbering.supports_region("tr"));
        assert!(!numbering.supports_region("XX"));
        assert!(!numbering.supports_region(""));
    }

    #[test]
    fn test_parse_and_format_german_mobile() {
        let numbering = LibPhoneNumbering;
        let number = numbering.parse("01701234567", "DE").unwrap();
        assert!(numbering.is_possible(&number));
        assert!(numbering.is_valid(&number));
        assert_eq!(numbering.format_e164(&number), "+491701234567");
    }

    #[test]
    fn test_possible_follows_numbering_plan_lengths() {
        let numbering = LibPhoneNumbering;
        let too_short = numbering.parse("+4912", "DE").unwrap();
        assert!(!numbering.is_possible(&too_short));

        let too_long = numbering.parse("+491234567890123", "DE").unwrap();
        assert!(!numbering.is_possible(&too_long));

        // no plan matches this national number, so it cannot be possible
        let unknown_plan = numbering.parse("+12025550", "DE").unwrap();
        assert!(!numbering.is_possible(&unknown_plan));
    }

    #[test]
    fn test_short_number_is_not_valid() {
        let numbering = LibPhoneNumbering;
        if let Some(number) = numbering.parse("012345", "DE") {
            assert!(!(numbering.is_possible(&number) && numbering.is_valid(&number)));
        }
    }
}
