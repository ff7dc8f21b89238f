use crate::domain::model::Record;
use crate::utils::error::Result;

/// Sequential row input.
pub trait RecordSource {
    fn read_record(&mut self) -> Result<Option<Record>>;
}

/// Sequential row output. `finish` flushes whatever the sink buffers.
pub trait RecordSink {
    fn write_record(&mut self, record: &Record) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// Minimal telephony-numbering capability used by the phone normalizer.
pub trait PhoneNumbering {
    type Number;

    /// `None` when the text cannot be read as a number for `region`.
    fn parse(&self, text: &str, region: &str) -> Option<Self::Number>;
    fn is_possible(&self, number: &Self::Number) -> bool;
    fn is_valid(&self, number: &Self::Number) -> bool;
    /// `+<country code><national number>`
    fn format_e164(&self, number: &Self::Number) -> String;
    fn supports_region(&self, region: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityTag {
    Organization,
    Person,
    Other,
}

pub trait EntityRecognizer {
    fn tag(&self, token: &str) -> EntityTag;
}

impl<T: EntityRecognizer + ?Sized> EntityRecognizer for Box<T> {
    fn tag(&self, token: &str) -> EntityTag {
        (**self).tag(token)
    }
}
