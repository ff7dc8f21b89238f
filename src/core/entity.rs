use crate::core::charset::Charset;
use crate::domain::ports::{EntityRecognizer, EntityTag};
use std::fmt;

/// Marker that lets single-token and initial-only names through.
const ABBREVIATION_MARKER: &str = "u.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityFailure {
    Charset,
    Blacklisted(String),
    SingleToken,
    SingleCharacterToken,
    NoEntity,
}

impl fmt::Display for EntityFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityFailure::Charset => f.write_str("character outside the allowed set"),
            EntityFailure::Blacklisted(entry) => write!(f, "matches blacklist entry {:?}", entry),
            EntityFailure::SingleToken => f.write_str("only one name part"),
            EntityFailure::SingleCharacterToken => f.write_str("contains a one-letter part"),
            EntityFailure::NoEntity => f.write_str("no person or organization recognized"),
        }
    }
}

/// Blacklist, shape and named-entity plausibility check for names.
pub struct EntityCheck<R: EntityRecognizer> {
    blacklist: Vec<String>,
    recognizer: R,
}

impl<R: EntityRecognizer> EntityCheck<R> {
    pub fn new(blacklist: Vec<String>, recognizer: R) -> Self {
        let blacklist = blacklist
            .into_iter()
            .map(|entry| entry.to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self {
            blacklist,
            recognizer,
        }
    }

    pub fn evaluate(&self, name: &str) -> Result<(), EntityFailure> {
        if !Charset::Broad.contains_all(name) {
            return Err(EntityFailure::Charset);
        }

        let lowered = name.to_lowercase();
        if let Some(entry) = self.blacklist.iter().find(|entry| lowered.contains(entry.as_str())) {
            return Err(EntityFailure::Blacklisted(entry.clone()));
        }

        let abbreviated = lowered.contains(ABBREVIATION_MARKER);
        let parts: Vec<&str> = name.split_whitespace().collect();
        if parts.len() == 1 && !abbreviated {
            return Err(EntityFailure::SingleToken);
        }
        if parts.iter().any(|part| part.chars().count() == 1) && !abbreviated {
            return Err(EntityFailure::SingleCharacterToken);
        }

        let recognized = parts.iter().any(|token| {
            matches!(
                self.recognizer.tag(token),
                EntityTag::Organization | EntityTag::Person
            )
        });
        if recognized {
            Ok(())
        } else {
            Err(EntityFailure::NoEntity)
        }
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.evaluate(name).is_ok()
    }
}
