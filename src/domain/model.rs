use serde::{Deserialize, Serialize};
use std::fmt;

/// One input row: field names paired with their values, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces the value of an existing field. Unknown fields are ignored so
    /// the column set never changes.
    pub fn set(&mut self, field: &str, value: String) -> bool {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStage {
    /// Latin charset policy, cleanup and first/last name check
    Name,
    /// Phone number canonicalization
    Number,
    /// Blacklist and named-entity plausibility check
    #[cfg_attr(feature = "cli", value(name = "spacy", alias = "entity"))]
    #[serde(alias = "spacy", alias = "entity")]
    EntityCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NameInvalid,
    NameNonLatin,
    PhoneInvalid,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectReason::NameInvalid => "invalid name",
            RejectReason::NameNonLatin => "non-Latin name",
            RejectReason::PhoneInvalid => "invalid phone number",
        };
        f.write_str(label)
    }
}

/// An `original -> cleaned` name rewrite kept for the audit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChange {
    pub before: String,
    pub after: String,
}

impl fmt::Display for NameChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.before, self.after)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    pub record: Record,
    pub name_changes: Vec<NameChange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(CleanedRecord),
    Rejected {
        reason: RejectReason,
        original: String,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Diagnostic lists collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub invalid_numbers: Vec<String>,
    pub invalid_names: Vec<String>,
    pub non_latin_names: Vec<String>,
    pub changed_names: Vec<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a verdict into the matching bucket. Audit entries are only kept
    /// for accepted records.
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Accepted(cleaned) => self
                .changed_names
                .extend(cleaned.name_changes.iter().map(ToString::to_string)),
            Verdict::Rejected { reason, original } => {
                let bucket = match reason {
                    RejectReason::PhoneInvalid => &mut self.invalid_numbers,
                    RejectReason::NameInvalid => &mut self.invalid_names,
                    RejectReason::NameNonLatin => &mut self.non_latin_names,
                };
                bucket.push(original.clone());
            }
        }
    }

    pub fn rejected_count(&self) -> usize {
        self.invalid_numbers.len() + self.invalid_names.len() + self.non_latin_names.len()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: [(&str, &[String]); 4] = [
            ("Invalid phone numbers removed:", self.invalid_numbers.as_slice()),
            ("Invalid names removed:", self.invalid_names.as_slice()),
            (
                "Names removed due to non-Latin characters or consisting entirely of '?':",
                self.non_latin_names.as_slice(),
            ),
            ("Names changed:", self.changed_names.as_slice()),
        ];

        for (title, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            writeln!(f, "{}", title)?;
            for entry in entries {
                writeln!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}
