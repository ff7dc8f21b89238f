use crate::domain::ports::{EntityRecognizer, EntityTag};
use crate::utils::error::{EtlError, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

pub const DEFAULT_LOCALE: &str = "de";
pub const SUPPORTED_LOCALES: &[&str] = &["de", "en", "fr", "tr"];

fn organization_suffixes(locale: &str) -> &'static [&'static str] {
    match locale {
        "de" => &["gmbh", "ag", "kg", "ohg", "ug", "ev", "mbh", "gbr", "verein", "stiftung"],
        "en" => &["ltd", "inc", "llc", "corp", "plc", "company", "group"],
        "fr" => &["sarl", "sa", "sas", "eurl", "association"],
        "tr" => &["ltd", "şti", "aş", "holding", "ticaret", "sanayi"],
        _ => &[],
    }
}

/// Gazetteer-style recognizer: lexicon entries first, then locale
/// organization suffixes, then a capitalized-word person heuristic.
#[derive(Debug, Clone)]
pub struct LexiconRecognizer {
    locale: String,
    organization_suffixes: HashSet<String>,
    lexicon: HashMap<String, EntityTag>,
}

impl LexiconRecognizer {
    pub fn new(locale: &str) -> Result<Self> {
        let locale = locale.to_ascii_lowercase();
        if !SUPPORTED_LOCALES.contains(&locale.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: "name.locale".to_string(),
                value: locale,
                reason: format!("Supported locales: {}", SUPPORTED_LOCALES.join(", ")),
            });
        }

        let organization_suffixes = organization_suffixes(&locale)
            .iter()
            .map(|s| s.to_string())
            .collect();
        Ok(Self {
            locale,
            organization_suffixes,
            lexicon: HashMap::new(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Lines look like `PERSON<TAB>token`, `ORG<TAB>token` or `OTHER<TAB>token`.
    /// Blank lines and `#` comments are skipped.
    pub fn extend_from_str(&mut self, content: &str) -> Result<usize> {
        let mut added = 0;
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (label, token) = line
                .split_once('\t')
                .ok_or_else(|| EtlError::ConfigValidationError {
                    field: "name.lexicon".to_string(),
                    message: format!("line {}: expected LABEL<TAB>token", index + 1),
                })?;
            let tag = match label.trim().to_ascii_uppercase().as_str() {
                "PERSON" | "PER" => EntityTag::Person,
                "ORG" => EntityTag::Organization,
                "OTHER" => EntityTag::Other,
                other => {
                    return Err(EtlError::ConfigValidationError {
                        field: "name.lexicon".to_string(),
                        message: format!("line {}: unknown label {:?}", index + 1, other),
                    })
                }
            };
            self.lexicon.insert(token.trim().to_lowercase(), tag);
            added += 1;
        }
        Ok(added)
    }

    fn looks_like_person(token: &str) -> bool {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        let rest: Vec<char> = chars.collect();
        first.is_uppercase()
            && !rest.is_empty()
            && rest.iter().all(|c| c.is_alphabetic())
            && rest.iter().any(|c| c.is_lowercase())
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn tag(&self, token: &str) -> EntityTag {
        let key = token.trim_matches('.').to_lowercase();
        if let Some(tag) = self.lexicon.get(&key) {
            return *tag;
        }
        if self.organization_suffixes.contains(&key) {
            return EntityTag::Organization;
        }
        if Self::looks_like_person(token) {
            EntityTag::Person
        } else {
            EntityTag::Other
        }
    }
}

/// Builds the recognizer for `locale`, merging an optional lexicon file.
pub fn load_entity_recognizer(locale: &str, lexicon: Option<&Path>) -> Result<LexiconRecognizer> {
    let mut recognizer = LexiconRecognizer::new(locale)?;
    if let Some(path) = lexicon {
        let content = fs::read_to_string(path)?;
        let added = recognizer.extend_from_str(&content)?;
        tracing::debug!("Loaded {} lexicon entries from {}", added, path.display());
    }
    tracing::info!("🧠 Entity recognizer ready (locale: {})", recognizer.locale());
    Ok(recognizer)
}
