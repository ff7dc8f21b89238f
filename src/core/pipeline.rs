use crate::core::entity::EntityCheck;
use crate::core::name;
use crate::core::phone::PhoneNormalizer;
use crate::domain::model::{
    CleanedRecord, NameChange, ProcessingStage, Record, RejectReason, Verdict,
};
use crate::domain::ports::{EntityRecognizer, PhoneNumbering};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub replace_non_latin: bool,
}

/// Applies the active stages to one record at a time, always in the order
/// Name, EntityCheck, Number.
pub struct RecordPipeline<N: PhoneNumbering, R: EntityRecognizer> {
    stages: BTreeSet<ProcessingStage>,
    options: PipelineOptions,
    name_field: String,
    phone_field: String,
    phone: PhoneNormalizer<N>,
    entity: Option<EntityCheck<R>>,
}

impl<N: PhoneNumbering, R: EntityRecognizer> RecordPipeline<N, R> {
    /// `entity` must be present when `ProcessingStage::EntityCheck` is active;
    /// without it that stage rejects every name.
    pub fn new(
        stages: impl IntoIterator<Item = ProcessingStage>,
        options: PipelineOptions,
        name_field: impl Into<String>,
        phone_field: impl Into<String>,
        phone: PhoneNormalizer<N>,
        entity: Option<EntityCheck<R>>,
    ) -> Self {
        Self {
            stages: stages.into_iter().collect(),
            options,
            name_field: name_field.into(),
            phone_field: phone_field.into(),
            phone,
            entity,
        }
    }

    pub fn stages(&self) -> &BTreeSet<ProcessingStage> {
        &self.stages
    }

    pub fn process(&self, mut record: Record) -> Verdict {
        let mut name_changes = Vec::new();
        let raw_name = record.get(&self.name_field).unwrap_or_default().to_string();

        if self.stages.contains(&ProcessingStage::Name) {
            match self.normalize_name(&raw_name, &mut name_changes) {
                Ok(cleaned) => {
                    record.set(&self.name_field, cleaned);
                }
                Err(reason) => return reject(reason, raw_name),
            }
        }

        if self.stages.contains(&ProcessingStage::EntityCheck) {
            let current = record.get(&self.name_field).unwrap_or_default();
            let verdict = match &self.entity {
                Some(check) => check.evaluate(current).map_err(|e| e.to_string()),
                None => Err("entity check not configured".to_string()),
            };
            if let Err(why) = verdict {
                tracing::debug!("Name {:?} failed entity check: {}", current, why);
                return reject(RejectReason::NameInvalid, raw_name);
            }
        }

        if self.stages.contains(&ProcessingStage::Number) {
            let original = record.get(&self.phone_field).unwrap_or_default().to_string();
            match self.phone.normalize(&original) {
                Some(canonical) => {
                    record.set(&self.phone_field, canonical);
                }
                None => return reject(RejectReason::PhoneInvalid, original),
            }
        }

        Verdict::Accepted(CleanedRecord {
            record,
            name_changes,
        })
    }

    fn normalize_name(
        &self,
        original: &str,
        changes: &mut Vec<NameChange>,
    ) -> Result<String, RejectReason> {
        let mut current = original.to_string();

        if !name::is_latin(&current) {
            if !self.options.replace_non_latin {
                return Err(RejectReason::NameNonLatin);
            }
            let replaced = name::replace_non_latin(&current);
            if name::all_question_marks(&replaced) {
                return Err(RejectReason::NameNonLatin);
            }
            changes.push(NameChange {
                before: current,
                after: replaced.clone(),
            });
            current = replaced;
        }

        let cleaned = name::clean(&current);
        if !name::is_structurally_valid(&cleaned) {
            return Err(RejectReason::NameInvalid);
        }
        if cleaned != current {
            changes.push(NameChange {
                before: current,
                after: cleaned.clone(),
            });
        }
        Ok(cleaned)
    }
}

fn reject(reason: RejectReason, original: String) -> Verdict {
    tracing::debug!("Rejected ({}): {:?}", reason, original);
    Verdict::Rejected { reason, original }
}
