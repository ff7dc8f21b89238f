use crate::adapters::csv_io::RecordSchema;
use crate::adapters::numbering::LibPhoneNumbering;
use crate::adapters::recognizer::DEFAULT_LOCALE;
use crate::config::toml_config::TomlConfig;
use crate::core::phone::DEFAULT_REGION;
use crate::domain::model::ProcessingStage;
use crate::domain::ports::PhoneNumbering;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stages: Vec<ProcessingStage>,
    pub replace_non_latin: bool,
    pub blacklist: Option<PathBuf>,
    pub region: String,
    pub locale: String,
    pub lexicon: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub schema: RecordSchema,
}

impl RunSettings {
    /// Fills defaults and checks required values. Call `validate` afterwards.
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let input = validation::validate_required_field("input.path", &config.input.path)?;
        let output = validation::validate_required_field("output.path", &config.output.path)?;
        let stages =
            validation::validate_required_field("pipeline.process_types", &config.pipeline.process_types)?;

        let mut schema = RecordSchema::default();
        if let Some(headers) = &config.input.headers {
            schema.headers = headers.clone();
        }
        if let Some(name_field) = &config.input.name_field {
            schema.name_field = name_field.clone();
        }
        if let Some(phone_field) = &config.input.phone_field {
            schema.phone_field = phone_field.clone();
        }
        if let Some(delimiter) = &config.input.delimiter {
            schema.delimiter = validation::validate_delimiter("input.delimiter", delimiter)?;
        }

        let mut unique_stages = stages.clone();
        unique_stages.sort();
        unique_stages.dedup();

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            stages: unique_stages,
            replace_non_latin: config.name.replace_non_latin.unwrap_or(false),
            blacklist: config.name.blacklist.as_ref().map(PathBuf::from),
            region: config
                .phone
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION.to_string())
                .to_ascii_uppercase(),
            locale: config
                .name
                .locale
                .clone()
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            lexicon: config.name.lexicon.as_ref().map(PathBuf::from),
            report_json: config.output.report_json.as_ref().map(PathBuf::from),
            schema,
        })
    }

    pub fn has_stage(&self, stage: ProcessingStage) -> bool {
        self.stages.contains(&stage)
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input.to_string_lossy())?;
        validation::validate_path("output.path", &self.output.to_string_lossy())?;
        if self.input == self.output {
            return Err(EtlError::InvalidConfigValueError {
                field: "output.path".to_string(),
                value: self.output.display().to_string(),
                reason: "Output must not overwrite the input file".to_string(),
            });
        }

        if self.stages.is_empty() {
            return Err(EtlError::InvalidConfigValueError {
                field: "pipeline.process_types".to_string(),
                value: String::new(),
                reason: "Select at least one of: name, number, spacy".to_string(),
            });
        }

        validation::validate_region_code("phone.region", &self.region)?;
        if !LibPhoneNumbering.supports_region(&self.region) {
            return Err(EtlError::UnsupportedRegion {
                region: self.region.clone(),
            });
        }
        validation::validate_non_empty_string("name.locale", &self.locale)?;

        if self.has_stage(ProcessingStage::EntityCheck) {
            let blacklist = validation::validate_required_field("name.blacklist", &self.blacklist)?;
            validation::validate_path("name.blacklist", &blacklist.to_string_lossy())?;
        }

        validation::validate_unique_headers("input.headers", &self.schema.headers)?;
        validation::validate_member("input.name_field", &self.schema.name_field, &self.schema.headers)?;
        validation::validate_member("input.phone_field", &self.schema.phone_field, &self.schema.headers)?;

        Ok(())
    }
}
