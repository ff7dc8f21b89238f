pub mod settings;
pub mod toml_config;

pub use settings::RunSettings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::ProcessingStage;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-etl")]
#[command(about = "Process a ';'-delimited contact file to clean phone numbers and/or names")]
pub struct CliConfig {
    /// Input CSV file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output CSV file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Processing to apply: 'number', 'name' and/or 'spacy' (entity check)
    #[arg(short = 'p', long, value_enum, num_args = 1.., alias = "process_types")]
    pub process_types: Vec<ProcessingStage>,

    /// Replace non-Latin characters with '?' in names
    #[arg(short, long, alias = "replace_non_latin")]
    pub replace_non_latin: bool,

    /// Blacklist file path
    #[arg(short, long)]
    pub blacklist: Option<String>,

    /// Default phone region (two-letter country code)
    #[arg(long)]
    pub region: Option<String>,

    /// Entity recognizer locale
    #[arg(long)]
    pub locale: Option<String>,

    /// Extra entity lexicon (LABEL<TAB>token per line)
    #[arg(long)]
    pub lexicon: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report_json: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔的值
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(input) = &self.input {
            config.input.path = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
        if !self.process_types.is_empty() {
            config.pipeline.process_types = Some(self.process_types.clone());
        }
        if self.replace_non_latin {
            config.name.replace_non_latin = Some(true);
        }
        if let Some(blacklist) = &self.blacklist {
            config.name.blacklist = Some(blacklist.clone());
        }
        if let Some(region) = &self.region {
            config.phone.region = Some(region.clone());
        }
        if let Some(locale) = &self.locale {
            config.name.locale = Some(locale.clone());
        }
        if let Some(lexicon) = &self.lexicon {
            config.name.lexicon = Some(lexicon.clone());
        }
        if let Some(report_json) = &self.report_json {
            config.output.report_json = Some(report_json.clone());
        }
    }

    /// Loads the optional config file and layers the command line on top.
    pub fn resolve(&self) -> crate::utils::error::Result<RunSettings> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_to(&mut config);
        RunSettings::from_toml(&config)
    }
}
