use crate::domain::model::ProcessingStage;
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

/// File-based settings. Every value is optional; command line flags win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub phone: PhoneConfig,
    #[serde(default)]
    pub name: NameConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub process_types: Option<Vec<ProcessingStage>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub delimiter: Option<String>,
    pub headers: Option<Vec<String>>,
    pub name_field: Option<String>,
    pub phone_field: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneConfig {
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameConfig {
    pub replace_non_latin: Option<bool>,
    pub blacklist: Option<String>,
    pub locale: Option<String>,
    pub lexicon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub report_json: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACTS_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[pipeline]
process_types = ["name", "spacy", "number"]

[input]
path = "leads.csv"
delimiter = ","
headers = ["Name", "Phone"]
name_field = "Name"
phone_field = "Phone"

[phone]
region = "TR"

[name]
replace_non_latin = true
blacklist = "blacklist.txt"
locale = "tr"

[output]
path = "clean.csv"
report_json = "report.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.pipeline.process_types,
            Some(vec![
                ProcessingStage::Name,
                ProcessingStage::EntityCheck,
                ProcessingStage::Number
            ])
        );
        assert_eq!(config.input.delimiter.as_deref(), Some(","));
        assert_eq!(config.phone.region.as_deref(), Some("TR"));
        assert_eq!(config.name.replace_non_latin, Some(true));
        assert_eq!(config.output.report_json.as_deref(), Some("report.json"));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.pipeline.process_types.is_none());
        assert!(config.input.headers.is_none());
        assert!(config.phone.region.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONTACT_ETL_TEST_REGION", "AT");

        let config = TomlConfig::from_toml_str(
            r#"
[phone]
region = "${CONTACT_ETL_TEST_REGION}"

[output]
path = "${CONTACT_ETL_UNSET_VAR}/out.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.phone.region.as_deref(), Some("AT"));
        assert_eq!(
            config.output.path.as_deref(),
            Some("${CONTACT_ETL_UNSET_VAR}/out.csv")
        );

        std::env::remove_var("CONTACT_ETL_TEST_REGION");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[phone\nregion = 1").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[phone]\nregion = \"CH\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.phone.region.as_deref(), Some("CH"));
    }
}
