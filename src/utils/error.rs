use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Input header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Unsupported phone region: {region}")]
    UnsupportedRegion { region: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failed run.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(_) | EtlError::SerializationError(_) => ErrorCategory::Data,
            EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::HeaderMismatch { .. }
            | EtlError::UnsupportedRegion { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 寫報告失敗時主要輸出已經完成
            EtlError::SerializationError(_) => ErrorSeverity::Medium,
            EtlError::CsvError(_) => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 人類可讀的錯誤訊息，給 CLI 的 stderr 使用
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::HeaderMismatch { expected, found } => format!(
                "Error: Input file must contain the correct headers.\nExpected headers: {:?}\nFound headers: {:?}",
                expected, found
            ),
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::CsvError(e) => format!("Could not read or write the delimited file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::HeaderMismatch { .. } => {
                "Check the header row and delimiter of the input file, or set [input].headers in the config file"
            }
            EtlError::IoError(_) => "Make sure the input exists and the output directory is writable",
            EtlError::CsvError(_) => "Make sure the input is ';'-delimited UTF-8 text",
            EtlError::SerializationError(_) => "Check the --report-json path",
            EtlError::UnsupportedRegion { .. } => "Use a two-letter ISO region code such as DE or TR",
            EtlError::MissingConfigError { .. } => "Pass the missing option on the command line or in the config file",
            EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => "Review the command line options and config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
