use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Malformed link in '{field}': '{value}' ({reason})")]
    MalformedLinkError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Entry '{title}' has no instances")]
    EmptyInstancesError { title: String },

    #[error("Invalid record at index {index}: {message}")]
    InvalidRecordError { index: usize, message: String },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Template,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TableError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TableError::IoError(_) => ErrorCategory::System,
            TableError::YamlError(_) => ErrorCategory::Input,
            TableError::SerializationError(_) => ErrorCategory::System,
            TableError::TomlError(_)
            | TableError::InvalidConfigValueError { .. }
            | TableError::ConfigError { .. } => ErrorCategory::Config,
            TableError::MalformedLinkError { .. }
            | TableError::EmptyInstancesError { .. }
            | TableError::InvalidRecordError { .. } => ErrorCategory::Data,
            TableError::TemplateError { .. } => ErrorCategory::Template,
        }
    }

    /// Every error aborts the run; severity only picks the exit code.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data | ErrorCategory::Template => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TableError::IoError(_) => {
                "Check that the data and template files exist and the output location is writable"
            }
            TableError::YamlError(_) => "Fix the YAML syntax of the data file",
            TableError::SerializationError(_) => "Report this as a bug",
            TableError::TomlError(_) => "Fix the TOML syntax of the configuration file",
            TableError::MalformedLinkError { .. } => {
                "Use an http(s) URL or a relative path for 'path' fields"
            }
            TableError::EmptyInstancesError { .. } => {
                "Give every entry at least one instance or remove it"
            }
            TableError::InvalidRecordError { .. } => {
                "Each entry needs 'title' and 'instances'; each instance needs 'venue', 'date' and 'type'"
            }
            TableError::TemplateError { .. } => {
                "Only use placeholders the renderer provides, e.g. {{ table }}"
            }
            TableError::InvalidConfigValueError { .. } | TableError::ConfigError { .. } => {
                "Review the command line flags and configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the data file: {}", self),
            ErrorCategory::Data => format!("The data file contains an invalid record: {}", self),
            ErrorCategory::Template => format!("Could not render the template: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
