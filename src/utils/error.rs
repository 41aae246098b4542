use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{entity} not found: {id}")]
    NotFoundError { entity: String, id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Io,
    Lookup,
    Output,
}

impl CatalogError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        CatalogError::NotFoundError {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::NotFoundError { .. } => ErrorCategory::Lookup,
            CatalogError::SerializationError(_) => ErrorCategory::Output,
            CatalogError::TomlError(_) | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read catalog file: {}", e),
            CatalogError::TomlError(_) => "Catalog file is not valid TOML".to_string(),
            CatalogError::SerializationError(_) => "Failed to render output".to_string(),
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            CatalogError::NotFoundError { entity, id } => {
                format!("No {} with id '{}'", entity.to_lowercase(), id)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the catalog path exists and is readable",
            ErrorCategory::Config => "Fix the catalog file and run again",
            ErrorCategory::Lookup => "List the catalog to see the available ids",
            ErrorCategory::Output => "Run again without --json to print plain text",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Lookup => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Io => 3,
            ErrorCategory::Output => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
