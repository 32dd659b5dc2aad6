use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinsortError {
    #[error("Unknown category: '{category}' (item #{position})")]
    UnknownCategory { category: String, position: usize },

    #[error("Duplicate category in order: '{category}'")]
    DuplicateCategory { category: String },

    #[error("Bucket keys do not match category order: expected {expected:?}, found {found:?}")]
    OrderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BinsortError>;

impl BinsortError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCategory { .. } => 2,
            Self::DuplicateCategory { .. } => 3,
            Self::OrderMismatch { .. } => 4,
            Self::ConfigParse { .. } | Self::InvalidConfigValue { .. } => 5,
            Self::FileNotFound { .. } => 6,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message() {
        let err = BinsortError::UnknownCategory {
            category: "nonexistent".to_string(),
            position: 0,
        };
        assert_eq!(err.to_string(), "Unknown category: 'nonexistent' (item #0)");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = BinsortError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), 1);
    }
}
