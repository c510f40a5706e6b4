//! Error types for replkit-core

use thiserror::Error;

/// Result type alias using replkit-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
///
/// Every variant is terminal for the current invocation. The message names the
/// pipeline stage that failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Title is empty or whitespace-only
    #[error("Invalid title: {title:?}. Title must contain at least one non-whitespace character")]
    InvalidTitle { title: String },

    /// Language is not in the profile table
    #[error("Unsupported language: {language}. Supported languages: {available}")]
    UnsupportedLanguage { language: String, available: String },

    /// Template file does not exist
    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    /// Template file exists but is not valid template JSON
    #[error("Failed to parse template {path}: {source}")]
    TemplateParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Directory creation or file write failed
    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be read or parsed
    #[error("Invalid settings: {message}")]
    Settings { message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid title error
    pub fn invalid_title(title: impl Into<String>) -> Self {
        Self::InvalidTitle {
            title: title.into(),
        }
    }

    /// Create an unsupported language error
    pub fn unsupported_language(language: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
            available: available.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(path: impl Into<String>) -> Self {
        Self::TemplateNotFound { path: path.into() }
    }

    /// Create a template parse error
    pub fn template_parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::TemplateParseError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a settings error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// Short name of the failing stage, used in CLI reports
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidTitle { .. } => "title validation",
            Self::UnsupportedLanguage { .. } => "language lookup",
            Self::TemplateNotFound { .. } | Self::TemplateParseError { .. } => {
                "template resolution"
            }
            Self::WriteError { .. } | Self::Json(_) => "file materialization",
            Self::Settings { .. } => "settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(Error::invalid_title("  ").stage(), "title validation");
        assert_eq!(
            Error::unsupported_language("ruby", "python, nodejs").stage(),
            "language lookup"
        );
        assert_eq!(
            Error::template_not_found("t.json").stage(),
            "template resolution"
        );
    }

    #[test]
    fn test_unsupported_language_message_lists_available() {
        let err = Error::unsupported_language("ruby", "python, nodejs");
        assert_eq!(
            err.to_string(),
            "Unsupported language: ruby. Supported languages: python, nodejs"
        );
    }
}
