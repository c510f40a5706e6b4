//! Template loading and snippet resolution.
//!
//! A template is an optional JSON file that can override the starter snippet
//! and carry auxiliary commands:
//!
//! ```json
//! {
//!   "snippet": "print('hi')",
//!   "commands": [
//!     { "command": "pip install flask", "context": "install dependencies" }
//!   ]
//! }
//! ```
//!
//! Both fields are optional and unknown fields are ignored. Commands are not
//! interpreted here; they are handed to the remote collaborator as-is.

use crate::error::{Error, Result};
use crate::profile::LanguageProfile;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parsed template file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Template {
    /// Replacement for the language's default snippet
    #[serde(default)]
    pub snippet: Option<String>,

    /// Named commands passed through to the remote agent
    #[serde(default)]
    pub commands: Vec<TemplateCommand>,
}

/// A command definition carried by a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCommand {
    pub command: String,
    pub context: String,
}

impl Template {
    /// Load a template from a JSON file
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::template_not_found(path.as_str()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            debug!("Reading template {} failed: {}", path, e);
            Error::template_not_found(path.as_str())
        })?;

        Self::from_json(path.as_str(), &content)
    }

    /// Parse a template from a JSON string; `origin` is used in error messages
    pub fn from_json(origin: &str, json: &str) -> Result<Self> {
        let template: Template =
            serde_json::from_str(json).map_err(|e| Error::template_parse(origin, e))?;

        debug!(
            "Loaded template {} (snippet override: {}, commands: {})",
            origin,
            template.snippet.is_some(),
            template.commands.len()
        );

        Ok(template)
    }
}

/// Resolve an optional template path into a template
///
/// `None` is valid and yields `None`.
pub fn load_optional(path: Option<&Utf8Path>) -> Result<Option<Template>> {
    path.map(Template::load).transpose()
}

/// Pick the entry-point content: the template override if present, otherwise
/// the profile's default snippet unchanged.
pub fn resolve_snippet(template: Option<&Template>, profile: &LanguageProfile) -> String {
    template
        .and_then(|t| t.snippet.clone())
        .unwrap_or_else(|| profile.default_snippet.to_string())
}
