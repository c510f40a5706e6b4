//! Language profile table.
//!
//! Static mapping from a language identifier to its entry-point filename,
//! starter snippet, and run command.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported Repl languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Nodejs,
}

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 2] = [Language::Python, Language::Nodejs];

    /// Canonical identifier as written to config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Nodejs => "nodejs",
        }
    }

    /// Profile for this language
    pub fn profile(&self) -> &'static LanguageProfile {
        match self {
            Language::Python => &PYTHON,
            Language::Nodejs => &NODEJS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unsupported_language(s, available_languages()))
    }
}

/// Entry-point and starter content for a language
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageProfile {
    pub language: Language,
    pub entry_filename: &'static str,
    pub default_snippet: &'static str,
    pub run_command: &'static str,
}

static PYTHON: LanguageProfile = LanguageProfile {
    language: Language::Python,
    entry_filename: "main.py",
    default_snippet: "print(\"Hello from your new Repl!\")\n",
    run_command: "python main.py",
};

static NODEJS: LanguageProfile = LanguageProfile {
    language: Language::Nodejs,
    entry_filename: "index.js",
    default_snippet: "console.log(\"Hello from your new Repl!\");\n",
    run_command: "node index.js",
};

/// Look up the profile for a language identifier
pub fn lookup(language: &str) -> Result<&'static LanguageProfile> {
    language.parse::<Language>().map(|lang| lang.profile())
}

/// All profiles in the table
pub fn profiles() -> impl Iterator<Item = &'static LanguageProfile> {
    Language::ALL.into_iter().map(|lang| lang.profile())
}

/// Comma-separated list of supported identifiers, for error messages
pub fn available_languages() -> String {
    Language::ALL
        .iter()
        .map(Language::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
