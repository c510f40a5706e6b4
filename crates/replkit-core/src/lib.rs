//! # replkit-core
//!
//! Core library for the replkit CLI providing:
//! - The language profile table (entry-point filename and starter snippet)
//! - Template loading and snippet resolution
//! - Configuration record materialization
//! - Entry-point file writing
//! - Layered user settings
//!
//! # Example
//!
//! ```no_run
//! use replkit_core::{ScaffoldOptions, ScaffoldSettings, Scaffolder};
//!
//! # fn example() -> replkit_core::Result<()> {
//! let settings = ScaffoldSettings::from_current_dir()?;
//! let outcome = Scaffolder::new(&settings)
//!     .scaffold(&ScaffoldOptions::new("My Python App", "python"))?;
//!
//! // .repl-configs/my_python_app.json and main.py now exist
//! println!("{}", outcome.config_path);
//! # Ok(())
//! # }
//! ```

pub mod entry_point;
pub mod error;
pub mod materializer;
pub mod profile;
pub mod scaffold;
pub mod settings;
pub mod template;
pub mod types;

pub use entry_point::EntryPointWriter;
pub use error::{Error, Result};
pub use materializer::{ConfigMaterializer, Materialized, DEFAULT_CONFIG_DIR};
pub use profile::{Language, LanguageProfile};
pub use scaffold::{ScaffoldOptions, ScaffoldOutcome, ScaffoldSettings, Scaffolder};
pub use settings::{Settings, SettingsLoader};
pub use template::{Template, TemplateCommand};
pub use types::{slugify, ReplConfig, MAX_SLUG_LEN};
