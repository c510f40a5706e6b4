//! `replkit languages` command handler

use anyhow::Result;
use replkit_core::profile;

use crate::output;

pub fn run() -> Result<()> {
    output::header("Supported languages");
    for p in profile::profiles() {
        output::kv(
            p.language.as_str(),
            &format!("{} (run: {})", p.entry_filename, p.run_command),
        );
    }
    Ok(())
}
