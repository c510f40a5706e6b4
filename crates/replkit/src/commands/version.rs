//! `replkit version` command handler

use anyhow::Result;
use serde_json::json;

use crate::cli::VersionArgs;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run(args: VersionArgs) -> Result<()> {
    if args.json {
        let info = json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": VERSION,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("replkit {}", VERSION);
    }
    Ok(())
}
