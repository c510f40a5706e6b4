//! `replkit create` command handler

use anyhow::{Context, Result};
use replkit_core::{ScaffoldOptions, ScaffoldOutcome, Scaffolder, Settings};
use replkit_remote::{CreateReplRequest, RemoteProvisioner, RemoteRepl, ReplitClient};

use super::wizard::{self, TerminalPrompter};
use crate::cli::{CreateArgs, GlobalArgs};
use crate::output;

/// Scaffold a Repl from flags or the wizard, then optionally create it remotely
pub async fn run(args: CreateArgs, global: &GlobalArgs) -> Result<()> {
    let settings = super::load_settings(global)?;
    run_with_settings(args, global, settings).await
}

async fn run_with_settings(
    args: CreateArgs,
    global: &GlobalArgs,
    settings: Settings,
) -> Result<()> {
    let scaffold_settings = super::scaffold_settings(global, &settings)?;

    let options = if args.wizard {
        output::header("Create a Repl");
        wizard::collect(&mut TerminalPrompter, options_from_args(&args))?
    } else {
        options_from_args(&args)
    };

    let outcome = Scaffolder::new(&scaffold_settings)
        .scaffold(&options)
        .map_err(|e| {
            let stage = e.stage();
            anyhow::Error::new(e).context(format!("Scaffolding failed during {}", stage))
        })?;

    report_local(&outcome);

    if args.create_remote {
        let repl = create_remote(&settings, args.token, &outcome)
            .await
            .context("Local files were created, but the remote Repl was not")?;
        output::success(&format!("Remote Repl created: {}", repl.url));
        output::kv("Remote id", &repl.id);
    }

    Ok(())
}

fn options_from_args(args: &CreateArgs) -> ScaffoldOptions {
    ScaffoldOptions {
        title: args.title.clone().unwrap_or_default(),
        language: args.language.clone().unwrap_or_default(),
        private: args.private,
        template: args.template.clone(),
    }
}

fn report_local(outcome: &ScaffoldOutcome) {
    if outcome.overwrote_config {
        output::warning(&format!(
            "Replaced existing configuration {}",
            outcome.config_path
        ));
    }

    output::success(&format!(
        "Repl configuration created at: {}",
        outcome.config_path
    ));
    output::kv("Title", &outcome.record.title);
    output::kv("Language", outcome.record.language.as_str());
    output::kv(
        "Visibility",
        if outcome.record.private {
            "private"
        } else {
            "public"
        },
    );
    output::kv("Entry point", outcome.entry_point_path.as_str());
    if !outcome.commands.is_empty() {
        output::kv("Template commands", &outcome.commands.len().to_string());
    }
}

async fn create_remote(
    settings: &Settings,
    token_flag: Option<String>,
    outcome: &ScaffoldOutcome,
) -> Result<RemoteRepl> {
    let token = token_flag.or_else(|| settings.token.clone());
    let client = ReplitClient::new(settings.api_url.clone())?.with_token(token);
    let request = CreateReplRequest::from_record(&outcome.record, outcome.commands.clone());

    let spinner = output::spinner("Creating remote Repl...");
    let result = client.create_repl(&request).await;
    spinner.finish_and_clear();

    Ok(result?)
}
