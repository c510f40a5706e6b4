//! `replkit whoami` command handler

use anyhow::{Context, Result};
use replkit_remote::{RemoteProvisioner, ReplitClient};

use crate::cli::{GlobalArgs, WhoamiArgs};
use crate::output;

/// Verify the configured token against the API
pub async fn run(args: WhoamiArgs, global: &GlobalArgs) -> Result<()> {
    let settings = super::load_settings(global)?;
    let token = args.token.or(settings.token);

    let client = ReplitClient::new(settings.api_url)?.with_token(token);
    tracing::debug!("Checking token against {}", client.api_url());

    let spinner = output::spinner("Testing authentication...");
    let result = client.current_user().await;
    spinner.finish_and_clear();

    let user = result.context("Authentication check failed")?;
    output::success("Authentication successful");
    output::kv("Logged in as", &format!("{} (@{})", user.display_name, user.username));

    Ok(())
}
