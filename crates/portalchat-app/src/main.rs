use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use portalchat_llm_api::ClientFactory;

use portalchat::app::{run_repl_mode, run_web_server};
use portalchat::config::{Profile, PROFILE_NAMES};
use portalchat::{setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if cli.verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    if cli.list_profiles {
        for name in PROFILE_NAMES {
            if let Some(profile) = Profile::builtin(name) {
                println!("{}  {} ({})", name.bright_cyan(), profile.title, profile.model);
            }
        }
        return Ok(());
    }

    let app_config = setup_from_cli(&cli)?;

    // Fail fast on a missing key or URL instead of at the first turn
    let client = ClientFactory::create(&app_config.client_config)
        .context("Failed to create completion client")?;

    if cli.web {
        return run_web_server(&app_config).await;
    }

    run_repl_mode(&app_config, client.as_ref()).await
}
