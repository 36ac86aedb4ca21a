//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::app::App;
use crate::core::config::{data::validate_webhook_url, Config};
use crate::logging::init_logging;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "charla")]
#[command(about = "A terminal chat that talks to a webhook")]
#[command(
    long_about = "Charla is a full-screen terminal chat. Every message you send is POSTed \
to a webhook as {\"message\": \"...\"} and the webhook's {\"response\": \"...\"} is shown \
as the bot's reply.\n\n\
Configuration:\n\
  charla set webhook-url <url>   Set the webhook to talk to\n\
  charla set dark-mode off       Start in light mode\n\
  charla config                  Show the current configuration\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Ctrl+T / F2       Switch between dark and light mode\n\
  Up/Down/PgUp/PgDn Scroll through the conversation\n\
  Mouse             Click Enviar to send, the sun/moon to switch mode\n\
  Ctrl+C / Esc      Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Webhook URL to use for this session, overriding the configured one
    #[arg(short = 'w', long, global = true, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Start in light mode
    #[arg(long, global = true)]
    pub light: bool,

    /// Write diagnostic logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Use this configuration file instead of the default location
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Set configuration values
    Set {
        /// Configuration key to set (webhook-url or dark-mode)
        key: String,
        /// Value to set for the key
        value: String,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Show the current configuration
    Config,
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    Ok(())
}

/// Folds command-line overrides into the loaded configuration for this run
/// only. Nothing here is saved.
pub fn session_config(mut config: Config, args: &Args) -> Result<Config, Box<dyn Error>> {
    if let Some(url) = &args.webhook_url {
        config.webhook_url = Some(url.clone());
    }
    if args.light {
        config.dark_mode = Some(false);
    }
    validate_webhook_url(config.webhook_url())?;
    Ok(config)
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = args.config.as_deref();

    match args.command.clone().unwrap_or(Commands::Chat) {
        Commands::Chat => {
            init_logging(args.log.as_deref())?;
            let config = session_config(load_config(config_path)?, &args)?;
            tracing::info!(webhook_url = config.webhook_url(), "starting chat");
            run_chat(App::from_config(&config)).await
        }
        Commands::Set { key, value } => {
            let mut config = load_config(config_path)?;
            config.set(&key, &value)?;
            save_config(&config, config_path)?;
            println!("✅ Set {key} to: {value}");
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = load_config(config_path)?;
            config.unset(&key)?;
            save_config(&config, config_path)?;
            println!("✅ Unset {key}");
            Ok(())
        }
        Commands::Config => {
            load_config(config_path)?.print_all();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
