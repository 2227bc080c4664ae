use std::path::PathBuf;

use clap::{Parser, Subcommand};
use panelctl::client::ApiClient;
use panelctl::commands;
use panelctl::config::CliConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panelctl")]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(
        long,
        short,
        global = true,
        env = "PANELCTL_CONFIG_PATH",
        default_value = "/etc/panelctl/config.toml"
    )]
    config_path: PathBuf,

    /// Base URL of the admin-panel API. Takes precedence over the config
    /// file.
    #[arg(long, global = true, env = "PANELCTL_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new user
    Create(commands::users::CreateParams),

    /// Retrieve one user by identifier
    Get {
        /// Identifier of the user to retrieve
        id: String,
    },

    /// Retrieve every user
    List,

    /// Update an existing user
    Update(commands::users::UpdateParams),

    /// Delete a user by identifier
    Delete {
        /// Identifier of the user to delete
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or("panelctl=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = CliConfig::load(&args.config_path, args.api_url)?;
    let client = ApiClient::new(config.api_url)?;

    match args.command {
        Command::Create(params) => commands::users::create(&client, params).await,
        Command::Get { id } => commands::users::get(&client, &id).await,
        Command::List => commands::users::list(&client).await,
        Command::Update(params) => commands::users::update(&client, params).await,
        Command::Delete { id } => commands::users::delete(&client, &id).await,
    }
}
