//! Jungle CLI - Database migrations and account management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! jungle migrate
//!
//! # Create an account (password from JUNGLE_PASSWORD or stdin)
//! echo 'password' | jungle user create --first-name John --last-name Doe --email test@test.com
//!
//! # Check a password against an account
//! JUNGLE_PASSWORD=password jungle user authenticate --email test@test.com
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `user create` - Register an account
//! - `user authenticate` - Verify an email/password pair

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "jungle")]
#[command(author, version, about = "Jungle CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new account
    Create {
        /// Given name
        #[arg(long)]
        first_name: String,

        /// Family name
        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Check an email/password pair
    Authenticate {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jungle_cli=info,jungle_data=info".into());

    // JSON output for log shippers, text otherwise
    let is_json = std::env::var("JUNGLE_LOG_FORMAT").is_ok_and(|f| f == "json");
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                first_name,
                last_name,
                email,
            } => {
                commands::user::create(first_name, last_name, email).await?;
            }
            UserAction::Authenticate { email } => {
                commands::user::authenticate(&email).await?;
            }
        },
    }
    Ok(())
}
