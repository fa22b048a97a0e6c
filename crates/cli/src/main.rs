//! AY Group CLI - Database migrations and admin management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! ay-cli migrate
//!
//! # Ensure the default admin exists (idempotent)
//! ay-cli admin bootstrap
//!
//! # Create an additional admin
//! ay-cli admin create -e editor@ay-group.net -n "Editor" -p "a-password"
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin bootstrap` - Ensure the configured default admin exists
//! - `admin create` - Create admin users

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ay-cli")]
#[command(author, version, about = "AY Group blog CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admins
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Ensure the configured default admin exists (idempotent)
    Bootstrap,
    /// Create a new admin
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password (hashed before storage)
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Bootstrap => commands::admin::bootstrap().await?,
            AdminAction::Create {
                email,
                name,
                password,
            } => {
                commands::admin::create(&email, &name, &password).await?;
            }
        },
    }
    Ok(())
}
