//! Marigold CLI - admin tooling for the Marigold Commerce backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in (token is persisted for later invocations)
//! marigold login -e meera@marigold.shop
//!
//! # Browse the catalog
//! marigold product list --search "assam" --limit 10
//! marigold product get 7be5e528-7ae4-4c8e-8a42-0a8d3f4a7a21
//!
//! # Move an order along
//! marigold order set-status 5c3f8a1b-9d2e-4c7f-8a6b-1e2d3c4b5a69 shipped
//!
//! # Reporting
//! marigold analytics dashboard
//! marigold analytics revenue --start 2026-01-01 --end 2026-03-31
//! ```
//!
//! Command output is JSON on stdout (pipe to `jq`); diagnostics go to the
//! log layer on stderr.
//!
//! # Environment Variables
//!
//! - `MARIGOLD_API_URL` - Backend base URL (default: `http://localhost:5000/api`)
//! - `MARIGOLD_TOKEN_FILE` - Auth token location (default: `$HOME/.config/marigold/token`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use marigold_client::{ApiClient, ClientConfig};

mod commands;

#[derive(Parser)]
#[command(name = "marigold")]
#[command(author, version, about = "Marigold Commerce admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the auth token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Password; read from stdin when not given
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show the currently authenticated user
    Whoami,
    /// Clear the persisted auth token
    Logout,
    /// Manage products
    #[command(subcommand)]
    Product(commands::product::ProductCommand),
    /// Manage categories
    #[command(subcommand)]
    Category(commands::category::CategoryCommand),
    /// View orders and update their status
    #[command(subcommand)]
    Order(commands::order::OrderCommand),
    /// Manage coupons
    #[command(subcommand)]
    Coupon(commands::coupon::CouponCommand),
    /// View payments
    #[command(subcommand)]
    Payment(commands::payment::PaymentCommand),
    /// View user accounts
    #[command(subcommand)]
    User(commands::user::UserCommand),
    /// Manage key/value settings
    #[command(subcommand)]
    Setting(commands::setting::SettingCommand),
    /// Reporting
    #[command(subcommand)]
    Analytics(commands::analytics::AnalyticsCommand),
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
    let client = ApiClient::new(ClientConfig::from_env()?)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&client, &email, password).await?;
        }
        Commands::Whoami => commands::auth::whoami(&client).await?,
        Commands::Logout => commands::auth::logout(&client).await?,
        Commands::Product(command) => commands::product::run(&client, command).await?,
        Commands::Category(command) => commands::category::run(&client, command).await?,
        Commands::Order(command) => commands::order::run(&client, command).await?,
        Commands::Coupon(command) => commands::coupon::run(&client, command).await?,
        Commands::Payment(command) => commands::payment::run(&client, command).await?,
        Commands::User(command) => commands::user::run(&client, command).await?,
        Commands::Setting(command) => commands::setting::run(&client, command).await?,
        Commands::Analytics(command) => commands::analytics::run(&client, command).await?,
    }

    Ok(())
}
