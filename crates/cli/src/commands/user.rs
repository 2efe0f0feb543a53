//! User account commands.

use clap::Subcommand;
use marigold_client::ApiClient;
use marigold_core::UserId;

use super::emit;

#[derive(Subcommand)]
pub enum UserCommand {
    /// List user accounts
    List,
    /// Show one user
    Get {
        /// User ID
        id: UserId,
    },
}

pub async fn run(
    client: &ApiClient,
    command: UserCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        UserCommand::List => emit(&client.list_users().await?),
        UserCommand::Get { id } => emit(&client.get_user(id).await?),
    }
}
