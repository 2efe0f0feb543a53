//! Settings commands.

use clap::Subcommand;
use marigold_client::ApiClient;

use super::emit;

#[derive(Subcommand)]
pub enum SettingCommand {
    /// List all settings rows
    List,
    /// Show one setting's value
    Get {
        /// Setting key
        key: String,
    },
    /// Create or replace a setting
    Set {
        /// Setting key
        key: String,

        /// JSON value; plain text is stored as a JSON string
        value: String,

        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a setting
    Delete {
        /// Setting key
        key: String,
    },
}

pub async fn run(
    client: &ApiClient,
    command: SettingCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        SettingCommand::List => emit(&client.list_settings().await?),
        SettingCommand::Get { key } => emit(&client.get_setting(&key).await?),
        SettingCommand::Set {
            key,
            value,
            description,
        } => {
            // "true", "42", "{...}" parse as JSON; anything else is a string
            let value = serde_json::from_str(&value)
                .unwrap_or_else(|_| serde_json::Value::String(value));
            emit(
                &client
                    .put_setting(&key, &value, description.as_deref())
                    .await?,
            )
        }
        SettingCommand::Delete { key } => {
            client.delete_setting(&key).await?;
            tracing::info!("Setting \"{key}\" deleted");
            Ok(())
        }
    }
}
