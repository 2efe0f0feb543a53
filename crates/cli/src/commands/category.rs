//! Category commands.

use clap::Subcommand;
use marigold_client::types::{CategoryPatch, NewCategory};
use marigold_client::ApiClient;
use marigold_core::CategoryId;

use super::emit;

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List categories
    List,
    /// Show one category
    Get {
        /// Category ID
        id: CategoryId,
    },
    /// Create a category
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// URL slug
        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Update fields on a category
    Update {
        /// Category ID
        id: CategoryId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: CategoryId,
    },
}

pub async fn run(
    client: &ApiClient,
    command: CategoryCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        CategoryCommand::List => emit(&client.list_categories().await?),
        CategoryCommand::Get { id } => emit(&client.get_category(id).await?),
        CategoryCommand::Create {
            name,
            description,
            slug,
            image_url,
            active,
        } => {
            let category = NewCategory {
                name,
                description,
                slug,
                image_url,
                is_active: active,
            };
            emit(&client.create_category(&category).await?)
        }
        CategoryCommand::Update {
            id,
            name,
            description,
            slug,
            image_url,
            active,
        } => {
            let patch = CategoryPatch {
                name,
                description,
                slug,
                image_url,
                is_active: active,
            };
            emit(&client.update_category(id, &patch).await?)
        }
        CategoryCommand::Delete { id } => {
            client.delete_category(id).await?;
            tracing::info!("Category {id} deleted");
            Ok(())
        }
    }
}
