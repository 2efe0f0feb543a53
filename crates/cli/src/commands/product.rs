//! Product commands.

use clap::Subcommand;
use marigold_client::services::ProductFilters;
use marigold_client::types::{NewProduct, ProductPatch};
use marigold_client::ApiClient;
use marigold_core::ProductId;
use rust_decimal::Decimal;

use super::emit;

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List products
    List {
        /// Filter by category name
        #[arg(long)]
        category: Option<String>,

        /// Filter by active status
        #[arg(long)]
        active: Option<bool>,

        /// Search in name and description
        #[arg(long)]
        search: Option<String>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,

        /// Pagination offset
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show one product
    Get {
        /// Product ID
        id: ProductId,
    },
    /// Create a product
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Selling price in INR
        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        description: Option<String>,

        /// Original price when discounted
        #[arg(long)]
        compare_at_price: Option<Decimal>,

        #[arg(long)]
        sku: Option<String>,

        /// Units on hand
        #[arg(long)]
        stock: Option<i64>,

        #[arg(long)]
        image_url: Option<String>,

        /// Category name
        #[arg(long)]
        category: Option<String>,

        /// Repeatable tag flag
        #[arg(long = "tag")]
        tags: Vec<String>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Update fields on a product
    Update {
        /// Product ID
        id: ProductId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<Decimal>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        compare_at_price: Option<Decimal>,

        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        stock: Option<i64>,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long = "tag")]
        tags: Vec<String>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
}

pub async fn run(
    client: &ApiClient,
    command: ProductCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ProductCommand::List {
            category,
            active,
            search,
            limit,
            offset,
        } => {
            let filters = ProductFilters {
                category,
                is_active: active,
                search,
                limit,
                offset,
            };
            emit(&client.list_products(&filters).await?)
        }
        ProductCommand::Get { id } => emit(&client.get_product(id).await?),
        ProductCommand::Create {
            name,
            price,
            description,
            compare_at_price,
            sku,
            stock,
            image_url,
            category,
            tags,
            active,
        } => {
            let product = NewProduct {
                name,
                description,
                price,
                compare_at_price,
                sku,
                stock_quantity: stock,
                image_url,
                images: None,
                category,
                tags: if tags.is_empty() { None } else { Some(tags) },
                is_active: active,
            };
            emit(&client.create_product(&product).await?)
        }
        ProductCommand::Update {
            id,
            name,
            price,
            description,
            compare_at_price,
            sku,
            stock,
            image_url,
            category,
            tags,
            active,
        } => {
            let patch = ProductPatch {
                name,
                description,
                price,
                compare_at_price,
                sku,
                stock_quantity: stock,
                image_url,
                images: None,
                category,
                tags: if tags.is_empty() { None } else { Some(tags) },
                is_active: active,
            };
            emit(&client.update_product(id, &patch).await?)
        }
        ProductCommand::Delete { id } => {
            client.delete_product(id).await?;
            tracing::info!("Product {id} deleted");
            Ok(())
        }
    }
}
