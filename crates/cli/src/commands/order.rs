//! Order commands.

use clap::Subcommand;
use marigold_client::ApiClient;
use marigold_core::{OrderId, OrderStatus};

use super::emit;

#[derive(Subcommand)]
pub enum OrderCommand {
    /// List orders
    List,
    /// Show one order with its line items
    Get {
        /// Order ID
        id: OrderId,
    },
    /// Move an order to a new status
    SetStatus {
        /// Order ID
        id: OrderId,

        /// One of: pending, processing, shipped, delivered, cancelled
        status: OrderStatus,
    },
}

pub async fn run(
    client: &ApiClient,
    command: OrderCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        OrderCommand::List => emit(&client.list_orders().await?),
        OrderCommand::Get { id } => emit(&client.get_order(id).await?),
        OrderCommand::SetStatus { id, status } => {
            let order = client.update_order_status(id, status).await?;
            tracing::info!("Order {id} is now {status}");
            emit(&order)
        }
    }
}
