//! Payment commands.

use clap::Subcommand;
use marigold_client::ApiClient;
use marigold_core::{OrderId, PaymentId};

use super::emit;

#[derive(Subcommand)]
pub enum PaymentCommand {
    /// List payments
    List,
    /// Show one payment
    Get {
        /// Payment ID
        id: PaymentId,
    },
    /// List the payments recorded against an order
    ForOrder {
        /// Order ID
        order_id: OrderId,
    },
}

pub async fn run(
    client: &ApiClient,
    command: PaymentCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        PaymentCommand::List => emit(&client.list_payments().await?),
        PaymentCommand::Get { id } => emit(&client.get_payment(id).await?),
        PaymentCommand::ForOrder { order_id } => {
            emit(&client.payments_for_order(order_id).await?)
        }
    }
}
