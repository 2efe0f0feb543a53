//! Reporting commands.

use chrono::NaiveDate;
use clap::Subcommand;
use marigold_client::services::DateRange;
use marigold_client::ApiClient;
use marigold_core::Price;

use super::emit;

#[derive(Subcommand)]
pub enum AnalyticsCommand {
    /// Dashboard aggregates
    Dashboard,
    /// Revenue report
    Revenue {
        /// Window start, YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Window end, YYYY-MM-DD
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Sales report
    Sales {
        /// Window start, YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Window end, YYYY-MM-DD
        #[arg(long)]
        end: Option<NaiveDate>,
    },
}

pub async fn run(
    client: &ApiClient,
    command: AnalyticsCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        AnalyticsCommand::Dashboard => {
            let stats = client.dashboard_stats().await?;
            tracing::info!(
                "{} revenue over {} orders (avg {})",
                Price::new(stats.total_revenue),
                stats.total_orders,
                Price::new(stats.average_order_value)
            );
            emit(&stats)
        }
        AnalyticsCommand::Revenue { start, end } => {
            let range = DateRange {
                start_date: start,
                end_date: end,
            };
            emit(&client.revenue(&range).await?)
        }
        AnalyticsCommand::Sales { start, end } => {
            let range = DateRange {
                start_date: start,
                end_date: end,
            };
            emit(&client.sales_report(&range).await?)
        }
    }
}
