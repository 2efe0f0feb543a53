//! Coupon commands.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use marigold_client::types::{CouponPatch, NewCoupon};
use marigold_client::ApiClient;
use marigold_core::{CouponId, DiscountType, Price};
use rust_decimal::Decimal;

use super::emit;

#[derive(Subcommand)]
pub enum CouponCommand {
    /// List coupons
    List,
    /// Show one coupon
    Get {
        /// Coupon ID
        id: CouponId,
    },
    /// Create a coupon
    Create {
        /// Customer-facing code, e.g. DIWALI20
        #[arg(long)]
        code: String,

        /// "percentage" or "fixed"
        #[arg(long = "type")]
        discount_type: DiscountType,

        /// Percentage (0-100) or fixed INR amount
        #[arg(long)]
        value: Decimal,

        #[arg(long)]
        min_purchase: Option<Decimal>,

        #[arg(long)]
        max_discount: Option<Decimal>,

        #[arg(long)]
        usage_limit: Option<i64>,

        /// RFC 3339 timestamp, e.g. 2026-10-25T00:00:00Z
        #[arg(long)]
        valid_from: DateTime<Utc>,

        /// RFC 3339 timestamp
        #[arg(long)]
        valid_until: DateTime<Utc>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Update fields on a coupon
    Update {
        /// Coupon ID
        id: CouponId,

        #[arg(long)]
        code: Option<String>,

        #[arg(long = "type")]
        discount_type: Option<DiscountType>,

        #[arg(long)]
        value: Option<Decimal>,

        #[arg(long)]
        min_purchase: Option<Decimal>,

        #[arg(long)]
        max_discount: Option<Decimal>,

        #[arg(long)]
        usage_limit: Option<i64>,

        #[arg(long)]
        valid_from: Option<DateTime<Utc>>,

        #[arg(long)]
        valid_until: Option<DateTime<Utc>>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a coupon
    Delete {
        /// Coupon ID
        id: CouponId,
    },
    /// Check a code against an order amount
    Validate {
        /// Customer-facing code
        code: String,

        /// Order amount in INR
        amount: Decimal,
    },
}

pub async fn run(
    client: &ApiClient,
    command: CouponCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        CouponCommand::List => emit(&client.list_coupons().await?),
        CouponCommand::Get { id } => emit(&client.get_coupon(id).await?),
        CouponCommand::Create {
            code,
            discount_type,
            value,
            min_purchase,
            max_discount,
            usage_limit,
            valid_from,
            valid_until,
            active,
        } => {
            let coupon = NewCoupon {
                code,
                discount_type,
                discount_value: value,
                min_purchase_amount: min_purchase,
                max_discount_amount: max_discount,
                usage_limit,
                valid_from,
                valid_until,
                is_active: active,
            };
            emit(&client.create_coupon(&coupon).await?)
        }
        CouponCommand::Update {
            id,
            code,
            discount_type,
            value,
            min_purchase,
            max_discount,
            usage_limit,
            valid_from,
            valid_until,
            active,
        } => {
            let patch = CouponPatch {
                code,
                discount_type,
                discount_value: value,
                min_purchase_amount: min_purchase,
                max_discount_amount: max_discount,
                usage_limit,
                valid_from,
                valid_until,
                is_active: active,
            };
            emit(&client.update_coupon(id, &patch).await?)
        }
        CouponCommand::Delete { id } => {
            client.delete_coupon(id).await?;
            tracing::info!("Coupon {id} deleted");
            Ok(())
        }
        CouponCommand::Validate { code, amount } => {
            let validation = client.validate_coupon(&code, amount).await?;
            if validation.valid {
                tracing::info!(
                    "{code} is valid: {} off an order of {}",
                    Price::new(validation.discount),
                    Price::new(amount)
                );
            } else {
                tracing::warn!(
                    "{code} does not apply: {}",
                    validation.message.as_deref().unwrap_or("no reason given")
                );
            }
            emit(&validation)
        }
    }
}
