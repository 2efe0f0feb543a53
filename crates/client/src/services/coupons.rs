//! Coupon CRUD and validation.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use marigold_core::CouponId;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Coupon, CouponPatch, CouponValidation, NewCoupon};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateRequest<'a> {
    code: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    order_amount: Decimal,
}

impl ApiClient {
    /// List all coupons.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_coupons(&self) -> Result<Vec<Coupon>, ApiError> {
        self.get("/coupons").await
    }

    /// Fetch a single coupon by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the coupon does not exist.
    #[instrument(skip(self))]
    pub async fn get_coupon(&self, id: CouponId) -> Result<Coupon, ApiError> {
        self.get(&format!("/coupons/{id}")).await
    }

    /// Create a coupon. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation rejects the
    /// payload (e.g. duplicate code).
    #[instrument(skip(self, coupon), fields(code = %coupon.code))]
    pub async fn create_coupon(&self, coupon: &NewCoupon) -> Result<Coupon, ApiError> {
        self.post("/coupons", coupon).await
    }

    /// Partially update a coupon; only set fields are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or validation rejects the
    /// patch.
    #[instrument(skip(self, patch))]
    pub async fn update_coupon(
        &self,
        id: CouponId,
        patch: &CouponPatch,
    ) -> Result<Coupon, ApiError> {
        self.put(&format!("/coupons/{id}"), patch).await
    }

    /// Delete a coupon permanently.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the coupon does not exist.
    #[instrument(skip(self))]
    pub async fn delete_coupon(&self, id: CouponId) -> Result<(), ApiError> {
        let _: Value = self.delete(&format!("/coupons/{id}")).await?;
        Ok(())
    }

    /// Check whether a code applies to an order of the given amount, and
    /// what discount it would yield.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. An inapplicable code is not an
    /// error - the response carries `valid: false` and a reason.
    #[instrument(skip(self))]
    pub async fn validate_coupon(
        &self,
        code: &str,
        order_amount: Decimal,
    ) -> Result<CouponValidation, ApiError> {
        self.post(
            "/coupons/validate",
            &ValidateRequest { code, order_amount },
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_request_body_shape() {
        let body = serde_json::to_value(ValidateRequest {
            code: "DIWALI20",
            order_amount: "1499.50".parse().unwrap(),
        })
        .unwrap();
        assert_eq!(body, json!({ "code": "DIWALI20", "orderAmount": 1499.5 }));
    }
}
