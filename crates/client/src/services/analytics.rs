//! Reporting endpoints.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::instrument;
use url::form_urlencoded;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::DashboardStats;

/// Optional reporting window for revenue and sales queries.
///
/// Serializes to `startDate`/`endDate` query parameters in `YYYY-MM-DD`
/// form; an empty range queries the backend's default window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    /// Render as a `?`-prefixed query string, or empty when nothing is set.
    #[must_use]
    pub fn query(&self) -> String {
        let mut pairs = form_urlencoded::Serializer::new(String::new());
        if let Some(start) = self.start_date {
            pairs.append_pair("startDate", &start.to_string());
        }
        if let Some(end) = self.end_date {
            pairs.append_pair("endDate", &end.to_string());
        }

        let encoded = pairs.finish();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{encoded}")
        }
    }
}

impl ApiClient {
    /// Fetch the dashboard aggregates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/analytics/dashboard").await
    }

    /// Fetch the revenue report for a window.
    ///
    /// The report shape varies with the backend's reporting queries, so the
    /// document is returned untyped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn revenue(&self, range: &DateRange) -> Result<Value, ApiError> {
        self.get(&format!("/analytics/revenue{}", range.query()))
            .await
    }

    /// Fetch the sales report for a window. Untyped, like [`Self::revenue`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn sales_report(&self, range: &DateRange) -> Result<Value, ApiError> {
        self.get(&format!("/analytics/sales{}", range.query())).await
    }
}
