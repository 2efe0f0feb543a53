//! Key/value settings pass-through.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::Setting;

/// `GET /settings/:key` answers `{ key, value }`, not a full row.
#[derive(Deserialize)]
struct SettingValue {
    value: Value,
}

#[derive(Serialize)]
struct SettingUpdate<'a> {
    value: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl ApiClient {
    /// List all settings rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_settings(&self) -> Result<Vec<Setting>, ApiError> {
        self.get("/settings").await
    }

    /// Fetch one setting's value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the key does not exist.
    #[instrument(skip(self))]
    pub async fn get_setting(&self, key: &str) -> Result<Value, ApiError> {
        let body: SettingValue = self.get(&format!("/settings/{key}")).await?;
        Ok(body.value)
    }

    /// Create or replace a setting's value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, value, description))]
    pub async fn put_setting(
        &self,
        key: &str,
        value: &Value,
        description: Option<&str>,
    ) -> Result<Setting, ApiError> {
        self.put(
            &format!("/settings/{key}"),
            &SettingUpdate { value, description },
        )
        .await
    }

    /// Delete a setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the key does not exist.
    #[instrument(skip(self))]
    pub async fn delete_setting(&self, key: &str) -> Result<(), ApiError> {
        let _: Value = self.delete(&format!("/settings/{key}")).await?;
        Ok(())
    }
}
