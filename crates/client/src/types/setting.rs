//! Settings wire types.

use chrono::{DateTime, Utc};
use marigold_core::SettingId;
use serde::{Deserialize, Serialize};

/// A key/value settings row.
///
/// Values are opaque JSON documents; the backend does not interpret them and
/// neither does the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub id: SettingId,
    pub key: String,
    pub value: serde_json::Value,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
