use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Row of the review list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub id: i64,
    pub username: String,
    pub content: String,
    #[serde(default)]
    pub rating: Option<u8>,
    pub created: NaiveDateTime,
}

/// Body for creating a review from the console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateRequest {
    pub username: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}
