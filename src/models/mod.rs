pub mod bot;
pub mod dialog;
pub mod message;
pub mod project;
pub mod system;
pub mod task;
pub mod user;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a list endpoint's results.
///
/// `per_page` and `to` arrive as either an integer or a string depending on
/// the endpoint, so they stay as raw JSON values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub per_page: Value,
    #[serde(default)]
    pub prev_page_url: Option<String>,
    #[serde(default)]
    pub to: Value,
    #[serde(default)]
    pub total: i64,
}
