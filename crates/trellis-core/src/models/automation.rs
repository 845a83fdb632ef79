//! Automation model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A named trigger/action pairing.
///
/// Only `is_active` changes after creation, via the toggle action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Description of the event that fires the automation
    pub trigger: String,
    /// Description of what the automation does
    pub action: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<Timestamp>,
    #[serde(default)]
    pub run_count: u32,
}
