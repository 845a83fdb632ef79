//! Workspace model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Color, User};

/// A named grouping of users collaborating together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub color: Color,
    #[serde(default)]
    pub members: Vec<User>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub is_default: bool,
}
