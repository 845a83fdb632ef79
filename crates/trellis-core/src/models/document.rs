//! Document model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::User;

/// A piece of project documentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: User,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Distinct tags, in the order they were entered
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_public: bool,
}

impl Document {
    /// Case-insensitive match against title, content or any tag.
    ///
    /// An empty query matches every document.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}
