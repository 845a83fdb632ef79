//! Document search.

use crate::models::Document;

/// Documents whose title, content or tags contain `query`, ignoring case,
/// in collection order.
///
/// # Examples
///
/// ```rust
/// use trellis_core::{fixture::Fixture, views::search_documents};
///
/// let docs = Fixture::sample().documents;
/// let hits = search_documents(&docs, "MEETING");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "Team Meeting Notes");
/// ```
pub fn search_documents<'a>(documents: &'a [Document], query: &str) -> Vec<&'a Document> {
    documents.iter().filter(|doc| doc.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;

    #[test]
    fn test_empty_query_returns_everything() {
        let docs = Fixture::sample().documents;
        assert_eq!(search_documents(&docs, "").len(), 2);
    }

    #[test]
    fn test_matches_tags_and_content() {
        let docs = Fixture::sample().documents;

        let by_tag = search_documents(&docs, "requirements");
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, "1");

        let by_content = search_documents(&docs, "action items");
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].id, "2");

        assert!(search_documents(&docs, "roadmap").is_empty());
    }
}
