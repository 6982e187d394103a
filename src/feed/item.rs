//! Feed item model shared by all serializers.

use crate::utils::date::FeedDate;
use serde::{Deserialize, Serialize};

/// A single feed entry, format-agnostic
///
/// Produced by the mapping function, finished by the pipeline: `id` and
/// `link` are assigned there from the record's path, overwriting anything
/// the mapping set.
#[derive(Debug, Clone)]
pub struct FeedItem {
    /// Canonical absolute URL of the entry (assigned by the pipeline).
    pub id: String,
    /// Same as `id`.
    pub link: String,
    pub title: String,
    /// Publication instant; drives the global sort and the channel
    /// `updated`/`lastBuildDate` values.
    pub date: FeedDate,
    /// Short HTML summary.
    pub description: Option<String>,
    /// Full HTML body.
    pub content: Option<String>,
    pub author: Option<FeedPerson>,
}

impl FeedItem {
    pub fn new(title: impl Into<String>, date: FeedDate) -> Self {
        Self {
            id: String::new(),
            link: String::new(),
            title: title.into(),
            date,
            description: None,
            content: None,
            author: None,
        }
    }

    /// Set the HTML summary, builder style.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the HTML body, builder style.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the author, builder style.
    #[must_use]
    pub fn with_author(mut self, author: FeedPerson) -> Self {
        self.author = Some(author);
        self
    }

    /// Mutable access to an HTML-bearing field by configured name.
    ///
    /// Returns `None` for unknown names and for fields that are unset or
    /// empty, so callers can rewrite whatever comes back.
    pub(crate) fn html_field_mut(&mut self, name: &str) -> Option<&mut String> {
        let field = match name {
            "description" => self.description.as_mut(),
            "content" => self.content.as_mut(),
            _ => None,
        }?;
        if field.is_empty() {
            return None;
        }
        Some(field)
    }
}

/// Author of a feed or a single item
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedPerson {
    pub name: String,
    pub email: Option<String>,
    /// Home page of the author.
    pub link: Option<String>,
}

impl FeedPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            link: None,
        }
    }

    /// Set the email address, builder style.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item() -> FeedItem {
        FeedItem::new("Hello", FeedDate::parse("2024-01-15").unwrap())
    }

    #[test]
    fn test_html_field_mut_by_name() {
        let mut item = make_item()
            .with_description("<p>summary</p>")
            .with_content("<p>body</p>");

        assert_eq!(
            item.html_field_mut("description").map(|s| s.as_str()),
            Some("<p>summary</p>")
        );
        assert_eq!(
            item.html_field_mut("content").map(|s| s.as_str()),
            Some("<p>body</p>")
        );
    }

    #[test]
    fn test_html_field_mut_unknown_name() {
        let mut item = make_item().with_content("<p>body</p>");
        assert!(item.html_field_mut("title").is_none());
        assert!(item.html_field_mut("").is_none());
    }

    #[test]
    fn test_html_field_mut_skips_unset_and_empty() {
        let mut item = make_item().with_description("");
        assert!(item.html_field_mut("description").is_none()); // empty
        assert!(item.html_field_mut("content").is_none()); // unset
    }

    #[test]
    fn test_person_builder() {
        let person = FeedPerson::new("Jane Doe").with_email("jane@example.com");
        assert_eq!(person.name, "Jane Doe");
        assert_eq!(person.email.as_deref(), Some("jane@example.com"));
        assert_eq!(person.link, None);
    }
}
