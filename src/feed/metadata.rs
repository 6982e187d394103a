//! Channel-level feed metadata.

use super::item::FeedPerson;
use serde::Deserialize;

/// Generator string stamped into every feed document
pub const GENERATOR: &str = "feedgen";

/// Self URLs of the enabled feed documents
///
/// Always recomputed from the resolved output paths; user metadata cannot
/// override these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedLinks {
    pub rss: Option<String>,
    pub atom: Option<String>,
    pub json: Option<String>,
}

/// User-supplied channel metadata overrides
///
/// Set fields win over the derived defaults (site name as title, site href
/// as id and link).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub link: Option<String>,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub generator: Option<String>,
    pub author: Option<FeedPerson>,
}

impl MetadataOptions {
    /// Merge over the derived defaults into the final channel metadata.
    pub(crate) fn resolve(
        self,
        site_href: &str,
        site_name: &str,
        feed_links: FeedLinks,
    ) -> FeedMetadata {
        FeedMetadata {
            title: self.title.unwrap_or_else(|| site_name.to_string()),
            description: self.description,
            id: self.id.unwrap_or_else(|| site_href.to_string()),
            link: self.link.unwrap_or_else(|| site_href.to_string()),
            language: self.language,
            copyright: self.copyright,
            generator: self.generator.unwrap_or_else(|| GENERATOR.to_string()),
            author: self.author,
            feed_links,
        }
    }
}

/// Resolved channel-level metadata shared by all serializers
#[derive(Debug, Clone)]
pub struct FeedMetadata {
    pub title: String,
    pub description: Option<String>,
    /// Canonical identifier, the site href unless overridden.
    pub id: String,
    /// Home page the feed points back to.
    pub link: String,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub generator: String,
    pub author: Option<FeedPerson>,
    pub feed_links: FeedLinks,
}
