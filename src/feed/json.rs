//! JSON Feed 1.1 generation.
//!
//! The format has no ecosystem counterpart to the `rss` and
//! `atom_syndication` builders, so the document is modelled directly as
//! serde structs.

use super::item::{FeedItem, FeedPerson};
use super::metadata::FeedMetadata;
use anyhow::{Context, Result};
use serde::Serialize;

const JSONFEED_VERSION: &str = "https://jsonfeed.org/version/1.1";

#[derive(Debug, Serialize)]
struct JsonFeed {
    version: &'static str,
    title: String,
    home_page_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    feed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authors: Option<Vec<JsonAuthor>>,
    items: Vec<JsonItem>,
}

#[derive(Debug, Serialize)]
struct JsonItem {
    id: String,
    url: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    date_published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    authors: Option<Vec<JsonAuthor>>,
}

#[derive(Debug, Serialize)]
struct JsonAuthor {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

/// Render the JSON Feed 1.1 document, pretty-printed
pub(crate) fn render(metadata: &FeedMetadata, items: &[FeedItem]) -> Result<String> {
    let feed = JsonFeed {
        version: JSONFEED_VERSION,
        title: metadata.title.clone(),
        home_page_url: metadata.link.clone(),
        feed_url: metadata.feed_links.json.clone(),
        description: metadata.description.clone(),
        language: metadata.language.clone(),
        authors: metadata.author.as_ref().map(|person| vec![person_to_json(person)]),
        items: items.iter().map(item_to_json).collect(),
    };

    serde_json::to_string_pretty(&feed).context("failed to serialize JSON feed")
}

fn item_to_json(item: &FeedItem) -> JsonItem {
    JsonItem {
        id: item.id.clone(),
        url: item.link.clone(),
        title: item.title.clone(),
        content_html: item.content.clone(),
        summary: item.description.clone(),
        date_published: item.date.to_rfc3339(),
        authors: item.author.as_ref().map(|person| vec![person_to_json(person)]),
    }
}

fn person_to_json(person: &FeedPerson) -> JsonAuthor {
    JsonAuthor {
        name: person.name.clone(),
        url: person.link.clone(),
    }
}
