//! RSS 2.0 document generation.

use super::item::{FeedItem, FeedPerson};
use super::metadata::FeedMetadata;
use crate::utils::date::FeedDate;
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

/// Render the RSS 2.0 document
///
/// `lastBuildDate` is the newest item date, never the wall clock, so the
/// same input produces the same bytes on every run.
pub(crate) fn render(metadata: &FeedMetadata, items: &[FeedItem]) -> Result<String> {
    let rss_items: Vec<rss::Item> = items
        .iter()
        .map(|item| item_to_rss(item, metadata.author.as_ref()))
        .collect();

    let last_build_date = items.iter().map(|i| i.date).max().map(FeedDate::to_rfc2822);

    let channel = ChannelBuilder::default()
        .title(&metadata.title)
        .link(&metadata.link)
        .description(metadata.description.clone().unwrap_or_default())
        .language(metadata.language.clone())
        .copyright(metadata.copyright.clone())
        .generator(Some(metadata.generator.clone()))
        .last_build_date(last_build_date)
        .items(rss_items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn item_to_rss(item: &FeedItem, channel_author: Option<&FeedPerson>) -> rss::Item {
    let author = normalize_rss_author(item.author.as_ref(), channel_author);

    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(item.link.clone()))
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(item.id.clone())
                .build(),
        )
        .description(item.description.clone())
        .content(item.content.clone())
        .pub_date(item.date.to_rfc2822())
        .author(author)
        .build()
}

/// Format an author in RSS form: `email (Name)`
///
/// RSS authors require an email address; a person without one yields
/// `None`.
fn format_rss_author(person: &FeedPerson) -> Option<String> {
    let email = person.email.as_deref()?;
    if person.name.is_empty() {
        return Some(email.to_string());
    }
    Some(format!("{} ({})", email, person.name))
}

/// Pick the item author in RSS form, falling back to the channel author
fn normalize_rss_author(
    item_author: Option<&FeedPerson>,
    channel_author: Option<&FeedPerson>,
) -> Option<String> {
    item_author
        .and_then(format_rss_author)
        .or_else(|| channel_author.and_then(format_rss_author))
}
