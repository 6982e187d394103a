//! Atom 1.0 feed generation.

use super::item::{FeedItem, FeedPerson};
use super::metadata::FeedMetadata;
use crate::utils::date::FeedDate;
use anyhow::Result;
use atom_syndication::{
    Content, ContentBuilder, Entry, EntryBuilder, Feed, FeedBuilder, GeneratorBuilder, Link,
    LinkBuilder, Person, PersonBuilder, Text,
};

/// Render the Atom 1.0 document
///
/// The feed `updated` element is the newest item date, falling back to the
/// Unix epoch for an empty feed.
pub(crate) fn render(metadata: &FeedMetadata, items: &[FeedItem]) -> Result<String> {
    let entries: Vec<Entry> = items.iter().map(item_to_atom_entry).collect();

    let updated = items
        .iter()
        .map(|i| i.date)
        .max()
        .unwrap_or_else(FeedDate::epoch);

    let mut links: Vec<Link> = Vec::new();
    if let Some(href) = &metadata.feed_links.atom {
        links.push(
            LinkBuilder::default()
                .href(href)
                .rel("self".to_string())
                .mime_type(Some("application/atom+xml".to_string()))
                .build(),
        );
    }
    links.push(
        LinkBuilder::default()
            .href(&metadata.link)
            .rel("alternate".to_string())
            .build(),
    );

    let authors: Vec<Person> = metadata
        .author
        .as_ref()
        .map(|person| vec![person_to_atom(person)])
        .unwrap_or_default();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(metadata.title.clone()))
        .id(&metadata.id)
        .updated(updated.datetime())
        .authors(authors)
        .links(links)
        .subtitle(metadata.description.clone().map(Text::plain))
        .rights(metadata.copyright.clone().map(Text::plain))
        .generator(Some(
            GeneratorBuilder::default()
                .value(metadata.generator.clone())
                .build(),
        ))
        .lang(metadata.language.clone())
        .entries(entries)
        .build();

    Ok(feed.to_string())
}

fn item_to_atom_entry(item: &FeedItem) -> Entry {
    let entry_link: Link = LinkBuilder::default()
        .href(&item.link)
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = item
        .author
        .as_ref()
        .map(|person| vec![person_to_atom(person)])
        .unwrap_or_default();

    let content: Option<Content> = item.content.clone().map(|html| {
        ContentBuilder::default()
            .value(Some(html))
            .content_type(Some("html".to_string()))
            .build()
    });

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(&item.id)
        .updated(item.date.datetime())
        .links(vec![entry_link])
        .summary(item.description.clone().map(Text::plain))
        .content(content)
        .authors(authors)
        .build()
}

fn person_to_atom(person: &FeedPerson) -> Person {
    PersonBuilder::default()
        .name(person.name.clone())
        .email(person.email.clone())
        .uri(person.link.clone())
        .build()
}
