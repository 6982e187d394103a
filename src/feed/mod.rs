//! Feed generation pipeline.
//!
//! Turns content collections into syndication documents and writes every
//! enabled format under the output directory.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │         Collect Phase (per content type)     │
//! │  collection -> filter -> map -> id/link      │
//! └──────────────────────────────────────────────┘
//!
//! ┌──────────────────────────────────────────────┐
//! │         Shape Phase                          │
//! │  sort newest-first -> cap -> rewrite HTML    │
//! └──────────────────────────────────────────────┘
//!
//! ┌──────────────────────────────────────────────┐
//! │         Serialize Phase (sequential)         │
//! │  RSS 2.0 -> Atom 1.0 -> JSON Feed 1.1        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! - `generate()`: Full pipeline for one configured feed run
//! - HTML rewriting runs on rayon; each item resolves against its own link
//! - The first failing format aborts the remaining ones

mod atom;
mod json;
mod rss;

pub mod item;
pub mod metadata;

pub use item::{FeedItem, FeedPerson};
pub use metadata::{FeedLinks, FeedMetadata, MetadataOptions};

use crate::config::{FeedConfig, FeedOutput};
use crate::content::ContentStore;
use crate::url::rewrite_links;
use crate::utils::path::output_file;
use crate::{debug, log, url};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs;

// =============================================================================
// Types
// =============================================================================

/// Serialized documents of one feed run, keyed by format
///
/// `None` for formats that were not enabled.
#[derive(Debug, Clone, Default)]
pub struct FeedDocuments {
    pub rss: Option<String>,
    pub atom: Option<String>,
    pub json: Option<String>,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Run the feed pipeline: collect, filter, map, sort, cap, rewrite, then
/// serialize and write every enabled format
///
/// Item collection and mapping failures abort the run before any file is
/// touched. Serialization is sequential in RSS, Atom, JSON order; a failed
/// format aborts the remaining ones.
pub fn generate(config: &FeedConfig, store: &dyn ContentStore) -> Result<FeedDocuments> {
    let items = collect_items(config, store)?;
    debug!("feed"; "collected {} feed item(s)", items.len());

    let mut documents = FeedDocuments::default();
    if let Some(output) = &config.rss {
        let document = rss::render(&config.metadata, &items)?;
        write_feed(config, output, &document, "RSS")?;
        documents.rss = Some(document);
    }
    if let Some(output) = &config.atom {
        let document = atom::render(&config.metadata, &items)?;
        write_feed(config, output, &document, "Atom")?;
        documents.atom = Some(document);
    }
    if let Some(output) = &config.json {
        let document = json::render(&config.metadata, &items)?;
        write_feed(config, output, &document, "JSON")?;
        documents.json = Some(document);
    }

    Ok(documents)
}

/// Collect the final item list across all configured content types
///
/// Content types without a collection (or with an empty one) are skipped
/// silently. Items end up newest first; ties keep the content type order
/// and then the collection's source order.
fn collect_items(config: &FeedConfig, store: &dyn ContentStore) -> Result<Vec<FeedItem>> {
    let mut items = Vec::new();

    for content_type in &config.content_types {
        let Some(collection) = store.get_collection(content_type) else {
            continue;
        };
        if collection.is_empty() {
            continue;
        }

        for record in collection.records.iter().filter(|r| (config.filter)(r)) {
            let mut item = (config.map)(record)?;
            // The canonical page URL wins over whatever the mapping set
            item.id = url::resolve(
                &format!("{}{}", config.path_prefix, record.path),
                &config.site_url,
                config.enforce_trailing_slashes,
            )?;
            item.link = item.id.clone();
            items.push(item);
        }
    }

    // Stable sort: equal dates keep collection order
    items.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(max) = config.max_items {
        items.truncate(max);
    }

    rewrite_html_fields(config, &mut items)?;
    Ok(items)
}

/// Rewrite relative links in the configured HTML fields, each item against
/// its own page URL
fn rewrite_html_fields(config: &FeedConfig, items: &mut [FeedItem]) -> Result<()> {
    if config.html_fields.is_empty() {
        return Ok(());
    }

    items.par_iter_mut().try_for_each(|item| {
        let base = item.link.clone();
        for field in &config.html_fields {
            let Some(html) = item.html_field_mut(field) else {
                continue;
            };
            let rewritten = match rewrite_links(html, &base, config.enforce_trailing_slashes)? {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = rewritten {
                *html = rewritten;
            }
        }
        Ok(())
    })
}

/// Write one serialized document under the output directory and log it
fn write_feed(
    config: &FeedConfig,
    output: &FeedOutput,
    document: &str,
    format_name: &str,
) -> Result<()> {
    let path = output_file(&config.out_dir, &output.output);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, document)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log!("feed"; "Generate {format_name} feed at {}", output.output);
    Ok(())
}
