//! Feed run configuration.
//!
//! Two inputs meet here: `FeedOptions` (what the user asked for) and
//! `BuildContext` (what the host build knows). `resolve()` validates the
//! pair and produces the read-only `FeedConfig` the pipeline runs on.
//!
//! # Option defaults
//!
//! | Option                     | Default                          |
//! |----------------------------|----------------------------------|
//! | `rss`                      | enabled, output `/feed.xml`      |
//! | `atom`                     | disabled, output `/feed.atom`    |
//! | `json`                     | disabled, output `/feed.json`    |
//! | `max_items`                | 25 (`0` disables the cap)        |
//! | `html_fields`              | `["description", "content"]`     |
//! | `enforce_trailing_slashes` | `false`                          |
//! | `filter`                   | accept all records               |
//! | `map`                      | `title`/`date`/`content` fields  |

pub mod error;

pub use error::ConfigError;

use crate::content::ContentRecord;
use crate::feed::item::FeedItem;
use crate::feed::metadata::{FeedLinks, FeedMetadata, MetadataOptions};
use crate::url;
use crate::utils::date::FeedDate;
use crate::utils::path::ensure_extension;
use anyhow::anyhow;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Record filter predicate
pub type FilterFn = Arc<dyn Fn(&ContentRecord) -> bool + Send + Sync>;

/// Record to feed item mapping
///
/// Fallible: a mapping error aborts the whole run before anything is
/// written.
pub type MapFn = Arc<dyn Fn(&ContentRecord) -> anyhow::Result<FeedItem> + Send + Sync>;

// ============================================================================
// user options
// ============================================================================

/// Per-format output options
///
/// Unset fields fall back to the format's built-in default; see the module
/// table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub enabled: Option<bool>,
    /// Site-absolute output path (`/feed.xml`). The format's canonical
    /// extension is appended when missing.
    pub output: Option<String>,
}

/// Built-in defaults for one feed format
struct FormatDefaults {
    enabled: bool,
    output: &'static str,
    extension: &'static str,
}

const RSS_DEFAULTS: FormatDefaults = FormatDefaults {
    enabled: true,
    output: "/feed.xml",
    extension: ".xml",
};

const ATOM_DEFAULTS: FormatDefaults = FormatDefaults {
    enabled: false,
    output: "/feed.atom",
    extension: ".atom",
};

const JSON_DEFAULTS: FormatDefaults = FormatDefaults {
    enabled: false,
    output: "/feed.json",
    extension: ".json",
};

/// User-supplied feed options
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    /// Content types to collect records from, in order. Required.
    pub content_types: Vec<String>,
    pub rss: FormatOptions,
    pub atom: FormatOptions,
    pub json: FormatOptions,
    /// Cap on the final item list. `0` disables the cap.
    pub max_items: Option<usize>,
    /// Item fields whose HTML gets relative links rewritten.
    pub html_fields: Vec<String>,
    /// Append `/` to page URLs that lack one.
    pub enforce_trailing_slashes: bool,
    /// Channel metadata overrides.
    pub metadata: MetadataOptions,
    /// Record filter, applied before mapping.
    #[serde(skip, default = "default_filter")]
    pub filter: FilterFn,
    /// Record to item mapping.
    #[serde(skip, default = "default_map")]
    pub map: MapFn,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            content_types: Vec::new(),
            rss: FormatOptions::default(),
            atom: FormatOptions::default(),
            json: FormatOptions::default(),
            max_items: Some(25),
            html_fields: vec!["description".to_string(), "content".to_string()],
            enforce_trailing_slashes: false,
            metadata: MetadataOptions::default(),
            filter: default_filter(),
            map: default_map(),
        }
    }
}

fn default_filter() -> FilterFn {
    Arc::new(|_| true)
}

/// Default mapping: `title`, `date` and `content` fields of the record.
///
/// A missing or unparseable `date` is an error naming the record, so data
/// bugs surface at build time instead of producing a feed with wrong
/// ordering.
fn default_map() -> MapFn {
    Arc::new(|record| {
        let date_field = record
            .str_field("date")
            .ok_or_else(|| anyhow!("record `{}` is missing a `date` field", record.path))?;
        let date = FeedDate::parse(date_field).ok_or_else(|| {
            anyhow!(
                "record `{}` has an unparseable `date` field: `{date_field}`",
                record.path
            )
        })?;

        let mut item = FeedItem::new(record.str_field("title").unwrap_or_default(), date);
        item.content = record.str_field("content").map(str::to_string);
        Ok(item)
    })
}

// ============================================================================
// build context
// ============================================================================

/// Host build configuration the feed run needs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildContext {
    /// Canonical site URL (`https://example.com`). Required.
    pub site_url: Option<String>,
    /// URL prefix for subdirectory deployments (`/docs`). `/` means none.
    pub path_prefix: String,
    /// Site title, the default feed title.
    pub site_name: String,
    /// Directory rendered output lands in; feeds are written under it.
    pub out_dir: PathBuf,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            site_url: None,
            path_prefix: "/".to_string(),
            site_name: String::new(),
            out_dir: PathBuf::from("dist"),
        }
    }
}

// ============================================================================
// resolved configuration
// ============================================================================

/// One format's resolved output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOutput {
    /// Site-absolute output path with canonical extension (`/feed.xml`).
    pub output: String,
    /// Absolute self URL of the document.
    pub link: String,
}

/// Resolved, read-only settings for one feed run
#[derive(Clone)]
pub struct FeedConfig {
    pub content_types: Vec<String>,
    pub site_url: String,
    /// Normalized prefix: empty when the site lives at the domain root.
    pub path_prefix: String,
    pub out_dir: PathBuf,
    /// `None` means unbounded.
    pub max_items: Option<usize>,
    pub html_fields: Vec<String>,
    pub enforce_trailing_slashes: bool,
    pub rss: Option<FeedOutput>,
    pub atom: Option<FeedOutput>,
    pub json: Option<FeedOutput>,
    pub metadata: FeedMetadata,
    pub filter: FilterFn,
    pub map: MapFn,
}

/// Validate options against the build context and derive the run settings
///
/// Fails before anything is written: missing site URL, missing content
/// types and an unparseable site URL are all fatal here.
pub fn resolve(options: FeedOptions, context: &BuildContext) -> Result<FeedConfig, ConfigError> {
    let site_url = match context.site_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(ConfigError::MissingSiteUrl),
    };
    if options.content_types.is_empty() {
        return Err(ConfigError::MissingContentTypes);
    }

    let path_prefix = if context.path_prefix == "/" {
        String::new()
    } else {
        context.path_prefix.clone()
    };
    let enforce = options.enforce_trailing_slashes;
    let site_href = url::resolve(&path_prefix, &site_url, enforce)?;

    let rss = resolve_format(&options.rss, &RSS_DEFAULTS, &path_prefix, &site_url, enforce)?;
    let atom = resolve_format(&options.atom, &ATOM_DEFAULTS, &path_prefix, &site_url, enforce)?;
    let json = resolve_format(&options.json, &JSON_DEFAULTS, &path_prefix, &site_url, enforce)?;

    let feed_links = FeedLinks {
        rss: rss.as_ref().map(|f| f.link.clone()),
        atom: atom.as_ref().map(|f| f.link.clone()),
        json: json.as_ref().map(|f| f.link.clone()),
    };
    let metadata = options
        .metadata
        .resolve(&site_href, &context.site_name, feed_links);

    Ok(FeedConfig {
        content_types: options.content_types,
        site_url,
        path_prefix,
        out_dir: context.out_dir.clone(),
        max_items: options.max_items.filter(|&max| max > 0),
        html_fields: options.html_fields,
        enforce_trailing_slashes: enforce,
        rss,
        atom,
        json,
        metadata,
        filter: options.filter,
        map: options.map,
    })
}

/// Resolve one format: output path with canonical extension plus its
/// absolute self URL. `None` when the format is disabled.
fn resolve_format(
    options: &FormatOptions,
    defaults: &FormatDefaults,
    path_prefix: &str,
    site_url: &str,
    enforce: bool,
) -> Result<Option<FeedOutput>, ConfigError> {
    if !options.enabled.unwrap_or(defaults.enabled) {
        return Ok(None);
    }

    let configured = options.output.as_deref().unwrap_or(defaults.output);
    let output = ensure_extension(configured, defaults.extension);
    let link = url::resolve(&format!("{path_prefix}{output}"), site_url, enforce)?;

    Ok(Some(FeedOutput { output, link }))
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse options with the minimal required `content_types` preset.
#[cfg(test)]
pub fn test_parse_options(extra: &str) -> FeedOptions {
    let toml = format!("content_types = [\"Post\"]\n{extra}");
    toml::from_str(&toml).unwrap()
}

/// Build context for a site at the domain root.
#[cfg(test)]
pub fn test_context() -> BuildContext {
    BuildContext {
        site_url: Some("https://example.com".to_string()),
        path_prefix: "/".to_string(),
        site_name: "Test Site".to_string(),
        out_dir: PathBuf::from("dist"),
    }
}

// ============================================================================
// tests
// ============================================================================
