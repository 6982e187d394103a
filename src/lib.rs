//! Feedgen - Build-time syndication feed generation for static sites.
//!
//! Generates RSS 2.0, Atom 1.0 and JSON Feed 1.1 documents from the
//! content collections of a site build. One pipeline run collects records,
//! shapes them into feed items and writes every enabled format under the
//! output directory.
//!
//! # Example
//!
//! ```no_run
//! use feedgen::{BuildContext, ContentRecord, FeedOptions, MemoryStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut store = MemoryStore::new();
//! store.insert(
//!     "Post",
//!     vec![
//!         ContentRecord::new("/post/hello/")
//!             .with_field("title", "Hello")
//!             .with_field("date", "2024-01-15"),
//!     ],
//! );
//!
//! let context = BuildContext {
//!     site_url: Some("https://example.com".to_string()),
//!     site_name: "My Site".to_string(),
//!     ..Default::default()
//! };
//! let options = FeedOptions {
//!     content_types: vec!["Post".to_string()],
//!     ..Default::default()
//! };
//!
//! let config = feedgen::resolve(options, &context)?;
//! feedgen::generate(&config, &store)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod feed;
pub mod logger;
pub mod url;
pub mod utils;

pub use config::{
    BuildContext, ConfigError, FeedConfig, FeedOptions, FilterFn, FormatOptions, MapFn, resolve,
};
pub use content::{Collection, ContentRecord, ContentStore, MemoryStore};
pub use feed::{
    FeedDocuments, FeedItem, FeedLinks, FeedMetadata, FeedPerson, MetadataOptions, generate,
};
pub use url::InvalidUrlError;
pub use utils::date::FeedDate;
