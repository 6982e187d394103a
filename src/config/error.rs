//! Feed configuration error types.

use crate::url::InvalidUrlError;
use thiserror::Error;

/// Configuration-related errors
///
/// All fatal: resolution happens before any feed output is produced, so a
/// failing run writes nothing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("feed generation is missing the required site URL")]
    MissingSiteUrl,

    #[error("feed generation is missing the required `content_types` setting")]
    MissingContentTypes,

    #[error("invalid site URL")]
    InvalidSiteUrl(#[from] InvalidUrlError),
}
