//! Absolute URL resolution for feed output.
//!
//! Feed readers resolve nothing for us: every item link, feed link and
//! rewritten reference must be an absolute URL. This module provides:
//! - `resolve()` - WHATWG resolution against the site base URL
//! - `rewrite` - relative `href`/`src` rewriting inside HTML fragments

pub mod rewrite;

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

pub use rewrite::rewrite_links;

/// Paths ending in a short file extension (`.xml`, `.png`, `.html`) keep
/// their shape when trailing slashes are enforced.
static RE_FILE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[A-Za-z]{1,4}$").unwrap());

// ============================================================================
// InvalidUrlError
// ============================================================================

/// URL resolution failure
///
/// Carries the offending input; fatal for the whole feed run.
#[derive(Debug, Error)]
#[error("invalid URL `{input}`")]
pub struct InvalidUrlError {
    /// The string that failed to parse or join
    pub input: String,
    #[source]
    pub source: url::ParseError,
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve a path (or full URL) against a base URL
///
/// Uses WHATWG resolution: the scheme and host come from the base, `.` and
/// `..` segments are collapsed, query and fragment of the input are kept.
/// An absolute input replaces the base entirely.
///
/// With `enforce_trailing_slash`, a `/` is appended to the path component
/// unless it already ends with one or looks like a file (short extension).
/// Query and fragment are never touched by enforcement.
///
/// # Examples
/// ```
/// use feedgen::url::resolve;
/// let url = resolve("/about", "https://example.com", false).unwrap();
/// assert_eq!(url, "https://example.com/about");
///
/// let url = resolve("/about", "https://example.com", true).unwrap();
/// assert_eq!(url, "https://example.com/about/");
/// ```
pub fn resolve(
    path_or_url: &str,
    base_url: &str,
    enforce_trailing_slash: bool,
) -> Result<String, InvalidUrlError> {
    let base = Url::parse(base_url).map_err(|source| InvalidUrlError {
        input: base_url.to_string(),
        source,
    })?;
    let mut resolved = base.join(path_or_url).map_err(|source| InvalidUrlError {
        input: path_or_url.to_string(),
        source,
    })?;

    if enforce_trailing_slash && needs_trailing_slash(resolved.path()) {
        let slashed = format!("{}/", resolved.path());
        resolved.set_path(&slashed);
    }

    Ok(resolved.into())
}

/// Check whether enforcement should append a slash to this path
#[inline]
fn needs_trailing_slash(path: &str) -> bool {
    !path.ends_with('/') && !RE_FILE_EXTENSION.is_match(path)
}
