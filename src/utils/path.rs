//! Output path utilities.
//!
//! Provides consistent handling of configured feed output paths:
//! - Extension normalization per feed format
//! - Safe joining under the build output directory

use std::path::{Path, PathBuf};

/// Ensure a configured output path carries the given extension
///
/// Paths that already end with the extension are returned unchanged. A
/// trailing slash is replaced by the extension so `/feed/` and `/feed`
/// normalize to the same file.
///
/// # Examples
/// ```
/// use feedgen::utils::path::ensure_extension;
/// assert_eq!(ensure_extension("/feed.xml", ".xml"), "/feed.xml");
/// assert_eq!(ensure_extension("/feed", ".xml"), "/feed.xml");
/// assert_eq!(ensure_extension("/feed/", ".xml"), "/feed.xml");
/// ```
#[inline]
pub fn ensure_extension(path: &str, extension: &str) -> String {
    if path.ends_with(extension) {
        return path.to_string();
    }
    if let Some(stripped) = path.strip_suffix('/') {
        return format!("{stripped}{extension}");
    }
    format!("{path}{extension}")
}

/// Resolve a configured output path to a file under the output directory
///
/// Output paths are site-absolute by convention (`/feed.xml`); the leading
/// slash is stripped so the join stays inside `out_dir`.
///
/// # Examples
/// ```
/// use feedgen::utils::path::output_file;
/// use std::path::Path;
/// assert_eq!(
///     output_file(Path::new("dist"), "/feed.xml"),
///     Path::new("dist").join("feed.xml")
/// );
/// ```
#[inline]
pub fn output_file(out_dir: &Path, output: &str) -> PathBuf {
    out_dir.join(output.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_extension_already_present() {
        assert_eq!(ensure_extension("/feed.xml", ".xml"), "/feed.xml");
        assert_eq!(ensure_extension("/feed.atom", ".atom"), "/feed.atom");
    }

    #[test]
    fn test_ensure_extension_appends() {
        assert_eq!(ensure_extension("/feed", ".xml"), "/feed.xml");
        assert_eq!(ensure_extension("/rss/articles", ".json"), "/rss/articles.json");
    }

    #[test]
    fn test_ensure_extension_trailing_slash() {
        assert_eq!(ensure_extension("/feed/", ".xml"), "/feed.xml");
        assert_eq!(ensure_extension("/rss/", ".atom"), "/rss.atom");
    }

    #[test]
    fn test_ensure_extension_other_extension_kept() {
        // Only the requested extension is recognized; others get suffixed
        assert_eq!(ensure_extension("/feed.rss", ".xml"), "/feed.rss.xml");
    }

    #[test]
    fn test_ensure_extension_idempotent() {
        let once = ensure_extension("/feed/", ".xml");
        assert_eq!(ensure_extension(&once, ".xml"), once);
    }

    #[test]
    fn test_output_file_strips_leading_slash() {
        let out = Path::new("/tmp/dist");
        assert_eq!(out.join("feed.xml"), output_file(out, "/feed.xml"));
        assert_eq!(out.join("feed.xml"), output_file(out, "feed.xml"));
    }

    #[test]
    fn test_output_file_nested() {
        let out = Path::new("dist");
        assert_eq!(out.join("rss/articles.xml"), output_file(out, "/rss/articles.xml"));
    }
}
