//! Relative link rewriting for HTML feed content.
//!
//! Feed readers display item HTML far away from the site, so relative
//! `href`/`src` references break. This module rewrites them to absolute
//! URLs against the item's own link.
//!
//! Deliberately conservative: plain regex over quoted attribute values
//! that are explicitly relative (`/...`, `./...`, `../...`), no HTML
//! parsing. Protocol-relative (`//host/...`), absolute, `mailto:` and
//! fragment references pass through untouched.

use super::{InvalidUrlError, resolve};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches `href`/`src` attributes with quoted, explicitly relative values.
///
/// Group 1: attribute name, group 2: double-quoted value, group 3:
/// single-quoted value. A single leading `/` must not be followed by
/// another `/`, which keeps protocol-relative references out. The name
/// classes are spelled out per character: this build of `regex` has no
/// `unicode-case`, so `(?i)` does not compile.
static RE_RELATIVE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([hH][rR][eE][fF]|[sS][rR][cC])=(?:"(\.{1,2}/[^"]*|/(?:[^/"][^"]*)?)"|'(\.{1,2}/[^']*|/(?:[^/'][^']*)?)')"#,
    )
    .unwrap()
});

/// Rewrite relative `href`/`src` values in an HTML fragment to absolute URLs
///
/// Attribute casing and quote style are preserved; only the value between
/// the quotes is replaced. Returns the input unchanged (borrowed, no
/// allocation) when nothing matches.
pub fn rewrite_links<'a>(
    html: &'a str,
    base_url: &str,
    enforce_trailing_slash: bool,
) -> Result<Cow<'a, str>, InvalidUrlError> {
    if !RE_RELATIVE_REF.is_match(html) {
        return Ok(Cow::Borrowed(html));
    }

    let mut out = String::with_capacity(html.len() + 64);
    let mut last = 0;
    for caps in RE_RELATIVE_REF.captures_iter(html) {
        let Some(value) = caps.get(2).or_else(|| caps.get(3)) else {
            continue;
        };
        let absolute = resolve(value.as_str(), base_url, enforce_trailing_slash)?;
        out.push_str(&html[last..value.start()]);
        out.push_str(&absolute);
        last = value.end();
    }
    out.push_str(&html[last..]);

    Ok(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/post/hello/";

    #[test]
    fn test_rewrite_root_relative_href() {
        let html = r#"<a href="/about">About</a>"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, r#"<a href="https://example.com/about">About</a>"#);
    }

    #[test]
    fn test_rewrite_single_quoted_src() {
        let html = "<img src='/img/logo.png'>";
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, "<img src='https://example.com/img/logo.png'>");
    }

    #[test]
    fn test_rewrite_dot_relative() {
        let html = r#"<img src="./pic.png"><img src="../other.png">"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(
            out,
            r#"<img src="https://example.com/post/hello/pic.png"><img src="https://example.com/post/other.png">"#
        );
    }

    #[test]
    fn test_rewrite_preserves_attribute_case() {
        let html = r#"<a HREF="/about">About</a>"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, r#"<a HREF="https://example.com/about">About</a>"#);

        let html = "<img Src='./pic.png'>";
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, "<img Src='https://example.com/post/hello/pic.png'>");
    }

    #[test]
    fn test_rewrite_multiple_attributes() {
        let html = r#"<p><a href="/a">x</a> and <img src="/b.png"> and <a href="/c">y</a></p>"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(
            out,
            r#"<p><a href="https://example.com/a">x</a> and <img src="https://example.com/b.png"> and <a href="https://example.com/c">y</a></p>"#
        );
    }

    #[test]
    fn test_rewrite_applies_trailing_slash_policy() {
        let html = r#"<a href="/about">About</a>"#;
        let out = rewrite_links(html, BASE, true).unwrap();
        assert_eq!(out, r#"<a href="https://example.com/about/">About</a>"#);
    }

    #[test]
    fn test_absolute_urls_untouched() {
        let html = r#"<a href="https://other.org/page">x</a>"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, html);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_mailto_and_fragment_untouched() {
        let html = r##"<a href="mailto:a@b.com">mail</a><a href="#top">top</a>"##;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, html);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_protocol_relative_untouched() {
        let html = r#"<script src="//cdn.example.com/lib.js"></script>"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, html);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_unquoted_value_untouched() {
        let html = "<a href=/about>About</a>";
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn test_bare_slash_value() {
        let html = r#"<a href="/">home</a>"#;
        let out = rewrite_links(html, BASE, false).unwrap();
        assert_eq!(out, r#"<a href="https://example.com/">home</a>"#);
    }

    #[test]
    fn test_empty_input() {
        let out = rewrite_links("", BASE, false).unwrap();
        assert_eq!(out, "");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_invalid_base_propagates() {
        let html = r#"<a href="/about">About</a>"#;
        assert!(rewrite_links(html, "not a url", false).is_err());
    }
}
