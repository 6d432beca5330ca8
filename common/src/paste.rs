//! Paste routing declaration.
//!
//! The host uses these filters to decide which pasted content belongs to an
//! image block before it forwards the event. The block itself does not
//! re-validate pattern or file pastes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Absolute http(s) URL ending in a known image extension, case-insensitive.
pub const IMAGE_URL_PATTERN: &str = r"(?i)^https?://\S+\.(gif|jpe?g|tiff|png|webp)$";

static IMAGE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(IMAGE_URL_PATTERN).unwrap());

/// A tag filter: element name plus the attributes it must carry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TagFilter {
    pub tag: &'static str,
    pub required_attributes: &'static [&'static str],
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PasteConfig {
    /// Named text patterns, as regex source.
    pub patterns: Vec<(&'static str, &'static str)>,
    pub tags: Vec<TagFilter>,
    pub mime_types: Vec<&'static str>,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            patterns: vec![("image", IMAGE_URL_PATTERN)],
            tags: vec![TagFilter {
                tag: "img",
                required_attributes: &["src"],
            }],
            mime_types: vec!["image/*"],
        }
    }
}

impl PasteConfig {
    /// Returns the name of the first pattern matching `text`, if any.
    pub fn match_pattern(&self, text: &str) -> Option<&'static str> {
        self.patterns.iter().find_map(|(name, source)| {
            let matched = if *source == IMAGE_URL_PATTERN {
                IMAGE_URL.is_match(text)
            } else {
                Regex::new(source).map(|re| re.is_match(text)).unwrap_or(false)
            };
            matched.then_some(*name)
        })
    }

    pub fn accepts_tag(&self, tag: &str, has_attribute: impl Fn(&str) -> bool) -> bool {
        self.tags.iter().any(|filter| {
            filter.tag.eq_ignore_ascii_case(tag)
                && filter.required_attributes.iter().all(|attr| has_attribute(*attr))
        })
    }

    pub fn accepts_mime(&self, mime: &str) -> bool {
        self.mime_types.iter().any(|accepted| mime_matches(accepted, mime))
    }
}

/// True when `text` qualifies as a pasted image reference.
pub fn is_image_url(text: &str) -> bool {
    IMAGE_URL.is_match(text)
}

/// `image/*` style wildcard match on the MIME type, ignoring parameters.
pub fn mime_matches(accepted: &str, mime: &str) -> bool {
    let mime = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    match accepted.strip_suffix("/*") {
        Some(family) => mime
            .split_once('/')
            .is_some_and(|(kind, sub)| kind == family && !sub.is_empty()),
        None => mime == accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_image_urls() {
        assert!(is_image_url("https://example.com/pic.webp"));
        assert!(is_image_url("http://example.com/a/b/photo.JPEG"));
        assert!(is_image_url("https://cdn.example.com/x.jpg"));
        assert!(is_image_url("HTTPS://example.com/scan.tiff"));
    }

    #[test]
    fn rejects_non_image_text() {
        assert!(!is_image_url("https://example.com/page.html"));
        assert!(!is_image_url("ftp://example.com/pic.png"));
        assert!(!is_image_url("see https://example.com/pic.png"));
        assert!(!is_image_url("https://example.com/pic.png?size=2"));
        assert!(!is_image_url("https://exa mple.com/pic.png"));
    }

    #[test]
    fn default_pattern_is_named_image() {
        let config = PasteConfig::default();
        assert_eq!(config.match_pattern("https://x/a.gif"), Some("image"));
        assert_eq!(config.match_pattern("hello"), None);
    }

    #[test]
    fn mime_filter_accepts_any_image() {
        let config = PasteConfig::default();
        assert!(config.accepts_mime("image/png"));
        assert!(config.accepts_mime("image/svg+xml"));
        assert!(config.accepts_mime("IMAGE/JPEG"));
        assert!(!config.accepts_mime("text/plain"));
        assert!(!config.accepts_mime("image/"));
        assert!(!config.accepts_mime(""));
    }

    #[test]
    fn tag_filter_requires_src() {
        let config = PasteConfig::default();
        assert!(config.accepts_tag("IMG", |attr| attr == "src"));
        assert!(!config.accepts_tag("img", |_| false));
        assert!(!config.accepts_tag("div", |_| true));
    }
}
