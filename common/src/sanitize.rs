//! Sanitization declaration for the serialized record.
//!
//! Only `caption` may carry markup, and only line breaks. The host applies
//! these rules when it stores a record; [`clean_caption`] is the same rule as
//! a function for hosts without their own sanitizer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<\s*(/?)\s*([a-z][a-z0-9-]*)[^>]*>").unwrap());

/// Permitted inline tags per record field.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeRules {
    pub url: &'static [&'static str],
    pub caption: &'static [&'static str],
    pub with_border: &'static [&'static str],
    pub with_background: &'static [&'static str],
    pub stretched: &'static [&'static str],
}

pub const SANITIZE: SanitizeRules = SanitizeRules {
    url: &[],
    caption: &["br"],
    with_border: &[],
    with_background: &[],
    stretched: &[],
};

/// Strips every tag except `<br>`, which is normalized to its bare form.
pub fn clean_caption(caption: &str) -> String {
    TAG.replace_all(caption, |caps: &regex::Captures| {
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let name = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if !closing && SANITIZE.caption.iter().any(|allowed| name.eq_ignore_ascii_case(allowed)) {
            "<br>".to_string()
        } else {
            String::new()
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_line_breaks() {
        assert_eq!(clean_caption("one<br>two<BR/>three<br />"), "one<br>two<br>three<br>");
    }

    #[test]
    fn strips_other_markup() {
        assert_eq!(
            clean_caption(r#"<b>bold</b> and <a href="x">link</a><script>x</script>"#),
            "bold and linkx"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(clean_caption("a < b & c"), "a < b & c");
    }
}
