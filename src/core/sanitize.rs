use crate::domain::model::SafeText;
use regex::{Captures, Regex};
use std::sync::OnceLock;
use url::Url;

/// Structural tags that survive sanitization. Everything else is dropped,
/// keeping the inner text.
const ALLOWED_TAGS: &[&str] = &["a", "hr", "br", "b", "li", "p"];

/// ASCII whitespace collapsed by the typographic-whitespace policy.
/// Non-ASCII whitespace (e.g. U+00A0) passes through untouched.
const ASCII_WHITESPACE: &[char] = &[' ', '\t', '\r', '\n', '\x0B', '\x0C'];

fn block_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<\s*(script|style)\b[^>]*>.*?<\s*/\s*(script|style)\s*>")
            .expect("static pattern")
    })
}

fn comment_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("static pattern"))
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<(/?)\s*([a-z][a-z0-9]*)[^>]*>").expect("static pattern"))
}

fn href_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("static pattern")
    })
}

fn whitespace_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t\r\n\x0B\x0C]+").expect("static pattern"))
}

/// The only gate between raw lines and everything downstream: engines,
/// remote calls, and the text echoed back in result rows. Pure and total;
/// unsafe constructs are dropped, never reported as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sanitize(&self, line: &str) -> SafeText {
        let text = block_pattern().replace_all(line, "");
        let text = comment_pattern().replace_all(&text, "");
        let text = tag_pattern().replace_all(&text, rewrite_tag);
        let text = whitespace_pattern().replace_all(&text, " ");
        SafeText::new(text.trim_matches(ASCII_WHITESPACE).to_string())
    }
}

fn rewrite_tag(caps: &Captures) -> String {
    let closing = !caps[1].is_empty();
    let name = caps[2].to_lowercase();

    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return String::new();
    }

    if closing {
        format!("</{name}>")
    } else if name == "a" {
        // Anchors keep only an http(s) href; all other attributes go.
        match anchor_href(&caps[0]) {
            Some(href) => format!("<a href=\"{href}\">"),
            None => "<a>".to_string(),
        }
    } else {
        format!("<{name}>")
    }
}

fn anchor_href(tag: &str) -> Option<String> {
    let caps = href_pattern().captures(tag)?;
    let href = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let parsed = Url::parse(href).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(href.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(line: &str) -> String {
        Sanitizer::new().sanitize(line).as_str().to_string()
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize("I love this!"), "I love this!");
    }

    #[test]
    fn test_allowed_tags_survive_normalized() {
        assert_eq!(sanitize("<B>bold</B> and <p>para</p>"), "<b>bold</b> and <p>para</p>");
        assert_eq!(sanitize("a<br>b<hr>c"), "a<br>b<hr>c");
    }

    #[test]
    fn test_disallowed_tags_drop_but_keep_text() {
        assert_eq!(sanitize("<div>hello <span>world</span></div>"), "hello world");
        assert_eq!(sanitize("<img src=x onerror=alert(1)>safe"), "safe");
    }

    #[test]
    fn test_script_content_is_dropped_entirely() {
        assert_eq!(sanitize("before<script>alert('x')</script>after"), "beforeafter");
        assert_eq!(sanitize("a<style>p { color: red }</style>b"), "ab");
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(sanitize("a<!-- hidden -->b"), "ab");
    }

    #[test]
    fn test_anchor_keeps_http_href_only() {
        assert_eq!(
            sanitize(r#"<a href="https://example.com" onclick="evil()">link</a>"#),
            r#"<a href="https://example.com">link</a>"#
        );
        assert_eq!(sanitize(r#"<a href="javascript:alert(1)">link</a>"#), "<a>link</a>");
    }

    #[test]
    fn test_ascii_whitespace_collapses() {
        assert_eq!(sanitize("  a \t  b  "), "a b");
    }

    #[test]
    fn test_typographic_whitespace_is_preserved() {
        assert_eq!(sanitize("a\u{00A0}b"), "a\u{00A0}b");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "plain text",
            "<B>bold</B> <div>x</div>",
            r#"<a href="https://example.com">link</a>"#,
            "  spaced   out  ",
            "a < b and c > d",
        ];
        let sanitizer = Sanitizer::new();
        for input in inputs {
            let once = sanitizer.sanitize(input);
            let twice = sanitizer.sanitize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_line_is_valid() {
        assert_eq!(sanitize(""), "");
        assert!(Sanitizer::new().sanitize("").is_empty());
    }
}
