/// Shortcode extraction from Instagram post and reel URLs
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:https?://)?(?:www\.)?instagram\.com/(?:p|reel|reels)/([a-zA-Z0-9_-]+)/?")
        .expect("shortcode pattern is valid")
});

/// Instagram's short identifier for a post or reel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode(String);

impl Shortcode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the shortcode from an Instagram post URL
///
/// Algorithm:
/// 1. Trim surrounding whitespace
/// 2. Find `[http(s)://][www.]instagram.com/(p|reel|reels)/<id>[/]`
/// 3. Return `<id>`, made of `[A-Za-z0-9_-]`
///
/// Examples:
/// - https://www.instagram.com/p/CxYz123/ → CxYz123
/// - instagram.com/reel/Ab_c-9 → Ab_c-9
/// - https://www.instagram.com/stories/someone/ → None
pub fn extract_shortcode(input: &str) -> Option<Shortcode> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    SHORTCODE_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|id| Shortcode(id.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(input: &str) -> Option<String> {
        extract_shortcode(input).map(|s| s.as_str().to_string())
    }

    #[test]
    fn test_extract_post_urls() {
        assert_eq!(code("https://www.instagram.com/p/CxYz123/"), Some("CxYz123".to_string()));
        assert_eq!(code("https://instagram.com/p/CxYz123"), Some("CxYz123".to_string()));
        assert_eq!(code("http://www.instagram.com/p/CxYz123/"), Some("CxYz123".to_string()));
        assert_eq!(code("www.instagram.com/p/CxYz123/"), Some("CxYz123".to_string()));
    }

    #[test]
    fn test_extract_reel_urls() {
        assert_eq!(code("https://www.instagram.com/reel/Ab_c-9/"), Some("Ab_c-9".to_string()));
        assert_eq!(code("https://www.instagram.com/reels/Ab_c-9"), Some("Ab_c-9".to_string()));
    }

    #[test]
    fn test_extract_stops_at_query_and_path() {
        assert_eq!(
            code("https://www.instagram.com/p/CxYz123/?igsh=abc"),
            Some("CxYz123".to_string())
        );
        assert_eq!(
            code("https://www.instagram.com/p/CxYz123/comments/"),
            Some("CxYz123".to_string())
        );
    }

    #[test]
    fn test_extract_from_surrounding_text() {
        assert_eq!(
            code("look at this https://www.instagram.com/p/CxYz123/ wow"),
            Some("CxYz123".to_string())
        );
        assert_eq!(code("(instagram.com/p/CxYz123)"), Some("CxYz123".to_string()));
    }

    #[test]
    fn test_extract_trims_whitespace() {
        assert_eq!(code("   https://www.instagram.com/p/CxYz123/ \n"), Some("CxYz123".to_string()));
    }

    #[test]
    fn test_extract_rejects_other_inputs() {
        assert_eq!(code(""), None);
        assert_eq!(code("   "), None);
        assert_eq!(code("not a url"), None);
        assert_eq!(code("https://www.facebook.com/p/CxYz123/"), None);
        assert_eq!(code("https://notinstagram.com/p/abc/"), None);
        assert_eq!(code("https://www.fakeinstagram.com/reel/abc/"), None);
        assert_eq!(code("https://www.instagram.com/stories/someone/123/"), None);
        assert_eq!(code("https://www.instagram.com/p/"), None);
        assert_eq!(code("https://www.instagram.com/someone/"), None);
    }

    #[test]
    fn test_shortcode_display() {
        let shortcode = extract_shortcode("https://www.instagram.com/p/CxYz123/").unwrap();
        assert_eq!(shortcode.to_string(), "CxYz123");
    }
}
