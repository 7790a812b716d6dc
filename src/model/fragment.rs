// Fragment parsing - turns `#screen-3`, `screen-3` or a full URL into a target id
use super::TargetId;

/// Raw fragment text of a location: everything after the first `#`, or the
/// whole string when there is no `#`. Surrounding whitespace is dropped.
pub fn fragment_text(raw: &str) -> &str {
    let raw = raw.trim();
    match raw.split_once('#') {
        Some((_, fragment)) => fragment.trim(),
        None => raw,
    }
}

/// True for characters allowed in a target id.
pub fn is_fragment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}

/// Parse a location into the target id it requests.
///
/// Empty or malformed fragments mean "no navigation requested" and yield
/// `None`. Whether the id names a declared target is for the caller to check.
pub fn parse_fragment(raw: &str) -> Option<TargetId> {
    let text = fragment_text(raw);
    if text.is_empty() || !text.chars().all(is_fragment_char) {
        return None;
    }
    Some(TargetId::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_hashed() {
        assert_eq!(parse_fragment("#screen-3"), Some(TargetId::new("screen-3")));
        assert_eq!(parse_fragment("screen-3"), Some(TargetId::new("screen-3")));
        assert_eq!(parse_fragment("  #screen-4 "), Some(TargetId::new("screen-4")));
    }

    #[test]
    fn test_parse_full_url() {
        assert_eq!(
            parse_fragment("https://example.com/portfolio/#screen-5"),
            Some(TargetId::new("screen-5"))
        );
    }

    #[test]
    fn test_empty_fragment_requests_nothing() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment("https://example.com/#"), None);
        assert_eq!(parse_fragment("   "), None);
    }

    #[test]
    fn test_malformed_fragment_requests_nothing() {
        assert_eq!(parse_fragment("#screen 3"), None);
        assert_eq!(parse_fragment("#a/b"), None);
        assert_eq!(parse_fragment("#a#b"), None);
        assert_eq!(parse_fragment("#<script>"), None);
    }

    #[test]
    fn test_fragment_text_keeps_raw_value() {
        assert_eq!(fragment_text("#a b"), "a b");
        assert_eq!(fragment_text("screen-1"), "screen-1");
    }
}
