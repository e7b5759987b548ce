use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").expect("title regex is valid"));

#[allow(clippy::expect_used)]
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break regex is valid"));

/// Decodes entities, flattens line breaks and drops characters that are
/// illegal in file names.
pub fn sanitize_title(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    LINE_BREAKS
        .replace_all(&decoded, " ")
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect()
}

/// Sanitized `<title>` of a page, if it has one.
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| sanitize_title(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("A &amp; B\n"), "A & B");
        assert_eq!(sanitize_title("line one\r\n\r\nline two"), "line one line two");
        assert_eq!(sanitize_title("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn decoded_entities_are_sanitized_too() {
        assert_eq!(sanitize_title("&lt;clip&gt; &quot;x&quot;"), "clip x");
    }

    #[test]
    fn test_extract_title() {
        let html = "<html><TITLE>\n  My &#39;Video&#39;\n</TITLE></html>";
        assert_eq!(extract_title(html).as_deref(), Some("My 'Video'"));
        assert_eq!(extract_title("<html></html>"), None);
    }
}
