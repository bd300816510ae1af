//! HTML-entity escaping.

/// Escape the five HTML-significant characters to their entity forms.
///
/// This is the first stage of the formatting pipeline. Everything that
/// lands in a transcript passes through here before any markup is
/// introduced, so raw angle brackets, ampersands, and quotes from user
/// input never reach the output unescaped.
///
/// # Examples
///
/// ```
/// use scribe_format::escape_html;
///
/// assert_eq!(escape_html("<a & b>"), "&lt;a &amp; b&gt;");
/// ```
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five() {
        assert_eq!(
            escape_html(r#"<script>alert("it's")</script> & more"#),
            "&lt;script&gt;alert(&quot;it&#39;s&quot;)&lt;/script&gt; &amp; more"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_ampersand_first() {
        // Escaping must not double-escape entities it just produced.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_unicode_passthrough() {
        assert_eq!(escape_html("héllo 世界 🎉"), "héllo 世界 🎉");
    }
}
