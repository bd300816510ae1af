//! Discord-flavored markdown transformation.
//!
//! An ordered sequence of single-pass regex substitutions over
//! already-escaped text. The order is load-bearing: several syntaxes are
//! super/substrings of one another (`***` / `**` / `*`, `___` / `__` /
//! `_`), and later rules must not re-enter markup produced by earlier
//! ones. Reordering rules changes output and is a breaking change.
//!
//! Code spans are the exception to plain sequential substitution: their
//! content must stay literal, so fenced blocks and inline code are lifted
//! out into placeholders before the other rules run and restored
//! afterwards.
//!
//! Malformed or unmatched delimiters never error; they stay in the output
//! as literal (already-escaped) text.

use crate::DateFormatter;
use chrono::DateTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:([A-Za-z0-9_+\-]+)\n)?(.*?)```").expect("valid code fence regex")
});
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid inline code regex"));
static SPOILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\|(.+?)\|\|").expect("valid spoiler regex"));
static BOLD_ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("valid bold italic regex"));
static BOLD_ITALIC_UNDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"___(.+?)___").expect("valid bold italic regex"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid underline regex"));
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("valid italic regex"));
// No lookbehind in the regex crate, so the word-boundary guards around
// `_italic_` capture and restore the surrounding characters. This keeps
// snake_case identifiers intact.
static ITALIC_UNDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^A-Za-z0-9_])_([^_\n]+?)_($|[^A-Za-z0-9_])").expect("valid italic regex")
});
static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").expect("valid strikethrough regex"));
static BLOCK_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^&gt;\s?(.*)$").expect("valid block quote regex"));
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3})\s+(.+)$").expect("valid header regex"));
static SUBTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^-#\s+(.+)$").expect("valid subtext regex"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+(.+)$").expect("valid list item regex"));
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&lt;t:(-?\d+)(?::([A-Za-z]))?&gt;").expect("valid timestamp regex")
});
static MD_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("valid link regex")
});
// Auto-linking only fires after whitespace or at the start of the text, so
// URLs already sitting inside href/src attribute values (preceded by a
// quote) or link labels (preceded by `>`) are left alone.
static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)(https?://[^\s]+)").expect("valid URL regex"));

/// Apply the Discord-flavored markdown rules to escaped text.
///
/// `dates` renders inline `<t:unix[:style]>` timestamp tokens; the style
/// hint is accepted but presentation is the capability's decision.
pub fn transform_markdown(text: &str, dates: &dyn DateFormatter) -> String {
    // Lift code out first so no later rule touches its content.
    let mut fences: Vec<String> = Vec::new();
    let text = CODE_FENCE.replace_all(text, |caps: &Captures| {
        let index = fences.len();
        let body = caps[2].to_string();
        fences.push(match caps.get(1) {
            Some(lang) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                lang.as_str(),
                body
            ),
            None => format!("<pre><code>{}</code></pre>", body),
        });
        format!("\u{0}F{index}\u{0}")
    });

    let mut inline: Vec<String> = Vec::new();
    let text = INLINE_CODE.replace_all(&text, |caps: &Captures| {
        let index = inline.len();
        inline.push(format!("<code>{}</code>", &caps[1]));
        format!("\u{0}I{index}\u{0}")
    });

    let text = SPOILER.replace_all(&text, "<span class=\"dc-spoiler\">$1</span>");
    let text = BOLD_ITALIC_STAR.replace_all(&text, "<strong><em>$1</em></strong>");
    let text = BOLD_ITALIC_UNDER.replace_all(&text, "<strong><em>$1</em></strong>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = UNDERLINE.replace_all(&text, "<u>$1</u>");
    let text = ITALIC_STAR.replace_all(&text, "<em>$1</em>");
    let text = ITALIC_UNDER.replace_all(&text, "$1<em>$2</em>$3");
    let text = STRIKETHROUGH.replace_all(&text, "<s>$1</s>");
    let text = BLOCK_QUOTE.replace_all(&text, "<blockquote>$1</blockquote>");
    let text = HEADER.replace_all(&text, |caps: &Captures| {
        let level = caps[1].len();
        format!("<h{level}>{}</h{level}>", &caps[2])
    });
    let text = SUBTEXT.replace_all(&text, "<small>$1</small>");
    let text = LIST_ITEM.replace_all(&text, "<li>$1</li>");

    let text = TIMESTAMP.replace_all(&text, |caps: &Captures| {
        let epoch: i64 = match caps[1].parse() {
            Ok(epoch) => epoch,
            Err(_) => return caps[0].to_string(),
        };
        match DateTime::from_timestamp(epoch, 0) {
            Some(instant) => format!(
                "<span class=\"dc-timestamp\">{}</span>",
                dates.format(&instant)
            ),
            // Out-of-range instant: leave the token literal.
            None => caps[0].to_string(),
        }
    });

    let text = MD_LINK.replace_all(&text, "<a href=\"$2\">$1</a>");
    let text = BARE_URL.replace_all(&text, "$1<a href=\"$2\">$2</a>");

    // Restore protected code spans.
    let mut out = text.into_owned();
    for (index, code) in inline.iter().enumerate() {
        out = out.replace(&format!("\u{0}I{index}\u{0}"), code);
    }
    for (index, block) in fences.iter().enumerate() {
        out = out.replace(&format!("\u{0}F{index}\u{0}"), block);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocaleDateFormatter;

    fn render(text: &str) -> String {
        let dates = LocaleDateFormatter::new("en-US", "UTC");
        transform_markdown(text, &dates)
    }

    #[test]
    fn test_bold() {
        assert_eq!(render("**hi**"), "<strong>hi</strong>");
    }

    #[test]
    fn test_bold_is_lazy() {
        assert_eq!(
            render("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_italic_both_spellings() {
        assert_eq!(render("***x***"), "<strong><em>x</em></strong>");
        assert_eq!(render("___x___"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_underline_and_italic() {
        assert_eq!(render("__u__ *i* _j_"), "<u>u</u> <em>i</em> <em>j</em>");
    }

    #[test]
    fn test_snake_case_not_italicized() {
        assert_eq!(render("call foo_bar_baz now"), "call foo_bar_baz now");
    }

    #[test]
    fn test_strikethrough_and_spoiler() {
        assert_eq!(render("~~gone~~"), "<s>gone</s>");
        assert_eq!(render("||secret||"), "<span class=\"dc-spoiler\">secret</span>");
    }

    #[test]
    fn test_inline_code_content_is_protected() {
        assert_eq!(render("`**not bold**`"), "<code>**not bold**</code>");
    }

    #[test]
    fn test_code_fence_with_language() {
        assert_eq!(
            render("```rust\nlet x = 1;\n```"),
            "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_code_fence_content_is_protected() {
        assert_eq!(
            render("```\n*stay* _literal_\n```"),
            "<pre><code>*stay* _literal_\n</code></pre>"
        );
    }

    #[test]
    fn test_block_quote() {
        assert_eq!(render("&gt; quoted"), "<blockquote>quoted</blockquote>");
    }

    #[test]
    fn test_headers() {
        assert_eq!(render("# One"), "<h1>One</h1>");
        assert_eq!(render("## Two"), "<h2>Two</h2>");
        assert_eq!(render("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn test_list_items_and_subtext() {
        assert_eq!(render("- first"), "<li>first</li>");
        assert_eq!(render("* second"), "<li>second</li>");
        assert_eq!(render("-# fine print"), "<small>fine print</small>");
    }

    #[test]
    fn test_timestamp_token() {
        let out = render("&lt;t:1700000000:F&gt;");
        assert!(out.starts_with("<span class=\"dc-timestamp\">"));
        assert!(out.ends_with("</span>"));
        assert!(!out.contains("&lt;t:"));
    }

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            render("[docs](https://example.com/a)"),
            "<a href=\"https://example.com/a\">docs</a>"
        );
    }

    #[test]
    fn test_bare_url_autolinked() {
        assert_eq!(
            render("see https://example.com/a now"),
            "see <a href=\"https://example.com/a\">https://example.com/a</a> now"
        );
    }

    #[test]
    fn test_url_in_link_not_relinked() {
        // The href written by the link rule must not be autolinked again.
        let out = render("[x](https://example.com/a)");
        assert_eq!(out.matches("<a href=").count(), 1);
    }

    #[test]
    fn test_unmatched_delimiters_stay_literal() {
        assert_eq!(render("**open"), "**open");
        assert_eq!(render("a ~~ b"), "a ~~ b");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render("nothing fancy here."), "nothing fancy here.");
    }
}
