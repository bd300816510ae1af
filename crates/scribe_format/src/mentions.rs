//! Reference-token resolution.
//!
//! Replaces user, role, and channel reference tokens with resolved inline
//! spans. Operates on already-escaped text, so the tokens appear in their
//! entity forms: `&lt;@123&gt;`, `&lt;@!123&gt;`, `&lt;@&amp;123&gt;`, and
//! `&lt;#123&gt;`. Must run before generic markdown transformation.

use crate::escape_html;
use regex::{Captures, Regex};
use scribe_core::ResolverContext;
use std::sync::LazyLock;

// Escaped forms of <@123> / <@!123>, <@&123>, and <#123>.
static USER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&lt;@!?(\d+)&gt;").expect("valid user token regex"));
static ROLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&lt;@&amp;(\d+)&gt;").expect("valid role token regex"));
static CHANNEL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&lt;#(\d+)&gt;").expect("valid channel token regex"));

/// Replace reference tokens in escaped text with resolved markup spans.
///
/// Unresolvable ids degrade to "Unknown User" / "Unknown Role" /
/// "Unknown Channel" labels; resolution never fails. Role spans carry the
/// role color as an inline `rgb(r, g, b)` style when the role has one.
pub fn resolve_references(text: &str, context: &ResolverContext) -> String {
    // Roles first: the user pattern cannot match a role token (the `&amp;`
    // sits where a digit would be), but resolving in one fixed order keeps
    // the output independent of table contents.
    let text = ROLE_TOKEN.replace_all(text, |caps: &Captures| {
        let id: u64 = caps[1].parse().unwrap_or(0);
        match context.role(id) {
            Some(role) => {
                let name = escape_html(role.name());
                let color = *role.color();
                if color != 0 {
                    format!(
                        "<span class=\"dc-role-mention\" style=\"color: rgb({}, {}, {})\">@{}</span>",
                        (color >> 16) & 0xff,
                        (color >> 8) & 0xff,
                        color & 0xff,
                        name
                    )
                } else {
                    format!("<span class=\"dc-role-mention\">@{}</span>", name)
                }
            }
            None => "<span class=\"dc-role-mention\">@Unknown Role</span>".to_string(),
        }
    });

    let text = USER_TOKEN.replace_all(&text, |caps: &Captures| {
        let id: u64 = caps[1].parse().unwrap_or(0);
        match context.user(id) {
            Some(name) => format!("<span class=\"dc-mention\">@{}</span>", escape_html(name)),
            None => "<span class=\"dc-mention\">@Unknown User</span>".to_string(),
        }
    });

    let text = CHANNEL_TOKEN.replace_all(&text, |caps: &Captures| {
        let id: u64 = caps[1].parse().unwrap_or(0);
        match context.channel(id) {
            Some(name) => format!(
                "<span class=\"dc-channel-mention\">#{}</span>",
                escape_html(name)
            ),
            None => "<span class=\"dc-channel-mention\">#Unknown Channel</span>".to_string(),
        }
    });

    text.into_owned()
}
