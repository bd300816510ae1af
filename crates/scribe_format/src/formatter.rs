//! The assembled formatting pipeline.

use crate::{DateFormatter, escape_html, resolve_references, transform_markdown};
use scribe_core::ResolverContext;

/// Escapes, resolves, and marks up message text.
///
/// A thin bundle of the three pipeline stages with the read-only state they
/// need: the resolver tables and the date-format capability. One formatter
/// serves a whole transcript run.
///
/// # Example
/// ```
/// use scribe_core::ResolverContext;
/// use scribe_format::{LocaleDateFormatter, RichTextFormatter};
///
/// let context = ResolverContext::new();
/// let dates = LocaleDateFormatter::new("en-US", "UTC");
/// let formatter = RichTextFormatter::new(&context, &dates);
///
/// assert_eq!(formatter.format("**hi**"), "<strong>hi</strong>");
/// ```
pub struct RichTextFormatter<'a> {
    context: &'a ResolverContext,
    dates: &'a dyn DateFormatter,
}

impl<'a> RichTextFormatter<'a> {
    /// Create a formatter over the given resolver tables and date capability.
    pub fn new(context: &'a ResolverContext, dates: &'a dyn DateFormatter) -> Self {
        Self { context, dates }
    }

    /// Run the full pipeline: escape, resolve references, apply markdown.
    ///
    /// Empty input yields an empty string. Never fails: malformed syntax
    /// degrades to literal escaped text.
    pub fn format(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        let escaped = escape_html(raw);
        let resolved = resolve_references(&escaped, self.context);
        transform_markdown(&resolved, self.dates)
    }

    /// The date-format capability this formatter renders timestamps with.
    pub fn dates(&self) -> &dyn DateFormatter {
        self.dates
    }
}
