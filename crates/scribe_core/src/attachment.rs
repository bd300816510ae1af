//! Attachment model.

use crate::AttachmentId;
use serde::{Deserialize, Serialize};

/// A file attached to a message.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters, derive_builder::Builder,
)]
pub struct Attachment {
    /// Attachment snowflake ID (required)
    id: AttachmentId,
    /// Original file name (required)
    filename: String,
    /// Source URL on the CDN (required)
    url: String,

    /// MIME type (optional)
    #[serde(default)]
    #[builder(default)]
    content_type: Option<String>,
    /// Proxied URL (optional)
    #[serde(default)]
    #[builder(default)]
    proxy_url: Option<String>,
    /// File size in bytes (optional)
    #[serde(default)]
    #[builder(default)]
    size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "id": "444444444444444444",
            "filename": "report.pdf",
            "url": "https://cdn.example.com/report.pdf",
            "content_type": "application/pdf",
            "size": 2048
        }"#;

        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.filename(), "report.pdf");
        assert_eq!(
            attachment.content_type(),
            &Some("application/pdf".to_string())
        );
        assert_eq!(*attachment.size(), 2048);
    }
}
