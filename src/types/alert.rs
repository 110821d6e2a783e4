//! Alert payloads for the EShop alert APIs.

use serde::{Deserialize, Serialize};

/// An alert queued client-side for display in EShop.
///
/// Alerts live in the browser-local queue, not in the document store:
/// `id` is auto-incremented by the local database and has nothing to do
/// with `(Discriminator, id)` identity. The color fields are CSS color
/// overrides; when absent, component defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMessage {
    /// Auto-incremented id assigned by the local database.
    pub id: i64,
    /// Text displayed in the header of the alert.
    pub header_text: String,
    /// Override for the default header text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_text_color: Option<String>,
    /// Override for the default header background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_background_color: Option<String>,
    /// Text or html content displayed in the body of the alert.
    pub html_body: String,
    /// Override for the default body text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text_color: Option<String>,
    /// Override for the default body background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_background_color: Option<String>,
    /// Material icon name overriding the default company logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    /// Color to use on the icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    /// Duration of the animation, if supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl AlertMessage {
    /// Create an alert with just the required header and body.
    #[must_use]
    pub fn new(id: i64, header_text: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            id,
            header_text: header_text.into(),
            html_body: html_body.into(),
            ..Self::default()
        }
    }
}
