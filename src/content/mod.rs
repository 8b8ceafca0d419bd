//! Subject and body generation for the built-in email types.

mod plain_text;
mod welcome;

pub use plain_text::strip_html_to_plain_text;
pub use welcome::{DEFAULT_DISPLAY_NAME, WELCOME_SUBJECT};

/// A rendered subject/HTML pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

/// Renders email content that links back to the site.
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    site_url: String,
}

impl ContentGenerator {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }

    /// `display_name` falls back to "there" when absent or blank.
    pub fn welcome_email(&self, recipient: &str, display_name: Option<&str>) -> EmailContent {
        welcome::render(&self.site_url, recipient, display_name)
    }
}
