//! ContentService - the entry point resolvers use for stored content.

use bard_slate_core::{Document, Options};
use tracing::{debug, instrument, warn};

use crate::Result;

/// Runs document transforms on raw stored content
///
/// Holds no per-request state and can be shared across request handlers.
#[derive(Debug, Clone, Default)]
pub struct ContentService {
    options: Options,
}

impl ContentService {
    /// Create a new ContentService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ContentService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse stored content into a document
    pub fn parse(&self, raw: &str) -> Result<Document> {
        Document::parse(raw).map_err(|error| {
            warn!(%error, "stored content is not a valid document");
            error.into()
        })
    }

    /// Normalize incoming content before it is persisted
    ///
    /// Returns the JSON to store in place of `raw`.
    #[instrument(skip_all, fields(bytes = raw.len()))]
    pub fn prepare_for_storage(&self, raw: &str) -> Result<String> {
        let document = self.parse(raw)?;
        let before = document.len();

        let document = document.normalized(&self.options);
        debug!(before, after = document.len(), "normalized content");

        Ok(document.to_json()?)
    }

    /// Content a viewer may see
    ///
    /// A blocked viewer gets the first top-level node only. Redaction never
    /// fails a request: blocked content that can't be parsed is replaced by
    /// [`Document::placeholder`]. Unblocked reads surface parse errors.
    #[instrument(skip(self, raw))]
    pub fn visible_content(&self, raw: &str, blocked: bool) -> Result<Document> {
        if !blocked {
            return self.parse(raw);
        }

        match Document::parse(raw) {
            Ok(document) => {
                let total = document.len();
                let visible = document.visible(true);
                debug!(total, "redacted blocked content");
                Ok(visible)
            }
            Err(error) => {
                warn!(%error, "blocked content is unreadable, using placeholder");
                Ok(Document::placeholder())
            }
        }
    }

    /// [`visible_content`](Self::visible_content) encoded for the client editor
    pub fn visible_content_json(&self, raw: &str, blocked: bool) -> Result<String> {
        Ok(self.visible_content(raw, blocked)?.to_json()?)
    }

    /// Render stored content as an HTML email body
    #[instrument(skip_all)]
    pub fn render_html(&self, raw: &str) -> Result<String> {
        Ok(self.parse(raw)?.to_html())
    }

    /// Render stored content as plain text, one line per top-level node
    pub fn render_text(&self, raw: &str) -> Result<String> {
        Ok(self.parse(raw)?.to_plain_text())
    }
}
