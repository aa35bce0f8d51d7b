/// Author shown when the source does not name one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A quote with its attribution. Both fields are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
}

impl Quote {
    /// Build a quote, substituting [`UNKNOWN_AUTHOR`] for a missing or blank author.
    ///
    /// Returns `None` when `text` is blank.
    pub fn new(text: impl Into<String>, author: Option<&str>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let author = author
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string();
        Some(Self { text, author })
    }

    /// Catalog text is compiled in and never blank; only the author default
    /// applies here.
    pub(crate) fn from_catalog(text: &str, author: &str) -> Self {
        let author = if author.trim().is_empty() {
            UNKNOWN_AUTHOR
        } else {
            author
        };
        Self {
            text: text.to_string(),
            author: author.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// `"{text} — {author}"`, the form used for sharing and copying.
    pub fn display_line(&self) -> String {
        format!("{} — {}", self.text, self.author)
    }
}
