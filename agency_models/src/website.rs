use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)^https?://").unwrap());

/// A website as entered by a submitter together with its normalized URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Website {
    raw: String,
    normalized: Option<String>,
}

impl Website {
    /// Normalize a user-entered website.
    ///
    /// `https://` is prepended if the value has no `http://` or `https://`
    /// scheme. The result is kept as written and only checked to parse as a
    /// URL. If it does not, only the raw value is kept. Returns `None` for
    /// blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let normalized = if SCHEME_REGEX.is_match(raw) {
            raw.to_owned()
        } else {
            format!("https://{raw}")
        };
        let normalized = Url::parse(&normalized).is_ok().then_some(normalized);

        Some(Self {
            raw: raw.to_owned(),
            normalized,
        })
    }

    /// The trimmed value as entered, for display.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized URL, if the value could be parsed as one.
    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }
}
