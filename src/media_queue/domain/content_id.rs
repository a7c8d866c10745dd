//! Media browser content ids owned by the streaming service.

use crate::config::MediaConfig;
use percent_encoding::percent_decode_str;
use url::Url;

/// Recognises and unwraps content ids carrying the service prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIdScheme {
    prefix: String,
}

impl ContentIdScheme {
    /// Creates a scheme for `prefix`, e.g. `spotify://`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` when `content_type` carries the prefix.
    #[must_use]
    pub fn is_prefixed_media_type(&self, content_type: &str) -> bool {
        content_type.starts_with(&self.prefix)
    }

    /// Strips the prefix from `content_type`, if present.
    #[must_use]
    pub fn resolve_media_type<'a>(&self, content_type: &'a str) -> &'a str {
        content_type
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(content_type)
    }

    /// Extracts the service URI from a media browser url.
    ///
    /// For a prefixed url the percent-decoded last path segment is returned,
    /// ignoring query and fragment; a prefixed value that does not parse as a
    /// url, or has no path, yields an empty string. Anything else is returned
    /// unchanged.
    #[must_use]
    pub fn uri_from_media_browser_url(&self, content_id: &str) -> String {
        if !self.is_prefixed_media_type(content_id) {
            return content_id.to_owned();
        }
        Url::parse(content_id)
            .ok()
            .and_then(|parsed| {
                parsed.path_segments()?
                    .next_back()
                    .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            })
            .unwrap_or_default()
    }
}

impl From<&MediaConfig> for ContentIdScheme {
    fn from(config: &MediaConfig) -> Self {
        Self::new(config.content_prefix.clone())
    }
}
