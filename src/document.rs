//! Input documents for one clustering run.

use url::Url;

/// One document in a clustering corpus.
///
/// Immutable input: identity, raw text, and optional hyperlink structure.
/// `url` is the document's own address (used to derive its hostname for
/// site-affinity boosting), `links` are raw outbound URLs, and `hosts` are
/// pre-extracted hostnames the document is known to link to. All three are
/// optional; a bare `{ id, title, text }` document clusters on text alone.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Opaque identity, returned unchanged in the output partition.
    pub id: String,
    /// The document's own URL, if it has one.
    pub url: Option<String>,
    /// Title (not tokenized separately; callers may prepend it to `text`).
    pub title: String,
    /// Raw text to tokenize.
    pub text: String,
    /// Outbound link URLs.
    pub links: Vec<String>,
    /// Hostnames this document links to, if already extracted upstream.
    pub hosts: Vec<String>,
}

impl Document {
    /// Build a text-only document.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// The document's own hostname, if `url` is a parsable http(s) URL.
    pub fn own_host(&self) -> Option<String> {
        self.url.as_deref().and_then(host_of)
    }

    /// Every hostname this document links to: the explicit `hosts` list plus
    /// hostnames extracted from `links`. Unparsable links are skipped.
    pub fn linked_hosts(&self) -> Vec<String> {
        let mut out: Vec<String> = self.hosts.clone();
        out.extend(self.links.iter().filter_map(|l| host_of(l)));
        out.sort_unstable();
        out.dedup();
        out
    }
}

/// Hostname of an http(s) URL, lowercased. `None` for other schemes or
/// unparsable input.
fn host_of(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    url.host_str().map(|h| h.to_ascii_lowercase())
}
