//! Code-based playlists
//!
//! Playlists are shared as links carrying `codes`, `playlist` and `timestamp`
//! query parameters. Codes are validated before lookup; an optional `_slug`
//! tail is accepted and ignored when matching.

use crate::catalog::CatalogEntry;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::warn;
use url::Url;

pub const CODES_PARAM: &str = "codes";
pub const PLAYLIST_PARAM: &str = "playlist";
pub const TIMESTAMP_PARAM: &str = "timestamp";

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z]{3}[0-9]{3}(?:[A-Z]|[0-9]{1,2})?(?:_.*)?$").expect("code pattern")
    })
}

/// `XXX000`, optionally with a collision suffix and a `_slug` tail.
pub fn is_valid_code(code: &str) -> bool {
    code_re().is_match(code)
}

/// The code without its `_slug` tail.
pub fn strip_slug(code: &str) -> &str {
    code.split_once('_').map(|(base, _)| base).unwrap_or(code)
}

/// Split a comma-separated `codes` value into valid, uppercased, unique codes.
pub fn parse_codes_param(raw: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for candidate in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let upper = candidate.to_uppercase();
        if !is_valid_code(&upper) {
            warn!(code = %candidate, "Ignoring invalid code; expected XXX000 or XXX000_slug");
            continue;
        }
        if !codes.contains(&upper) {
            codes.push(upper);
        }
    }
    codes
}

/// Entries found for a list of codes, plus the codes that matched nothing.
#[derive(Debug, Clone, Serialize)]
pub struct CodeLookup<'a> {
    pub found: Vec<&'a CatalogEntry>,
    pub missing: Vec<String>,
}

/// Resolve codes against the catalog, in request order.
pub fn lookup_codes<'a>(entries: &'a [CatalogEntry], codes: &[String]) -> CodeLookup<'a> {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for code in codes {
        let wanted = strip_slug(code);
        match entries.iter().find(|e| e.code.as_deref() == Some(wanted)) {
            Some(entry) => found.push(entry),
            None => {
                warn!(code = %code, "No entry found for code");
                missing.push(code.clone());
            }
        }
    }
    CodeLookup { found, missing }
}

/// A shareable playlist: codes plus display-only name and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistLink {
    pub codes: Vec<String>,
    pub name: String,
    pub timestamp: String,
}

impl PlaylistLink {
    /// Read a playlist from a link's query string.
    pub fn from_url(url: &Url) -> Self {
        let mut link = PlaylistLink::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                CODES_PARAM => link.codes = parse_codes_param(&value),
                PLAYLIST_PARAM => link.name = value.into_owned(),
                TIMESTAMP_PARAM => link.timestamp = value.into_owned(),
                _ => {}
            }
        }
        link
    }

    /// Build a share link on top of `base`, replacing its query string.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        if self.codes.is_empty() {
            return url;
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(CODES_PARAM, &self.codes.join(","));
            if !self.name.is_empty() {
                query.append_pair(PLAYLIST_PARAM, &self.name);
            }
            if !self.timestamp.is_empty() {
                query.append_pair(TIMESTAMP_PARAM, &self.timestamp);
            }
        }
        url
    }

    /// Add a code if valid and not present yet. Returns whether it was added.
    pub fn add_code(&mut self, code: &str) -> bool {
        let upper = code.trim().to_uppercase();
        if !is_valid_code(&upper) || self.codes.contains(&upper) {
            return false;
        }
        self.codes.push(upper);
        true
    }

    /// Remove a code. Returns whether it was present.
    pub fn remove_code(&mut self, code: &str) -> bool {
        let upper = code.trim().to_uppercase();
        let before = self.codes.len();
        self.codes.retain(|c| *c != upper);
        self.codes.len() != before
    }
}
