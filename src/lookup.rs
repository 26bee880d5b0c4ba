use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{OriginError, Result};

/// What a torrent lookup is keyed on. Built once from the user's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// 40 hex characters, stored upper-case.
    InfoHash(String),
    TorrentId(u64),
}

fn info_hash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{40}$").expect("info hash pattern"))
}

fn torrent_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("torrent id pattern"))
}

fn permalink_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^.*torrentid=(\d+)").expect("permalink pattern"))
}

impl LookupKey {
    /// Classifies an info hash, a bare torrent ID, or a permalink such as
    /// `https://redacted.ch/torrents.php?id=1&torrentid=2`.
    ///
    /// The hash shape is tried first, so a 40-digit number is a hash.
    pub fn classify(input: &str) -> Result<Self> {
        if info_hash_pattern().is_match(input) {
            return Ok(LookupKey::InfoHash(input.to_ascii_uppercase()));
        }

        if torrent_id_pattern().is_match(input) {
            return parse_id(input, input);
        }

        match permalink_pattern().captures(input) {
            Some(captures) => parse_id(&captures[1], input),
            None => Err(OriginError::InvalidIdentifier(input.to_string())),
        }
    }

    /// Query parameter pair for the torrent endpoint.
    pub fn query_param(&self) -> (&'static str, String) {
        match self {
            LookupKey::InfoHash(hash) => ("hash", hash.clone()),
            LookupKey::TorrentId(id) => ("id", id.to_string()),
        }
    }
}

fn parse_id(digits: &str, input: &str) -> Result<LookupKey> {
    digits
        .parse::<u64>()
        .map(LookupKey::TorrentId)
        .map_err(|_| OriginError::InvalidIdentifier(input.to_string()))
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::InfoHash(hash) => write!(f, "hash {}", hash),
            LookupKey::TorrentId(id) => write!(f, "torrent #{}", id),
        }
    }
}
