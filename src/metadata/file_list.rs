use crate::errors::{OriginError, Result};

const ENTRY_SEPARATOR: &str = "|||";
const FIELD_SEPARATOR: &str = "{{{";
const ENTRY_TERMINATOR: &str = "}}}";

/// One line of a torrent's file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Size as the tracker reported it, kept verbatim for display.
    pub size: String,
    pub path: String,
}

impl FileEntry {
    pub fn new(size: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            path: path.into(),
        }
    }
}

/// Parses Gazelle's `fileList` string: `path{{{size}}}|||path{{{size}}}...`.
///
/// An entry written size-first (`1024{{{name.flac`) is also accepted. Entries that
/// don't split into exactly two halves are rejected rather than guessed at.
pub fn parse_file_list(raw: &str) -> Result<Vec<FileEntry>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(ENTRY_SEPARATOR).map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Result<FileEntry> {
    let trimmed = entry.strip_suffix(ENTRY_TERMINATOR).unwrap_or(entry);
    let (first, second) = trimmed
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| OriginError::MalformedFileList(entry.to_string()))?;

    if first.is_empty() || second.is_empty() || second.contains(FIELD_SEPARATOR) {
        return Err(OriginError::MalformedFileList(entry.to_string()));
    }

    if is_size(first) && !is_size(second) {
        Ok(FileEntry::new(first, second))
    } else {
        Ok(FileEntry::new(second, first))
    }
}

fn is_size(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gazelle_order() {
        let files =
            parse_file_list("01 - Intro.flac{{{1024}}}|||CD2/02 - Outro.flac{{{2048}}}").unwrap();
        assert_eq!(
            files,
            vec![
                FileEntry::new("1024", "01 - Intro.flac"),
                FileEntry::new("2048", "CD2/02 - Outro.flac"),
            ]
        );
    }

    #[test]
    fn parses_size_first_entries() {
        let files = parse_file_list("1024{{{song1.flac|||2048{{{song2.flac}}}").unwrap();
        assert_eq!(
            files,
            vec![
                FileEntry::new("1024", "song1.flac"),
                FileEntry::new("2048", "song2.flac"),
            ]
        );
    }

    #[test]
    fn numeric_file_names_keep_gazelle_order() {
        let files = parse_file_list("2001{{{512}}}").unwrap();
        assert_eq!(files, vec![FileEntry::new("512", "2001")]);
    }

    #[test]
    fn empty_list_has_no_entries() {
        assert!(parse_file_list("").unwrap().is_empty());
        assert!(parse_file_list("  ").unwrap().is_empty());
    }

    #[test]
    fn malformed_entries_are_errors() {
        for raw in [
            "song.flac",
            "a.flac{{{1}}}|||",
            "a.flac{{{1{{{2}}}",
            "{{{12}}}",
            "a.flac{{{}}}",
        ] {
            assert!(
                matches!(parse_file_list(raw), Err(OriginError::MalformedFileList(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
