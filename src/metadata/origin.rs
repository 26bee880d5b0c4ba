use crate::api::TorrentInfo;
use crate::config::Tracker;
use crate::errors::Result;
use crate::utils::decode_entities;

use super::artist_display;
use super::file_list::{parse_file_list, FileEntry};

/// Column alignment for [`render_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Keys padded to the widest key plus two spaces.
    Left,
    /// Keys right-aligned to the widest key, then two spaces.
    Right,
}

/// Renders `(key, value)` rows as two aligned columns, one row per line.
///
/// This is the only place table cells get HTML-decoded. Empty values print as `-`.
pub fn render_table<K, V>(rows: &[(K, V)], justify: Justify) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let rows: Vec<(String, String)> = rows
        .iter()
        .map(|(k, v)| {
            let value = match v.as_ref() {
                "" => "-".to_string(),
                v => decode_entities(v).into_owned(),
            };
            (decode_entities(k.as_ref()).into_owned(), value)
        })
        .collect();

    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    for (key, value) in &rows {
        let line = match justify {
            Justify::Left => format!("{:<width$}{}\n", key, value, width = key_width + 2),
            Justify::Right => format!("{:>width$}  {}\n", key, value, width = key_width),
        };
        table.push_str(&line);
    }
    table
}

/// Metadata rows in report order.
pub fn metadata_rows(info: &TorrentInfo, tracker: Tracker) -> Result<Vec<(&'static str, String)>> {
    let group = &info.group;
    let torrent = &info.torrent;

    let log = match (torrent.has_log, torrent.log_score) {
        (true, Some(score)) => format!("{}%", score),
        _ => String::new(),
    };
    let uploaded_by = format!(
        "{} ({})",
        text(&torrent.username),
        text(&torrent.time)
    );

    Ok(vec![
        ("Artist", artist_display(&info.artist_names())?),
        ("Name", text(&group.name)),
        ("Edition", text(&torrent.remaster_title)),
        ("Edition year", number(torrent.remaster_year)),
        ("Media", text(&torrent.media)),
        ("Catalog number", text(&torrent.remaster_catalogue_number)),
        ("Record label", text(&torrent.remaster_record_label)),
        ("Original year", number(group.year)),
        ("Log", log),
        ("File count", number(torrent.file_count)),
        ("Size", number(torrent.size)),
        ("Info hash", text(&torrent.info_hash)),
        ("Uploaded by", uploaded_by),
        ("Permalink", tracker.permalink(torrent.id)),
    ])
}

/// Builds the origin file for a music torrent. Returns `None` for any other category.
pub fn format_origin(info: &TorrentInfo, tracker: Tracker) -> Result<Option<String>> {
    if !info.is_music() {
        log::info!(
            "Torrent {} is in category {:?}, not Music",
            info.torrent.id,
            info.group.category_name
        );
        return Ok(None);
    }

    let fields = metadata_rows(info, tracker)?;
    let files = parse_file_list(info.torrent.file_list.as_deref().unwrap_or(""))?;
    let file_rows: Vec<(&str, &str)> = files
        .iter()
        .map(|FileEntry { size, path }| (size.as_str(), path.as_str()))
        .collect();

    let mut report = render_table(&fields, Justify::Left);
    report.push('\n');
    report.push_str(&decode_entities(info.torrent.file_path.as_deref().unwrap_or("")));
    report.push_str("/\n");
    report.push_str(&render_table(&file_rows, Justify::Right));

    if let Some(comment) = comment(info) {
        report.push('\n');
        report.push_str(&comment);
        report.push('\n');
    }

    Ok(Some(report))
}

fn comment(info: &TorrentInfo) -> Option<String> {
    let raw = info.torrent.description.as_deref()?;
    let decoded = decode_entities(raw);
    let comment = decoded.trim_matches(|c| c == '\r' || c == '\n');
    if comment.trim().is_empty() {
        None
    } else {
        Some(comment.to_string())
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
