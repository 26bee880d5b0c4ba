pub mod file_list;
pub mod origin;

use crate::errors::{OriginError, Result};

pub use file_list::{parse_file_list, FileEntry};
pub use origin::{format_origin, metadata_rows, render_table, Justify};

pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// Display form of a release's main artists: one name as-is, two joined with `&`,
/// anything more collapses to "Various Artists". A release with no artists is rejected.
pub fn artist_display<S: AsRef<str>>(artists: &[S]) -> Result<String> {
    match artists {
        [] => Err(OriginError::NoArtists),
        [only] => Ok(only.as_ref().to_string()),
        [first, second] => Ok(format!("{} & {}", first.as_ref(), second.as_ref())),
        _ => Ok(VARIOUS_ARTISTS.to_string()),
    }
}
