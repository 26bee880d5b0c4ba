use std::borrow::Cow;
use std::path::Path;

use log::info;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::errors::Result;

/// Log filter for a `-v` count. Quiet by default: a fatal error is reported once,
/// by the binary, not again by the logger.
pub fn level_filter(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

/// Sets up `env_logger` on stderr. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Decodes HTML character references (`&amp;`, `&#39;`, ...) as delivered by Gazelle.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Writes the finished report to `out`, or to stdout when no path is given.
/// The text is written verbatim, without an added newline.
pub async fn emit_report(report: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, report.as_bytes()).await?;
            info!("Wrote origin file to {:?}", path);
        }
        None => write_report(&mut tokio::io::stdout(), report).await?,
    }
    Ok(())
}

pub async fn write_report<W>(writer: &mut W, report: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(report.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
