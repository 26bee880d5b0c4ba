use std::path::Path;

use log::info;

use crate::api::{GazelleApi, TorrentSource};
use crate::config::{OriginConfig, Tracker};
use crate::errors::{OriginError, Result};
use crate::lookup::LookupKey;
use crate::metadata::format_origin;
use crate::utils::emit_report;

/// Looks up one torrent and renders its origin file.
pub async fn fetch_origin<S>(source: &mut S, key: &LookupKey, tracker: Tracker) -> Result<String>
where
    S: TorrentSource + Send + ?Sized,
{
    let info = source.torrent_info(key).await?;
    format_origin(&info, tracker)?.ok_or(OriginError::NotMusic)
}

/// `gazelle-origin`: API-key authentication, tracker chosen by configuration.
pub async fn origin_with_api_key(config: &OriginConfig, id: &str, out: Option<&Path>) -> Result<()> {
    config.require_api_key()?;
    let tracker = config.require_tracker()?;
    let key = LookupKey::classify(id)?;

    let mut api = GazelleApi::with_api_key(config, tracker)?;
    let report = fetch_origin(&mut api, &key, tracker).await?;
    info!("Last request to {} at {}", tracker, api.last_request());

    emit_report(&report, out).await
}

/// `red-origin`: session-cookie authentication against RED.
pub async fn origin_with_session_cookie(
    config: &OriginConfig,
    info_hash: &str,
    cookie: &str,
    out: Option<&Path>,
) -> Result<()> {
    let key = LookupKey::classify(info_hash)?;
    let tracker = Tracker::Red;

    let mut api = GazelleApi::with_session_cookie(config, tracker, cookie).await?;
    let report = fetch_origin(&mut api, &key, tracker).await?;
    info!("Last request to {} at {}", tracker, api.last_request());

    emit_report(&report, out).await
}
