pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, COOKIE};
use reqwest::{redirect, Client, ClientBuilder, Proxy, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{OriginConfig, Tracker};
use crate::errors::{OriginError, Result};
use crate::lookup::LookupKey;
pub use types::{AccountInfo, Artist, Envelope, MusicInfo, TorrentDetails, TorrentGroup, TorrentInfo};

/// Anything that can resolve a [`LookupKey`] to a torrent record.
#[async_trait]
pub trait TorrentSource {
    async fn torrent_info(&mut self, key: &LookupKey) -> Result<TorrentInfo>;
}

/// Client for a Gazelle tracker's `ajax.php` endpoint.
pub struct GazelleApi {
    client: Client,
    site_root: Url,
    endpoint: Url,
    authkey: Option<String>,
    last_request: DateTime<Utc>,
}

impl GazelleApi {
    /// API-key authentication: the key rides along in the `Authorization` header,
    /// no login round trip needed.
    pub fn with_api_key(config: &OriginConfig, tracker: Tracker) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let mut value = HeaderValue::from_str(api_key).map_err(|_| {
            OriginError::Unauthorized("API key contains invalid characters".to_string())
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Self::new(config, tracker, headers)
    }

    /// Session-cookie authentication. Logs in eagerly so the authkey is known
    /// before the first lookup.
    pub async fn with_session_cookie(
        config: &OriginConfig,
        tracker: Tracker,
        session_cookie: &str,
    ) -> Result<Self> {
        let mut value = HeaderValue::from_str(&format!("session={}", session_cookie))
            .map_err(|_| {
                OriginError::Unauthorized("session cookie contains invalid characters".to_string())
            })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, value);
        let mut api = Self::new(config, tracker, headers)?;
        api.login().await?;
        Ok(api)
    }

    fn new(config: &OriginConfig, tracker: Tracker, headers: HeaderMap) -> Result<Self> {
        let site_root = config.api_root(tracker)?;
        let endpoint = site_root.join("ajax.php").map_err(|e| {
            OriginError::Config(config::ConfigError::Message(format!(
                "Invalid API endpoint: {}",
                e
            )))
        })?;

        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(15))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .gzip(true)
            .redirect(redirect::Policy::none());

        if let Some(proxy_url) = &config.proxy {
            log::info!("Using proxy: {}", proxy_url);
            builder = builder.proxy(Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            site_root,
            endpoint,
            authkey: None,
            last_request: Utc::now(),
        })
    }

    async fn login(&mut self) -> Result<()> {
        log::info!("🔑 [API] Logging in at {}", self.site_root);
        let response = self.client.get(self.site_root.clone()).send().await;
        self.last_request = Utc::now();
        let response = response?;
        log::debug!("[API] Main page answered {}", response.status());

        let account: AccountInfo = self.request("index", &[]).await?;
        log::info!(
            "✅ [API] Logged in as {}",
            account.username.as_deref().unwrap_or("<unknown>")
        );
        self.authkey = Some(account.authkey);
        Ok(())
    }

    /// Issues one `ajax.php?action=...` call and unwraps the response envelope.
    pub async fn request<T: DeserializeOwned>(
        &mut self,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut query: Vec<(&str, String)> = vec![("action", action.to_string())];
        if let Some(authkey) = &self.authkey {
            query.push(("auth", authkey.clone()));
        }
        query.extend(params.iter().cloned());

        log::info!("🌐 [API] GET {} action={}", self.endpoint, action);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await;
        self.last_request = Utc::now();
        let response = response?;

        let status = response.status();
        log::debug!("[API] {} answered {}", action, status);
        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || status.is_redirection()
        {
            return Err(OriginError::Unauthorized(format!(
                "tracker rejected credentials (HTTP {})",
                status
            )));
        }

        let body = response.bytes().await?;
        let envelope = match serde_json::from_slice(&body) {
            Ok(json) => Envelope::from_json(json),
            Err(_) if !status.is_success() => {
                return Err(OriginError::Request(format!("HTTP {}", status)));
            }
            Err(e) => return Err(e.into()),
        };

        if !envelope.is_success() {
            let message = envelope.failure_message();
            log::debug!("[API] {} failed: {}", action, message);
            return Err(OriginError::Request(message));
        }

        let payload = envelope.response.ok_or_else(|| {
            OriginError::MalformedResponse("envelope has no response".to_string())
        })?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Wall-clock time of the most recent request (or of construction).
    pub fn last_request(&self) -> DateTime<Utc> {
        self.last_request
    }

    pub fn authkey(&self) -> Option<&str> {
        self.authkey.as_deref()
    }
}

#[async_trait]
impl TorrentSource for GazelleApi {
    async fn torrent_info(&mut self, key: &LookupKey) -> Result<TorrentInfo> {
        log::info!("Looking up {}", key);
        let (name, value) = key.query_param();
        self.request("torrent", &[(name, value)]).await
    }
}
