use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"status": "success", "response": {...}}` or `{"status": "failure", "error": "..."}`.
///
/// Built from any parsed JSON body; fields that are missing or of the wrong type are `None`.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub status: Option<String>,
    pub response: Option<Value>,
    pub error: Option<String>,
}

impl Envelope {
    pub fn from_json(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Envelope::default();
        };
        let text = |value: Option<Value>| match value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        Envelope {
            status: text(fields.remove("status")),
            error: text(fields.remove("error")),
            response: fields.remove("response"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Human-readable reason for a non-success envelope.
    pub fn failure_message(&self) -> String {
        match (&self.error, &self.status) {
            (Some(error), _) => error.clone(),
            (None, Some(status)) => format!("status {:?}", status),
            (None, None) => "response has no status".to_string(),
        }
    }
}

/// Payload of `action=index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub authkey: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
}

/// Payload of `action=torrent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentInfo {
    pub group: TorrentGroup,
    pub torrent: TorrentDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TorrentGroup {
    pub name: Option<String>,
    pub year: Option<i64>,
    pub category_name: Option<String>,
    pub music_info: Option<MusicInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicInfo {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorrentDetails {
    pub id: u64,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub remaster_title: Option<String>,
    #[serde(default)]
    pub remaster_year: Option<i64>,
    #[serde(default)]
    pub remaster_catalogue_number: Option<String>,
    #[serde(default)]
    pub remaster_record_label: Option<String>,
    #[serde(default)]
    pub has_log: bool,
    #[serde(default)]
    pub log_score: Option<i64>,
    #[serde(default)]
    pub file_count: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub info_hash: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub file_list: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TorrentInfo {
    pub fn is_music(&self) -> bool {
        self.group.category_name.as_deref() == Some("Music")
    }

    pub fn artist_names(&self) -> Vec<&str> {
        self.group
            .music_info
            .as_ref()
            .map(|info| info.artists.iter().map(|a| a.name.as_str()).collect())
            .unwrap_or_default()
    }
}
