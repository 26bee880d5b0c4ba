//! Canned tracker payloads shared by the unit tests.

use serde_json::{json, Value};

pub(crate) const INFO_HASH: &str = "0123456789ABCDEF0123456789ABCDEF01234567";

/// `response` body of `action=torrent` for a music release.
pub(crate) fn torrent_response() -> Value {
    json!({
        "group": {
            "wikiBody": "",
            "wikiImage": "",
            "id": 72189,
            "name": "Music Has the Right to Children",
            "year": 1998,
            "recordLabel": "Warp",
            "catalogueNumber": "WARPCD55",
            "releaseType": 1,
            "categoryId": 1,
            "categoryName": "Music",
            "time": "2011-04-23 10:02:11",
            "vanityHouse": false,
            "isBookmarked": false,
            "musicInfo": {
                "composers": [],
                "dj": [],
                "artists": [{"id": 1460, "name": "Boards of Canada"}],
                "with": [],
                "conductor": [],
                "remixedBy": [],
                "producer": []
            },
            "tags": ["electronic", "idm"]
        },
        "torrent": {
            "id": 1234,
            "infoHash": INFO_HASH,
            "media": "CD",
            "format": "FLAC",
            "encoding": "Lossless",
            "remastered": true,
            "remasterYear": 2004,
            "remasterTitle": "Remastered",
            "remasterRecordLabel": "Warp Records",
            "remasterCatalogueNumber": "WARPCD55",
            "scene": false,
            "hasLog": true,
            "hasCue": true,
            "logScore": 100,
            "fileCount": 3,
            "size": 51234567,
            "seeders": 12,
            "leechers": 0,
            "snatched": 340,
            "freeTorrent": false,
            "time": "2019-05-10 12:34:56",
            "description": "Ripped with EAC &amp; checked with CUETools.\r\n",
            "fileList": "01 - Wildlife Analysis.flac{{{9876543}}}|||02 - An Eagle in Your Mind.flac{{{41234567}}}|||folder.jpg{{{123457}}}",
            "filePath": "Boards of Canada - Music Has the Right to Children (2004) [FLAC]",
            "userId": 42,
            "username": "uploader"
        }
    })
}

/// Same release filed under a non-music category.
pub(crate) fn non_music_response() -> Value {
    let mut value = torrent_response();
    value["group"]["categoryName"] = json!("E-Books");
    value
}
