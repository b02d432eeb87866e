use serde::{Deserialize, Serialize};

/// Default upper bound on the number of pages fetched for a single playlist.
pub const DEFAULT_MAX_PAGE_COUNT: u32 = 6;

/// Canonical description of one playlist entry, handed to the caller's track factory.
///
/// Duration and stream flag are placeholders: playback metadata is resolved later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    pub title: String,
    pub author: String,
    pub external_id: String,
    pub duration_seconds: u64,
    pub is_stream: bool,
    pub source_url: String,
}

/// One decoded response of the playlist-items endpoint.
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    /// `None` when the response carried no `items` array at all.
    pub items: Option<Vec<serde_json::Value>>,
    pub next_token: Option<String>,
    pub display_name: Option<String>,
}

impl PlaylistPage {
    pub fn from_json(mut v: serde_json::Value) -> Self {
        let items = match v.get_mut("items").map(serde_json::Value::take) {
            Some(serde_json::Value::Array(a)) => Some(a),
            _ => None,
        };
        let next_token = v
            .get("nextPageToken")
            .and_then(|x| x.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let display_name = v
            .get("etag")
            .and_then(|x| x.as_str())
            .map(|s| s.to_string());

        Self {
            items,
            next_token,
            display_name,
        }
    }

    /// Absent and empty item lists both mean "nothing more to read".
    pub fn is_empty(&self) -> bool {
        self.items.as_ref().is_none_or(|a| a.is_empty())
    }
}

/// Per-load tuning, threaded explicitly into every load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum number of pages fetched, the first page included.
    pub max_page_count: u32,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_page_count: DEFAULT_MAX_PAGE_COUNT,
        }
    }
}

/// A fully loaded playlist of caller-defined tracks.
#[derive(Debug, Clone, Serialize)]
pub struct Playlist<T> {
    pub name: String,
    pub tracks: Vec<T>,
    /// Index into `tracks` of the requested track, if it was found.
    pub selected: Option<usize>,
    pub is_search_result: bool,
}

impl<T> Playlist<T> {
    pub fn selected_track(&self) -> Option<&T> {
        self.selected.and_then(|i| self.tracks.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_from_json() {
        let page = PlaylistPage::from_json(json!({
            "etag": "MyList",
            "nextPageToken": "T1",
            "items": [{ "snippet": {} }]
        }));
        assert_eq!(page.display_name.as_deref(), Some("MyList"));
        assert_eq!(page.next_token.as_deref(), Some("T1"));
        assert_eq!(page.items.as_ref().map(Vec::len), Some(1));
        assert!(!page.is_empty());
    }

    #[test]
    fn test_page_without_items_is_empty() {
        let page = PlaylistPage::from_json(json!({ "nextPageToken": "T1" }));
        assert!(page.items.is_none());
        assert!(page.is_empty());

        let page = PlaylistPage::from_json(json!({ "items": [] }));
        assert!(page.is_empty());

        // A non-array `items` carries no records either.
        let page = PlaylistPage::from_json(json!({ "items": null }));
        assert!(page.is_empty());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let page = PlaylistPage::from_json(json!({ "items": [], "nextPageToken": "" }));
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_selected_track_by_index() {
        let playlist = Playlist {
            name: "n".to_string(),
            tracks: vec!["a", "b"],
            selected: Some(1),
            is_search_result: false,
        };
        assert_eq!(playlist.selected_track(), Some(&"b"));

        let playlist = Playlist::<&str> {
            selected: None,
            ..playlist
        };
        assert_eq!(playlist.selected_track(), None);
    }
}
