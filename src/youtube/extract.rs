use crate::youtube::models::TrackDescriptor;

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Outcome of reading one `playlistItems` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Available(TrackDescriptor),
    /// The record has no `snippet.resourceId.videoId`. The video was removed,
    /// made private, or is region-restricted; the response does not say which.
    Unavailable,
}

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}

pub fn read_record(v: &serde_json::Value) -> Record {
    let Some(video_id) = v
        .pointer("/snippet/resourceId/videoId")
        .and_then(|x| x.as_str())
    else {
        return Record::Unavailable;
    };

    let text = |path: &str| {
        v.pointer(path)
            .and_then(|x| x.as_str())
            .unwrap_or_default()
            .to_string()
    };

    Record::Available(TrackDescriptor {
        title: text("/snippet/title"),
        author: text("/snippet/videoOwnerChannelTitle"),
        external_id: video_id.to_string(),
        duration_seconds: 0,
        is_stream: false,
        source_url: watch_url(video_id),
    })
}

/// Turn a page's raw items into descriptors, keeping record order and
/// dropping unavailable entries.
pub fn extract_tracks(items: &[serde_json::Value]) -> Vec<TrackDescriptor> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match read_record(item) {
            Record::Available(track) => out.push(track),
            Record::Unavailable => {
                tracing::debug!(position = i, "skipping unavailable playlist item");
            }
        }
    }
    out
}
