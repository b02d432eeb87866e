use reqwest::Url;

/// A playlist named on the command line, either by id or by link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    pub playlist_id: String,
    /// The `v=` video of a watch link, if any.
    pub video_id: Option<String>,
}

/// Accepts a bare playlist id or a `youtube.com` link carrying `list=`.
pub fn parse_playlist_ref(input: &str) -> Option<PlaylistRef> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let Ok(url) = Url::parse(input) else {
        return Some(PlaylistRef {
            playlist_id: input.to_string(),
            video_id: None,
        });
    };

    let query = |key: &str| {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    };

    Some(PlaylistRef {
        playlist_id: query("list")?,
        video_id: query("v"),
    })
}
