use crate::youtube::error::LoadError;
use crate::youtube::extract::extract_tracks;
use crate::youtube::fetch::PageSource;
use crate::youtube::models::{LoadOptions, Playlist, PlaylistPage, TrackDescriptor};

/// Builds the caller's playable track type from a descriptor.
pub trait TrackFactory {
    type Track;

    fn build(&self, info: TrackDescriptor) -> Self::Track;
}

impl<F, T> TrackFactory for F
where
    F: Fn(TrackDescriptor) -> T,
{
    type Track = T;

    fn build(&self, info: TrackDescriptor) -> T {
        self(info)
    }
}

/// Everything gathered from the pages of one playlist, before track construction.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub name: String,
    pub tracks: Vec<TrackDescriptor>,
    pub pages_fetched: u32,
}

enum Stage {
    FirstPage,
    NextPage(String),
    Done,
}

/// Fetch pages one after another, following continuation tokens until the
/// playlist ends, a page comes back empty, or `max_page_count` pages were read.
pub async fn collect_pages<S: PageSource>(
    source: &S,
    playlist_id: &str,
    options: LoadOptions,
) -> Result<Collected, LoadError> {
    let max_pages = options.max_page_count.max(1);
    let mut out = Collected::default();
    let mut stage = Stage::FirstPage;

    loop {
        let token = match &stage {
            Stage::FirstPage => None,
            Stage::NextPage(t) => Some(t.as_str()),
            Stage::Done => break,
        };

        let page = match source.fetch_page(playlist_id, token).await {
            Ok(v) => PlaylistPage::from_json(v),
            Err(e) => {
                tracing::warn!(
                    playlist_id,
                    page = out.pages_fetched,
                    error = %e,
                    "playlist page fetch failed"
                );
                return Err(e);
            }
        };
        out.pages_fetched += 1;

        if matches!(stage, Stage::FirstPage) {
            out.name = page.display_name.clone().unwrap_or_default();
        }

        tracing::debug!(
            playlist_id,
            page = out.pages_fetched,
            items = page.items.as_ref().map_or(0, Vec::len),
            has_next = page.next_token.is_some(),
            "fetched playlist page"
        );

        let Some(items) = page.items.filter(|a| !a.is_empty()) else {
            stage = Stage::Done;
            continue;
        };
        out.tracks.extend(extract_tracks(&items));

        stage = match page.next_token {
            Some(t) if out.pages_fetched < max_pages => Stage::NextPage(t),
            _ => Stage::Done,
        };
    }

    Ok(out)
}

/// Build the final playlist. The selection is the first track whose id matches.
pub fn assemble<F: TrackFactory>(
    name: String,
    descriptors: Vec<TrackDescriptor>,
    selected_video_id: Option<&str>,
    factory: &F,
) -> Playlist<F::Track> {
    let selected =
        selected_video_id.and_then(|id| descriptors.iter().position(|t| t.external_id == id));
    let tracks = descriptors.into_iter().map(|d| factory.build(d)).collect();

    Playlist {
        name,
        tracks,
        selected,
        is_search_result: false,
    }
}

/// Load a whole playlist. Either every page succeeds or the load fails;
/// the factory only runs once all pages are in.
pub async fn load_playlist<S, F>(
    source: &S,
    playlist_id: &str,
    selected_video_id: Option<&str>,
    options: LoadOptions,
    factory: &F,
) -> Result<Playlist<F::Track>, LoadError>
where
    S: PageSource,
    F: TrackFactory,
{
    let playlist_id = playlist_id.trim();
    if playlist_id.is_empty() {
        return Err(LoadError::EmptyPlaylistId);
    }

    let collected = collect_pages(source, playlist_id, options).await?;
    let pages_fetched = collected.pages_fetched;
    let playlist = assemble(collected.name, collected.tracks, selected_video_id, factory);

    tracing::info!(
        playlist_id,
        name = %playlist.name,
        tracks = playlist.tracks.len(),
        pages = pages_fetched,
        selected = playlist.selected.is_some(),
        "loaded playlist"
    );
    Ok(playlist)
}
