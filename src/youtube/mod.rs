//! Playlist loading against the YouTube Data API `playlistItems` endpoint.
//!
//! Pages are fetched one at a time, following `nextPageToken`, and every
//! item is turned into a [`TrackDescriptor`] before the caller's factory
//! builds its own track type.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod link;
pub mod loader;
pub mod models;

pub use error::LoadError;
pub use fetch::{HttpPageFetcher, PageSource};
pub use link::{PlaylistRef, parse_playlist_ref};
pub use loader::{TrackFactory, load_playlist};
pub use models::{LoadOptions, Playlist, TrackDescriptor};
