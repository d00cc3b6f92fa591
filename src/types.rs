use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TracksContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksContainer {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub name: Option<String>,
}

/// Outcome of resolving one free-text song query against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Found { uri: String, display_name: String },
    NotFound { query: String },
}

/// Terminal report of a successful playlist build, returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistReport {
    pub message: String,
    pub playlist_name: String,
    pub songs_added: Vec<String>,
    pub songs_not_found: Vec<String>,
    pub total_songs: usize,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
}
