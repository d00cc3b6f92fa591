use thiserror::Error;

/// The workflow stages that talk to the Spotify Web API. Each stage carries
/// its caller-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Profile,
    CreatePlaylist,
    AddTracks,
    FetchPlaylists,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Stage::Profile => "Failed to fetch user profile.",
            Stage::CreatePlaylist => "Failed to create playlist.",
            Stage::AddTracks => "Failed to add tracks to playlist.",
            Stage::FetchPlaylists => "Failed to fetch playlists.",
        };
        f.write_str(msg)
    }
}

/// Failure classes of the playlist workflow.
///
/// Partial failures (some songs unmatched while at least one matched) are
/// not errors; they travel inside the success report instead.
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("No valid access token available")]
    MissingCredential,

    #[error("No valid songs provided")]
    NoValidInput,

    #[error("No songs could be found on Spotify. Not found: {}", .not_found.join(", "))]
    NoMatches { not_found: Vec<String> },

    #[error("{stage}")]
    Upstream {
        stage: Stage,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl PlaylistError {
    /// A non-success HTTP status at the given stage.
    pub fn upstream(stage: Stage) -> Self {
        PlaylistError::Upstream {
            stage,
            source: None,
        }
    }

    /// A transport-level failure (connect, timeout, decode) at the given stage.
    pub fn transport(stage: Stage, source: reqwest::Error) -> Self {
        PlaylistError::Upstream {
            stage,
            source: Some(source),
        }
    }
}
