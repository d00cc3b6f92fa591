use reqwest::{Client, StatusCode};

use crate::{
    errors::{PlaylistError, Stage},
    management::TokenProvider,
    types::{
        AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse,
        GetUserPlaylistsResponse, MatchResult, PlaylistReport,
    },
    utils,
};

use super::{REQUEST_TIMEOUT, search, user};

/// Description attached to every playlist this tool creates.
const PLAYLIST_DESCRIPTION: &str = "A playlist created by the mixcli music assistant.";

/// Name shown for playlists the API returns without one.
const UNKNOWN_PLAYLIST: &str = "Unknown Playlist";

/// Creates a new private playlist owned by the given user.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - The new playlist's ID and name
/// - `Err(PlaylistError)` - `Upstream(Stage::CreatePlaylist)` for any status
///   other than 201 Created, or a transport failure
pub async fn create(
    api_url: &str,
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, PlaylistError> {
    let client = Client::new();
    let api_url = format!("{uri}/users/{id}/playlists", uri = api_url, id = user_id);

    let payload = CreatePlaylistRequest {
        name: name.to_string(),
        description: PLAYLIST_DESCRIPTION.to_string(),
        public: false,
    };

    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .timeout(REQUEST_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| PlaylistError::transport(Stage::CreatePlaylist, e))?;

    if response.status() != StatusCode::CREATED {
        return Err(PlaylistError::upstream(Stage::CreatePlaylist));
    }

    response
        .json::<CreatePlaylistResponse>()
        .await
        .map_err(|e| PlaylistError::transport(Stage::CreatePlaylist, e))
}

/// Inserts tracks into a playlist in a single batched call.
///
/// Insertion order follows the order of `uris`.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(())` - All tracks were added
/// - `Err(PlaylistError)` - `Upstream(Stage::AddTracks)` for any status
///   other than 201 Created, or a transport failure
pub async fn add_tracks(
    api_url: &str,
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<(), PlaylistError> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = api_url,
        id = playlist_id
    );

    let payload = AddTrackToPlaylistRequest { uris };

    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .timeout(REQUEST_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| PlaylistError::transport(Stage::AddTracks, e))?;

    if response.status() != StatusCode::CREATED {
        return Err(PlaylistError::upstream(Stage::AddTracks));
    }

    Ok(())
}

/// Builds a playlist from a raw, delimited song list.
///
/// This is the end-to-end workflow behind the `create` CLI command. The
/// stages run sequentially and short-circuit on the first failure:
///
/// 1. Acquire the bearer token from the provider
/// 2. Tokenize `songs_raw` (comma+space, newline, or bare comma delimited)
/// 3. Resolve every query against the catalog ([`search::resolve_tracks`])
/// 4. Fetch the user's identity
/// 5. Create a new private playlist with that owner
/// 6. Insert all matched track URIs in one batched call, in match order
///
/// Songs that could not be matched are not an error as long as at least one
/// track matched; they are carried in the report's `songs_not_found` list
/// and appended to its message as a note. Only a batch with zero matches
/// fails, naming every query that missed.
///
/// # Arguments
///
/// * `api_url` - Base URL of the Spotify Web API
/// * `tokens` - Token provider; the composition root decides which instance
///   to supply
/// * `name` - Caller-supplied playlist name
/// * `songs_raw` - Delimited free-text song list
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistReport)` - Summary message plus found/not-found song lists
/// - `Err(PlaylistError)` - The first stage failure; no HTTP call is made
///   for a missing credential or an empty song list
///
/// # Example
///
/// ```
/// let mut tokens = TokenProvider::new();
/// let report = build(&api_url, &mut tokens, "Road Trip", "Hotel California, Imagine").await?;
/// println!("{}", report.message);
/// ```
pub async fn build(
    api_url: &str,
    tokens: &mut TokenProvider,
    name: &str,
    songs_raw: &str,
) -> Result<PlaylistReport, PlaylistError> {
    let token = tokens
        .current_token()
        .ok_or(PlaylistError::MissingCredential)?;

    let queries = utils::parse_song_list(songs_raw);
    if queries.is_empty() {
        return Err(PlaylistError::NoValidInput);
    }

    let matches = search::resolve_tracks(api_url, Some(token.as_str()), &queries).await?;

    let mut track_uris = Vec::new();
    let mut songs_added = Vec::new();
    let mut songs_not_found = Vec::new();

    for result in matches {
        match result {
            MatchResult::Found { uri, display_name } => {
                track_uris.push(uri);
                songs_added.push(display_name);
            }
            MatchResult::NotFound { query } => songs_not_found.push(query),
        }
    }

    if track_uris.is_empty() {
        return Err(PlaylistError::NoMatches {
            not_found: songs_not_found,
        });
    }

    let user_id = user::current_user_id(api_url, &token).await?;
    let playlist = create(api_url, &token, &user_id, name).await?;
    add_tracks(api_url, &token, &playlist.id, track_uris).await?;

    let mut message = format!(
        "Playlist '{}' created successfully with {} songs!",
        name,
        songs_added.len()
    );
    if !songs_not_found.is_empty() {
        message.push_str(&format!(
            "\n\nNote: {} songs could not be found on Spotify: {}",
            songs_not_found.len(),
            songs_not_found.join(", ")
        ));
    }

    Ok(PlaylistReport {
        message,
        playlist_name: name.to_string(),
        total_songs: songs_added.len(),
        songs_added,
        songs_not_found,
    })
}

/// Fetches the names of the caller's playlists, in server order.
///
/// A playlist the API returns without a name is listed as
/// "Unknown Playlist".
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<String>)` - One name per playlist
/// - `Err(PlaylistError)` - `MissingCredential` before any HTTP call when no
///   token is configured, or `Upstream(Stage::FetchPlaylists)` on a
///   non-success status or transport failure
pub async fn list_names(
    api_url: &str,
    tokens: &mut TokenProvider,
) -> Result<Vec<String>, PlaylistError> {
    let token = tokens
        .current_token()
        .ok_or(PlaylistError::MissingCredential)?;

    let client = Client::new();
    let api_url = format!("{uri}/me/playlists", uri = api_url);

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|e| PlaylistError::transport(Stage::FetchPlaylists, e))?;

    if !response.status().is_success() {
        return Err(PlaylistError::upstream(Stage::FetchPlaylists));
    }

    let playlists = response
        .json::<GetUserPlaylistsResponse>()
        .await
        .map_err(|e| PlaylistError::transport(Stage::FetchPlaylists, e))?;

    Ok(playlists
        .items
        .into_iter()
        .map(|p| p.name.unwrap_or_else(|| UNKNOWN_PLAYLIST.to_string()))
        .collect())
}
