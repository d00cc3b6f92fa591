use reqwest::Client;

use crate::{
    errors::PlaylistError,
    types::{MatchResult, SearchTracksResponse},
};

use super::REQUEST_TIMEOUT;

/// Resolves a batch of free-text song queries to catalog tracks.
///
/// Issues one search request per query, restricted to the single most
/// relevant hit, and records a [`MatchResult`] for every query. The output
/// has exactly one entry per input query, in input order.
///
/// # Arguments
///
/// * `api_url` - Base URL of the Spotify Web API
/// * `token` - Bearer token, or `None` when no credential is configured
/// * `queries` - Trimmed free-text song descriptions, ideally including
///   artist names for better matching
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<MatchResult>)` - One hit or miss per input query
/// - `Err(PlaylistError::MissingCredential)` - No token was supplied; the
///   whole batch is short-circuited before any request is issued
///
/// # Failure Semantics
///
/// A transport error, a non-success status, or an empty result set for one
/// query yields `NotFound` for that query only; the remaining queries are
/// still resolved. There are no retries.
///
/// # Example
///
/// ```
/// let queries = vec!["Bohemian Rhapsody by Queen".to_string()];
/// let matches = resolve_tracks(&api_url, Some(&token), &queries).await?;
/// assert_eq!(matches.len(), queries.len());
/// ```
pub async fn resolve_tracks(
    api_url: &str,
    token: Option<&str>,
    queries: &[String],
) -> Result<Vec<MatchResult>, PlaylistError> {
    let token = token.ok_or(PlaylistError::MissingCredential)?;

    let client = Client::new();
    let mut matches = Vec::with_capacity(queries.len());

    for query in queries {
        matches.push(search_track(&client, api_url, token, query.trim()).await);
    }

    Ok(matches)
}

/// Searches the catalog for a single query, returning the top hit if any.
///
/// The display name of a hit is formatted as
/// `"<track title> by <comma-joined artist names>"`.
async fn search_track(client: &Client, api_url: &str, token: &str, query: &str) -> MatchResult {
    let api_url = format!(
        "{uri}/search?q={q}&type=track&limit=1",
        uri = api_url,
        q = urlencoding::encode(query),
    );

    let not_found = || MatchResult::NotFound {
        query: query.to_string(),
    };

    let response = match client
        .get(&api_url)
        .bearer_auth(token)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(_) => return not_found(),
    };

    if !response.status().is_success() {
        return not_found();
    }

    let results = match response.json::<SearchTracksResponse>().await {
        Ok(json) => json,
        Err(_) => return not_found(),
    };

    match results.tracks.items.first() {
        Some(track) => {
            let artists = track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            MatchResult::Found {
                uri: track.uri.clone(),
                display_name: format!("{} by {}", track.name, artists),
            }
        }
        None => not_found(),
    }
}
