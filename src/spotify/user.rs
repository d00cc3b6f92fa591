use reqwest::Client;

use crate::{
    errors::{PlaylistError, Stage},
    types::UserProfile,
};

use super::REQUEST_TIMEOUT;

/// Fetches the authenticated user's Spotify ID.
///
/// The ID identifies the owner of playlists created through the API; the
/// builder calls this once per workflow, right before playlist creation.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The user's Spotify ID
/// - `Err(PlaylistError)` - `Upstream(Stage::Profile)` for a non-success
///   status or transport failure
pub async fn current_user_id(api_url: &str, token: &str) -> Result<String, PlaylistError> {
    let client = Client::new();
    let api_url = format!("{uri}/me", uri = api_url);

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|e| PlaylistError::transport(Stage::Profile, e))?;

    if !response.status().is_success() {
        return Err(PlaylistError::upstream(Stage::Profile));
    }

    let profile = response
        .json::<UserProfile>()
        .await
        .map_err(|e| PlaylistError::transport(Stage::Profile, e))?;

    Ok(profile.id)
}
