//! Configuration management for the Spotify playlist builder.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. The bearer token in particular is
//! expected to be refreshed on disk by an external process, so the `.env`
//! file can be re-read at runtime without restarting.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `mixcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/mixcli/.env`
/// - macOS: `~/Library/Application Support/mixcli/.env`
/// - Windows: `%LOCALAPPDATA%/mixcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error if directory creation or file loading fails. A missing file is an
/// error here; callers that can work from plain environment variables may
/// treat it as a warning.
///
/// # Example
///
/// ```
/// use mixcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> crate::Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    dotenvy::from_path(&path)?;
    Ok(())
}

/// Re-reads the `.env` file, overriding already-set process variables.
///
/// This is what makes a token refreshed on disk visible to a running
/// process: `load_env` would keep the stale value, the override variant
/// replaces it. A missing or unreadable file is ignored so that a token
/// exported directly into the environment keeps working without any
/// `.env` file at all.
pub fn reload_env() {
    let _ = dotenvy::from_path_override(env_path());
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mixcli/.env");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, falling back to the
/// production endpoint when unset. The override exists so integration tests
/// can point the client at a local mock server.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the current Spotify bearer token, if one is configured.
///
/// Reads the `SPOTIFY_ACCESS_TOKEN` environment variable. An unset or blank
/// value yields `None`; callers must treat that as a normal outcome and
/// surface a domain error rather than panicking.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty())
}
