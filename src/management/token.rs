use chrono::Utc;

use crate::config;

/// Minimum number of seconds between two reloads of the environment file.
const DEFAULT_RELOAD_INTERVAL: i64 = 5;

/// Supplies the current bearer token for Spotify Web API calls.
///
/// The token lives in the environment (`SPOTIFY_ACCESS_TOKEN`) and is
/// refreshed on disk by an external process. The provider re-reads the
/// `.env` file at most once per reload interval so repeated calls within a
/// workflow don't hammer the filesystem. Refresh requires `&mut self`, so
/// two callers can never reload concurrently.
pub struct TokenProvider {
    last_reload: i64,
    reload_interval: i64,
}

impl TokenProvider {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_RELOAD_INTERVAL)
    }

    pub fn with_interval(reload_interval: i64) -> Self {
        TokenProvider {
            last_reload: 0,
            reload_interval,
        }
    }

    /// Returns the current bearer token, reloading the environment file
    /// first if the reload interval has elapsed. `None` means no token is
    /// configured; callers must treat that as a normal, handleable outcome.
    pub fn current_token(&mut self) -> Option<String> {
        let now = Utc::now().timestamp();
        if now - self.last_reload >= self.reload_interval {
            config::reload_env();
            self.last_reload = now;
        }

        config::spotify_access_token()
    }
}

impl Default for TokenProvider {
    fn default() -> Self {
        TokenProvider::new()
    }
}
