//! Best-effort launch of the local Spotify client.
//!
//! Opening the client after a successful build is a convenience, nothing
//! more: every failure path here ends in a warning, never an error, and the
//! workflow result is already decided by the time this runs.

use std::process::Command;

use crate::warning;

/// Asks the operating system to open the Spotify client.
///
/// Platform-specific and best-effort; if the launcher binary is missing or
/// refuses, a warning is printed and nothing else happens.
pub fn open_spotify_client() {
    if launch().is_err() {
        warning!("Could not launch the Spotify client. Open it manually to see the playlist.");
    }
}

#[cfg(target_os = "macos")]
fn launch() -> std::io::Result<()> {
    Command::new("open").args(["-a", "Spotify"]).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn launch() -> std::io::Result<()> {
    Command::new("cmd").args(["/C", "start", "spotify:"]).spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launch() -> std::io::Result<()> {
    Command::new("xdg-open").arg("spotify:").spawn()?;
    Ok(())
}
