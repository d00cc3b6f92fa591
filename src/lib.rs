//! Spotify Playlist Builder CLI Library
//!
//! This library provides the integration layer between a music assistant and
//! the Spotify Web API: it resolves free-text song descriptions to catalog
//! tracks, assembles them into a new private playlist, and lists the user's
//! existing playlists.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Domain error types for the playlist workflow
//! - `launcher` - Best-effort launch of the local Spotify client
//! - `management` - Bearer token acquisition and refresh
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use mixcli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() {
//!     let _ = config::load_env().await;
//!     // Use CLI functions...
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod launcher;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object, keeping Send + Sync bounds
/// for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates throughout the
/// application. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Resolving {} songs...", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Playlist created with {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Immediately terminates the program with exit code 1 after printing.
/// Only use for unrecoverable errors where continuing makes no sense.
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// error!("Failed to create playlist: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important notices that don't require
/// program termination. Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// warning!("{} songs could not be found", missing.len());
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
