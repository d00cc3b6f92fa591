//! # CLI Module
//!
//! This module provides the command-line interface layer for mixcli. It
//! implements the user-facing commands and coordinates between the token
//! provider, the Spotify integration layer, and terminal output.
//!
//! ## Commands
//!
//! - [`create`] - Builds a playlist from a free-text song list: resolves
//!   every song against the catalog, creates a private playlist, inserts
//!   the matched tracks, and reports hits and misses.
//! - [`playlists`] - Lists the user's existing playlists as a table.
//!
//! ## Architecture Design
//!
//! The CLI layer is the composition root: it constructs the
//! [`crate::management::TokenProvider`], reads the API base URL from
//! configuration, and passes both into the library workflow. The workflow
//! itself never reaches for globals, which is also what makes it testable
//! against a mock server.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Spotify Layer (Workflow, API calls)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Workflow failures arrive as typed [`crate::errors::PlaylistError`]
//! values carrying their caller-facing message; the CLI prints them through
//! the house macros and exits nonzero. Partial failures (songs that could
//! not be matched) are part of the success report and are surfaced as a
//! note, not an error.

mod create;
mod playlists;

pub use create::create;
pub use playlists::playlists;
