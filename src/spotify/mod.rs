//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by mixcli:
//! catalog search, user identity, and playlist management. It is the primary
//! integration layer between the CLI and Spotify's services, handling all
//! HTTP communication and the conversion of non-success responses into
//! domain errors.
//!
//! ## Architecture
//!
//! Each submodule handles one domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Track Resolution (catalog search, hit/miss collection)
//!     ├── User Identity (profile lookup)
//!     └── Playlist Operations (create, insert tracks, list)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`search`] - Resolves free-text song queries to catalog track URIs,
//!   one search request per query, collecting hits and misses in input
//!   order. A single failed query never aborts a batch.
//! - [`user`] - Fetches the authenticated user's identity, needed as the
//!   owner of newly created playlists.
//! - [`playlist`] - Creates private playlists, inserts matched tracks in a
//!   single batched call, lists the user's existing playlists, and hosts
//!   the end-to-end `build` workflow that ties the stages together.
//!
//! ## Error Handling Philosophy
//!
//! Every external call's non-success status is checked and converted into a
//! [`crate::errors::PlaylistError`] before returning; nothing in this module
//! panics on API misbehavior. The workflow is fail-fast: a failed stage
//! aborts the remaining stages. There is no retry policy; the workflow is
//! single-shot and the caller decides whether to run it again.
//!
//! Track resolution is the deliberate exception: an individual search
//! failure (transport error, non-success status, or empty result set) is
//! recorded as a not-found entry so the rest of the batch still resolves.
//!
//! ## API Coverage
//!
//! - `GET /search?q=<query>&type=track&limit=1` - catalog search
//! - `GET /me` - user identity
//! - `GET /me/playlists` - the user's playlists
//! - `POST /users/{user_id}/playlists` - create a new playlist (expects 201)
//! - `POST /playlists/{playlist_id}/tracks` - insert tracks (expects 201)
//!
//! All requests carry a bearer token obtained from
//! [`crate::management::TokenProvider`] and are bounded by
//! [`REQUEST_TIMEOUT`].

pub mod playlist;
pub mod search;
pub mod user;

use std::time::Duration;

/// Upper bound applied to every outbound request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
