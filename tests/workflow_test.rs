use std::sync::{Mutex, MutexGuard};

use mockito::{Matcher, Server};

use mixcli::errors::{PlaylistError, Stage};
use mixcli::management::TokenProvider;
use mixcli::spotify::playlist::{build, list_names};
use mixcli::spotify::search::resolve_tracks;
use mixcli::types::MatchResult;

const TOKEN: &str = "test-token";

// The token provider reads the process environment, which is shared between
// test threads; every test that sets or removes the token holds this lock
// for its whole duration.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn set_token(value: Option<&str>) -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        match value {
            Some(v) => std::env::set_var("SPOTIFY_ACCESS_TOKEN", v),
            None => std::env::remove_var("SPOTIFY_ACCESS_TOKEN"),
        }
    }
    guard
}

fn search_body(title: &str, uri: &str, artist: &str) -> String {
    format!(
        r#"{{"tracks":{{"items":[{{"name":"{title}","uri":"{uri}","artists":[{{"name":"{artist}"}}]}}]}}}}"#
    )
}

const EMPTY_SEARCH_BODY: &str = r#"{"tracks":{"items":[]}}"#;

#[tokio::test]
async fn test_build_creates_playlist_and_reports_misses() {
    let _guard = set_token(Some(TOKEN));
    let mut server = Server::new_async().await;

    let hit = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Bohemian Rhapsody by Queen".into()),
            Matcher::UrlEncoded("type".into(), "track".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(search_body(
            "Bohemian Rhapsody",
            "spotify:track:4u7EnebtmKWzUH433cf5Qv",
            "Queen",
        ))
        .create_async()
        .await;

    let miss = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded(
            "q".into(),
            "NotARealSongXYZ123".into(),
        ))
        .with_status(200)
        .with_body(EMPTY_SEARCH_BODY)
        .create_async()
        .await;

    let profile = server
        .mock("GET", "/me")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"id":"user-1"}"#)
        .create_async()
        .await;

    let create = server
        .mock("POST", "/users/user-1/playlists")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "name": "Road Trip",
            "public": false,
        })))
        .with_status(201)
        .with_body(r#"{"id":"pl-1","name":"Road Trip"}"#)
        .create_async()
        .await;

    let add = server
        .mock("POST", "/playlists/pl-1/tracks")
        .match_body(Matcher::Json(serde_json::json!({
            "uris": ["spotify:track:4u7EnebtmKWzUH433cf5Qv"],
        })))
        .with_status(201)
        .with_body(r#"{"snapshot_id":"snap-1"}"#)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let report = build(
        &server.url(),
        &mut tokens,
        "Road Trip",
        "Bohemian Rhapsody by Queen, NotARealSongXYZ123",
    )
    .await
    .expect("one match is enough for the workflow to succeed");

    assert_eq!(report.playlist_name, "Road Trip");
    assert_eq!(report.songs_added, vec!["Bohemian Rhapsody by Queen"]);
    assert_eq!(report.songs_not_found, vec!["NotARealSongXYZ123"]);
    assert_eq!(report.total_songs, 1);
    assert!(
        report
            .message
            .contains("Playlist 'Road Trip' created successfully with 1 songs!")
    );
    assert!(report.message.contains("NotARealSongXYZ123"));

    hit.assert_async().await;
    miss.assert_async().await;
    profile.assert_async().await;
    create.assert_async().await;
    add.assert_async().await;
}

#[tokio::test]
async fn test_build_without_token_makes_no_calls() {
    let _guard = set_token(None);
    let mut server = Server::new_async().await;

    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let err = build(&server.url(), &mut tokens, "Road Trip", "Imagine")
        .await
        .unwrap_err();

    assert!(matches!(err, PlaylistError::MissingCredential));
    assert_eq!(err.to_string(), "No valid access token available");

    any_get.assert_async().await;
    any_post.assert_async().await;
}

#[tokio::test]
async fn test_build_with_empty_song_list_makes_no_calls() {
    let _guard = set_token(Some(TOKEN));
    let mut server = Server::new_async().await;

    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let err = build(&server.url(), &mut tokens, "Empty", "")
        .await
        .unwrap_err();

    assert!(matches!(err, PlaylistError::NoValidInput));
    assert_eq!(err.to_string(), "No valid songs provided");

    any_get.assert_async().await;
    any_post.assert_async().await;
}

#[tokio::test]
async fn test_build_fails_when_nothing_matches() {
    let _guard = set_token(Some(TOKEN));
    let mut server = Server::new_async().await;

    let searches = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(EMPTY_SEARCH_BODY)
        .expect(2)
        .create_async()
        .await;

    let profile = server
        .mock("GET", "/me")
        .expect(0)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let err = build(
        &server.url(),
        &mut tokens,
        "Ghost Tracks",
        "FirstMissingSong, SecondMissingSong",
    )
    .await
    .unwrap_err();

    match &err {
        PlaylistError::NoMatches { not_found } => {
            assert_eq!(not_found, &vec!["FirstMissingSong", "SecondMissingSong"]);
        }
        other => panic!("expected NoMatches, got {:?}", other),
    }
    assert!(err.to_string().contains("FirstMissingSong"));
    assert!(err.to_string().contains("SecondMissingSong"));

    searches.assert_async().await;
    profile.assert_async().await;
}

#[tokio::test]
async fn test_build_aborts_when_playlist_creation_fails() {
    let _guard = set_token(Some(TOKEN));
    let mut server = Server::new_async().await;

    let search = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(search_body("Imagine", "spotify:track:imagine", "John Lennon"))
        .create_async()
        .await;

    let profile = server
        .mock("GET", "/me")
        .with_status(200)
        .with_body(r#"{"id":"user-1"}"#)
        .create_async()
        .await;

    let create = server
        .mock("POST", "/users/user-1/playlists")
        .with_status(403)
        .with_body(r#"{"error":{"status":403,"message":"Insufficient client scope"}}"#)
        .create_async()
        .await;

    let add = server
        .mock("POST", Matcher::Regex(r"^/playlists/.+/tracks$".to_string()))
        .expect(0)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let err = build(&server.url(), &mut tokens, "Road Trip", "Imagine")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlaylistError::Upstream {
            stage: Stage::CreatePlaylist,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Failed to create playlist.");

    search.assert_async().await;
    profile.assert_async().await;
    create.assert_async().await;
    add.assert_async().await;
}

#[tokio::test]
async fn test_resolve_preserves_input_order() {
    let mut server = Server::new_async().await;

    let hit = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "First Song".into()))
        .with_status(200)
        .with_body(search_body("First Song", "spotify:track:first", "Artist A"))
        .create_async()
        .await;

    let miss = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "Second Song".into()))
        .with_status(200)
        .with_body(EMPTY_SEARCH_BODY)
        .create_async()
        .await;

    let queries = vec!["First Song".to_string(), "Second Song".to_string()];
    let matches = resolve_tracks(&server.url(), Some(TOKEN), &queries)
        .await
        .expect("a token was supplied");

    assert_eq!(matches.len(), queries.len());
    assert_eq!(
        matches[0],
        MatchResult::Found {
            uri: "spotify:track:first".to_string(),
            display_name: "First Song by Artist A".to_string(),
        }
    );
    assert_eq!(
        matches[1],
        MatchResult::NotFound {
            query: "Second Song".to_string(),
        }
    );

    hit.assert_async().await;
    miss.assert_async().await;
}

#[tokio::test]
async fn test_resolve_treats_http_failure_as_not_found() {
    let mut server = Server::new_async().await;

    let search = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let queries = vec!["Imagine".to_string()];
    let matches = resolve_tracks(&server.url(), Some(TOKEN), &queries)
        .await
        .expect("a token was supplied");

    assert_eq!(
        matches,
        vec![MatchResult::NotFound {
            query: "Imagine".to_string(),
        }]
    );

    search.assert_async().await;
}

#[tokio::test]
async fn test_resolve_without_token_short_circuits() {
    let queries = vec!["Imagine".to_string()];
    let err = resolve_tracks("http://127.0.0.1:1", None, &queries)
        .await
        .unwrap_err();

    assert!(matches!(err, PlaylistError::MissingCredential));
}

#[tokio::test]
async fn test_list_names_defaults_missing_names() {
    let _guard = set_token(Some(TOKEN));
    let mut server = Server::new_async().await;

    let playlists = server
        .mock("GET", "/me/playlists")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"items":[{"name":"A"},{}]}"#)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let names = list_names(&server.url(), &mut tokens)
        .await
        .expect("listing should succeed");

    assert_eq!(names, vec!["A", "Unknown Playlist"]);

    playlists.assert_async().await;
}

#[tokio::test]
async fn test_list_names_without_token_makes_no_calls() {
    let _guard = set_token(None);
    let mut server = Server::new_async().await;

    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let err = list_names(&server.url(), &mut tokens).await.unwrap_err();

    assert!(matches!(err, PlaylistError::MissingCredential));

    any_get.assert_async().await;
}

#[tokio::test]
async fn test_list_names_upstream_failure() {
    let _guard = set_token(Some(TOKEN));
    let mut server = Server::new_async().await;

    let playlists = server
        .mock("GET", "/me/playlists")
        .with_status(500)
        .create_async()
        .await;

    let mut tokens = TokenProvider::new();
    let err = list_names(&server.url(), &mut tokens).await.unwrap_err();

    assert!(matches!(
        err,
        PlaylistError::Upstream {
            stage: Stage::FetchPlaylists,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Failed to fetch playlists.");

    playlists.assert_async().await;
}

#[test]
fn test_token_provider_ignores_blank_token() {
    let _guard = set_token(Some("   "));

    let mut tokens = TokenProvider::new();
    assert!(tokens.current_token().is_none());
}
