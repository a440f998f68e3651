//! Tests for authentication, session handling, and the catalog surface.
//!
//! These tests use mock servers to verify client behavior without a
//! real backend.

use resonate_client::{
    AuthState, ClientConfig, ClientError, FileSessionBackend, ResonateClient, SessionStore,
};
use resonate_core::{CreateRelease, UserId, UserType};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ResonateClient {
    ResonateClient::new(ClientConfig::new(server.uri()), SessionStore::in_memory())
        .expect("valid client")
}

fn login_body(token: &str, verified: bool) -> serde_json::Value {
    serde_json::json!({
        "userId": "artist-1",
        "token": token,
        "userType": "artist",
        "emailVerified": verified
    })
}

// =============================================================================
// Login
// =============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn successful_login_persists_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(serde_json::json!({
                "email": "a@example.com",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.auth().login("a@example.com", "hunter2").await.unwrap();

        assert_eq!(response.user_id, UserId::new("artist-1"));
        assert!(client.session().is_authenticated());
        assert_eq!(client.session().token().as_deref(), Some("tok-1"));
        assert_eq!(client.session().user_type(), Some(UserType::Artist));
    }

    #[tokio::test]
    async fn unverified_email_surfaces_distinct_error_and_persists_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", false)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.auth().login("a@example.com", "hunter2").await;

        assert!(matches!(result, Err(ClientError::EmailNotVerified)));
        assert!(!client.session().is_authenticated());
        assert!(client.session().token().is_none());
    }

    #[tokio::test]
    async fn rejected_credentials_leave_existing_session_intact() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(serde_json::json!({"email": "good@example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-good", true)))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(serde_json::json!({"email": "bad@example.com"})))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.auth().login("good@example.com", "pw").await.unwrap();

        let result = client.auth().login("bad@example.com", "pw").await;
        assert!(matches!(result, Err(ClientError::InvalidCredentials)));

        // Prior session untouched by the failed login
        assert_eq!(client.session().token().as_deref(), Some("tok-good"));
    }

    #[tokio::test]
    async fn login_against_unreachable_server_is_a_transport_error() {
        let client = ResonateClient::new(
            ClientConfig::new("http://127.0.0.1:9"),
            SessionStore::in_memory(),
        )
        .unwrap();

        let result = client.auth().login("a@example.com", "pw").await;
        assert!(result.unwrap_err().is_transport());
    }
}

// =============================================================================
// Registration
// =============================================================================

mod registration {
    use super::*;

    #[tokio::test]
    async fn register_creates_pending_account_without_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_partial_json(serde_json::json!({
                "email": "new@example.com",
                "userType": "artist"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"userId": "artist-9"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .auth()
            .register("new@example.com", "pw", UserType::Artist, Some("bio"))
            .await
            .unwrap();

        assert_eq!(response.user_id, UserId::new("artist-9"));

        // No session, but the pending user type is queryable with no
        // further network round trip.
        assert!(!client.session().is_authenticated());
        assert!(client.session().token().is_none());
        assert_eq!(client.session().user_type(), Some(UserType::Artist));
        assert!(matches!(
            client.session().state(),
            AuthState::PendingVerification { .. }
        ));
    }

    #[tokio::test]
    async fn registering_replaces_a_persisted_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-old", true)))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"userId": "fan-2"})),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        let session =
            SessionStore::open(Box::new(FileSessionBackend::new(&session_path))).unwrap();
        let client =
            ResonateClient::new(ClientConfig::new(server.uri()), session).unwrap();

        client.auth().login("old@example.com", "pw").await.unwrap();
        client
            .auth()
            .register("new@example.com", "pw", UserType::Fan, None)
            .await
            .unwrap();

        assert!(client.session().token().is_none());

        // The old token is gone from disk too: a reopened store must
        // not log back in as the previous user.
        let reopened =
            SessionStore::open(Box::new(FileSessionBackend::new(&session_path))).unwrap();
        assert_eq!(reopened.state(), AuthState::Anonymous);
        assert!(reopened.token().is_none());
    }

    #[tokio::test]
    async fn rejected_registration_leaves_state_anonymous() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"message": "email already in use"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .auth()
            .register("dup@example.com", "pw", UserType::Fan, None)
            .await;

        match result.unwrap_err() {
            ClientError::Validation { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("already in use"));
            }
            e => panic!("Expected Validation error, got: {e:?}"),
        }
        assert_eq!(client.session().state(), AuthState::Anonymous);
    }

    #[tokio::test]
    async fn resend_verification_changes_no_state() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"userId": "fan-3"})),
            )
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/resend-verification"))
            .and(body_partial_json(serde_json::json!({"email": "new@example.com"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .auth()
            .register("new@example.com", "pw", UserType::Fan, None)
            .await
            .unwrap();

        let before = client.session().state();

        // Idempotent from the client's perspective
        client.auth().resend_verification_email("new@example.com").await.unwrap();
        client.auth().resend_verification_email("new@example.com").await.unwrap();

        assert_eq!(client.session().state(), before);
    }
}

// =============================================================================
// Logout
// =============================================================================

mod logout {
    use super::*;

    #[tokio::test]
    async fn logout_clears_session_unconditionally() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.auth().login("a@example.com", "pw").await.unwrap();
        assert!(client.session().is_authenticated());

        client.auth().logout();

        assert_eq!(client.session().state(), AuthState::Anonymous);
        assert!(client.session().token().is_none());

        // Logging out again from anonymous is fine too
        client.auth().logout();
        assert_eq!(client.session().state(), AuthState::Anonymous);
    }

    #[tokio::test]
    async fn requests_after_logout_fail_with_authorization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        // No /releases mock mounted: the request must fail before any
        // network call is made.
        let client = client_for(&server);
        client.auth().login("a@example.com", "pw").await.unwrap();
        client.auth().logout();

        let draft = CreateRelease::new(UserId::new("artist-1"), "EP", "2026-01-01T00:00:00Z");
        let result = client.releases().create(&draft).await;

        assert!(matches!(result, Err(ClientError::AuthRequired)));
        assert!(result.unwrap_err().is_authorization());
    }
}

// =============================================================================
// Catalog
// =============================================================================

mod catalog {
    use super::*;

    #[tokio::test]
    async fn public_listing_needs_no_session() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/releases/public"))
            .and(query_param("page", "0"))
            .and(query_param("size", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{
                    "id": 7,
                    "artistId": "artist-1",
                    "title": "First Light",
                    "releaseDate": "2026-09-01T00:00:00Z"
                }],
                "total": 1
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let page = client.releases().list_public(0, 20).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.content[0].title, "First Light");
    }

    #[tokio::test]
    async fn release_detail_includes_tracks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/releases/public/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 7,
                "artistId": "artist-1",
                "title": "First Light",
                "releaseDate": "2026-09-01T00:00:00Z",
                "tracks": [
                    {"id": 1, "title": "Opening Theme", "duration": 212.5},
                    {"id": 2, "title": "Interlude"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let release = client.releases().get_public(7).await.unwrap();

        let tracks = release.tracks.expect("tracks on detail response");
        assert_eq!(tracks.len(), 2);
        assert!(tracks[1].audio_file.is_none());
    }

    #[tokio::test]
    async fn missing_release_is_a_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/releases/public/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        match client.releases().get_public(99).await.unwrap_err() {
            ClientError::Api { status: 404, message } => assert!(message.contains("99")),
            e => panic!("Expected 404, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn create_release_attaches_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/releases"))
            .and(header("Authorization", "Bearer tok-1"))
            .and(body_partial_json(serde_json::json!({"title": "First Light"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42,
                "artistId": "artist-1",
                "title": "First Light",
                "releaseDate": "2026-09-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.auth().login("a@example.com", "pw").await.unwrap();

        let artist = client.session().user_id().unwrap();
        let draft = CreateRelease::new(artist, "First Light", "2026-09-01T00:00:00Z");
        let release = client.releases().create(&draft).await.unwrap();

        assert_eq!(release.id, 42);
    }

    #[tokio::test]
    async fn deleting_a_missing_release_surfaces_the_404() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/releases/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.auth().login("a@example.com", "pw").await.unwrap();

        match client.releases().delete(99).await.unwrap_err() {
            ClientError::Api { status: 404, message } => assert!(message.contains("99")),
            e => panic!("Expected 404, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn validation_rejection_is_classified() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/releases"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(serde_json::json!({"message": "title must not be empty"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.auth().login("a@example.com", "pw").await.unwrap();

        let draft = CreateRelease::new(UserId::new("artist-1"), "", "2026-09-01T00:00:00Z");
        match client.releases().create(&draft).await.unwrap_err() {
            ClientError::Validation { status: 422, message } => {
                assert!(message.contains("title"));
            }
            e => panic!("Expected Validation error, got: {e:?}"),
        }
    }
}

// =============================================================================
// Tracks
// =============================================================================

mod tracks {
    use super::*;
    use resonate_core::CreateTrack;

    async fn logged_in_client(server: &MockServer) -> ResonateClient {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(server)
            .await;

        let client = client_for(server);
        client.auth().login("a@example.com", "pw").await.unwrap();
        client
    }

    #[tokio::test]
    async fn updating_a_track_attaches_a_new_audio_file() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("PUT"))
            .and(path("/tracks/5"))
            .and(query_param("audioFileId", "9"))
            .and(header("Authorization", "Bearer tok-1"))
            .and(body_partial_json(serde_json::json!({"title": "Opening Theme (Remaster)"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 5,
                "title": "Opening Theme (Remaster)",
                "audioFile": {
                    "id": 9,
                    "fileIdentifier": "uploads/obj-9.flac",
                    "fileUrl": "https://cdn.example.com/obj-9.flac",
                    "fileSize": 1024,
                    "checksum": "deadbeef"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let changes = CreateTrack::new("Opening Theme (Remaster)");
        let track = client.tracks().update(5, &changes, Some(9)).await.unwrap();

        assert_eq!(track.id, 5);
        assert_eq!(track.audio_file.unwrap().id, 9);
    }

    #[tokio::test]
    async fn deleting_a_track() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/tracks/5"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client.tracks().delete(5).await.unwrap();
    }

    #[tokio::test]
    async fn deleting_a_missing_track_surfaces_the_404() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/tracks/77"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        match client.tracks().delete(77).await.unwrap_err() {
            ClientError::Api { status: 404, message } => assert!(message.contains("77")),
            e => panic!("Expected 404, got: {e:?}"),
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

mod profiles {
    use super::*;
    use resonate_client::{UpdateArtistProfile, UpdateFanProfile};

    async fn logged_in_client(server: &MockServer) -> ResonateClient {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(server)
            .await;

        let client = client_for(server);
        client.auth().login("a@example.com", "pw").await.unwrap();
        client
    }

    #[tokio::test]
    async fn artist_profile_round_trip() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/artist-profiles"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "artist-1",
                "biography": "Makes quiet music.",
                "socialLinks": {"web": "https://artist.example"},
                "createdAt": "2026-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/artist-profiles"))
            .and(header("Authorization", "Bearer tok-1"))
            .and(body_partial_json(serde_json::json!({"biography": "Makes loud music."})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "artist-1",
                "biography": "Makes loud music.",
                "socialLinks": {"web": "https://artist.example"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = client.profiles().get_artist_profile().await.unwrap();
        assert_eq!(profile.biography, "Makes quiet music.");
        assert_eq!(
            profile.social_links.get("web").map(String::as_str),
            Some("https://artist.example")
        );

        let changes = UpdateArtistProfile {
            biography: Some("Makes loud music.".into()),
            ..Default::default()
        };
        let updated = client.profiles().update_artist_profile(&changes).await.unwrap();
        assert_eq!(updated.biography, "Makes loud music.");
    }

    #[tokio::test]
    async fn fan_profile_round_trip() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/fan-profiles"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "fan-1",
                "subscriptionActive": false
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/fan-profiles"))
            .and(body_partial_json(serde_json::json!({"subscriptionActive": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "userId": "fan-1",
                "subscriptionActive": true,
                "subscriptionStartDate": "2026-08-23T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = client.profiles().get_fan_profile().await.unwrap();
        assert!(!profile.subscription_active);

        let changes = UpdateFanProfile {
            subscription_active: Some(true),
        };
        let updated = client.profiles().update_fan_profile(&changes).await.unwrap();
        assert!(updated.subscription_active);
        assert!(updated.subscription_start_date.is_some());
    }

    #[tokio::test]
    async fn profile_requires_session() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let result = client.profiles().get_artist_profile().await;
        assert!(matches!(result, Err(ClientError::AuthRequired)));
    }

    #[tokio::test]
    async fn expired_token_maps_to_authorization_error() {
        let server = MockServer::start().await;
        let client = logged_in_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/artist-profiles"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&server)
            .await;

        let result = client.profiles().get_artist_profile().await;
        assert!(matches!(result, Err(ClientError::AuthRequired)));
    }
}

// =============================================================================
// Streaming
// =============================================================================

mod streaming {
    use super::*;

    #[tokio::test]
    async fn streaming_url_is_fetched_for_audio_file() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(login_body("tok-1", true)))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/audio-files/9/stream"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "streamingUrl": "https://cdn.example.com/signed/abc.flac"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.auth().login("a@example.com", "pw").await.unwrap();

        let url = client.audio_files().streaming_url(9).await.unwrap();
        assert_eq!(url, "https://cdn.example.com/signed/abc.flac");
    }

    #[tokio::test]
    async fn streaming_url_requires_session() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let result = client.audio_files().streaming_url(9).await;
        assert!(matches!(result, Err(ClientError::AuthRequired)));
    }
}
