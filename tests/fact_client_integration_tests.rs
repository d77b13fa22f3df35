use std::time::Duration;

use whiskers::core::action::{Action, Effect, update};
use whiskers::core::names::NameGenerator;
use whiskers::core::state::{App, FactState};
use whiskers::facts::{CatFactClient, FactError, FactSource};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const FALLBACK: &str = "No fact today, the cats are busy.";

/// Creates a mounted page, as the TUI does on its first frame.
fn mounted_page() -> App {
    let mut app = App::new(NameGenerator::seeded(1), FALLBACK.to_string());
    assert_eq!(update(&mut app, Action::Mount), Effect::FetchFact);
    app
}

/// Runs the client and feeds the outcome back through the reducer.
async fn load_into(app: &mut App, client: &CatFactClient) {
    let action = match client.fetch_fact().await {
        Ok(fact) => Action::FactLoaded(fact),
        Err(e) => Action::FactFailed(e.to_string()),
    };
    update(app, action);
}

// ============================================================================
// CatFactClient Tests
// ============================================================================

#[tokio::test]
async fn test_successful_fact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"fact":"A group of cats is called a clowder.","length":36}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CatFactClient::new(Some(mock_server.uri()), None);
    let fact = client.fetch_fact().await.unwrap();
    assert_eq!(fact, "A group of cats is called a clowder.");
}

#[tokio::test]
async fn test_successful_fact_reaches_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"fact":"Cats can rotate their ears 180 degrees.","length":40}"#),
        )
        .mount(&mock_server)
        .await;

    let mut app = mounted_page();
    assert!(app.is_loading());
    load_into(&mut app, &CatFactClient::new(Some(mock_server.uri()), None)).await;
    assert!(!app.is_loading());
    assert_eq!(
        app.fact,
        FactState::Loaded("Cats can rotate their ears 180 degrees.".to_string())
    );
}

#[tokio::test]
async fn test_api_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = CatFactClient::new(Some(mock_server.uri()), None);
    match client.fetch_fact().await {
        Err(FactError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_shows_fallback_on_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let mut app = mounted_page();
    load_into(&mut app, &CatFactClient::new(Some(mock_server.uri()), None)).await;
    assert!(!app.is_loading());
    assert_eq!(app.fact, FactState::Failed(FALLBACK.to_string()));
}

#[tokio::test]
async fn test_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": ["not", "a", "fact"]}"#))
        .mount(&mock_server)
        .await;

    let client = CatFactClient::new(Some(mock_server.uri()), None);
    assert!(matches!(client.fetch_fact().await, Err(FactError::Parse(_))));
}

#[tokio::test]
async fn test_empty_fact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"fact":"   ","length":3}"#))
        .mount(&mock_server)
        .await;

    let client = CatFactClient::new(Some(mock_server.uri()), None);
    assert!(matches!(client.fetch_fact().await, Err(FactError::Empty)));
}

#[tokio::test]
async fn test_slow_api_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"fact":"Too slow.","length":9}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = CatFactClient::new(Some(mock_server.uri()), Some(Duration::from_millis(200)));
    assert!(matches!(client.fetch_fact().await, Err(FactError::Network(_))));
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop a server so the port is very likely closed
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = CatFactClient::new(Some(uri), Some(Duration::from_secs(2)));
    assert!(matches!(client.fetch_fact().await, Err(FactError::Network(_))));
}
