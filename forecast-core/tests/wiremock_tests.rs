//! HTTP-level tests for the forecast source and the forecast list, run
//! against a wiremock server.

use forecast_core::{FetchError, ForecastList, ForecastSource, ForecastState, HttpForecastSource};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn sample_forecast() -> serde_json::Value {
    serde_json::json!([
        { "date": "2024-10-12", "temperatureC": 32, "summary": "Hot", "temperatureF": 89 },
        { "date": "2024-10-13", "temperatureC": 35, "summary": "Sweltering", "temperatureF": 94 }
    ])
}

fn source_for(mock_server: &MockServer) -> HttpForecastSource {
    HttpForecastSource::new(format!("{}/weatherforecast", mock_server.uri()))
}

async fn mount_forecast(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weatherforecast"))
        .respond_with(response)
        .expect(1)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Source
// ============================================================================

#[tokio::test]
async fn fetch_issues_one_bare_get() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(sample_forecast())).await;

    let entries = source_for(&mock_server).fetch().await.expect("forecast");
    assert_eq!(entries.len(), 2);

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method.as_str(), "GET");
    assert_eq!(request.url.path(), "/weatherforecast");
    assert_eq!(request.url.query(), None);
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn fetch_keeps_server_order_and_values() {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!([
        { "date": "2024-10-14", "temperatureC": -3.5, "temperatureF": 25.7, "summary": "Freezing" },
        { "date": "2024-10-12", "temperatureC": 32, "temperatureF": 89, "summary": "Hot" }
    ]);
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let entries = source_for(&mock_server).fetch().await.expect("forecast");

    assert_eq!(entries[0].date, "2024-10-14");
    assert_eq!(entries[0].temperature_label(), "-3.5°C / 25.7°F");
    assert_eq!(entries[1].date, "2024-10-12");
    assert_eq!(entries[1].summary, "Hot");
}

#[tokio::test]
async fn server_error_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(500)).await;

    let err = source_for(&mock_server).fetch().await.unwrap_err();
    assert_eq!(err, FetchError::Failed("Request failed with status code 500".into()));
}

#[tokio::test]
async fn not_found_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(404)).await;

    let err = source_for(&mock_server).fetch().await.unwrap_err();
    assert_eq!(err.display_message(), "Request failed with status code 404");
}

#[tokio::test]
async fn malformed_body_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "date": "2024-10-12" }])),
    )
    .await;

    let err = source_for(&mock_server).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Failed(_)));
    assert!(err.display_message().contains("missing field"));
}

// ============================================================================
// Forecast list over HTTP
// ============================================================================

#[tokio::test]
async fn list_renders_forecast_from_server() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(sample_forecast())).await;

    let mut list = ForecastList::mount(source_for(&mock_server));
    let state = list.settled().await;
    assert!(matches!(state, ForecastState::Loaded { ref entries } if entries.len() == 2));

    let text = list.render().to_string();
    assert!(text.starts_with("Weather Forecast"));
    assert!(text.contains("Date: 2024-10-12"));
    assert!(text.contains("Temperature: 32°C / 89°F"));
    assert!(text.contains("Summary: Sweltering"));
    assert!(!text.contains("Loading..."));

    // Rendering again must not reach the server; `expect(1)` is checked on drop.
    let _ = list.render();
    let _ = list.render();
}

#[tokio::test]
async fn list_shows_error_for_server_failure() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(503)).await;

    let mut list = ForecastList::mount(source_for(&mock_server));
    list.settled().await;

    assert_eq!(
        list.render().to_string(),
        "Error: Request failed with status code 503"
    );
}

#[tokio::test]
async fn list_shows_heading_only_for_empty_forecast() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, ResponseTemplate::new(200).set_body_json(serde_json::json!([]))).await;

    let mut list = ForecastList::mount(source_for(&mock_server));
    list.settled().await;

    let view = list.render();
    assert_eq!(view.entry_count(), 0);
    assert_eq!(view.to_string(), "Weather Forecast");
}
