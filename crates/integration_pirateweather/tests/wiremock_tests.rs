//! Integration tests for the forecast client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use std::time::Duration;

use domain::{BlockName, GeoLocation, Language, UnitSystem};
use integration_pirateweather::{
    ClientConfig, ForecastClient, ForecastError, ForecastRequest, PirateWeatherClient,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const FORECAST_PATH: &str = "/forecast/test-key/37.8267,-122.4233";

/// Trimmed Pirate Weather response for testing
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 37.8267,
        "longitude": -122.4233,
        "timezone": "America/Los_Angeles",
        "offset": -8.0,
        "currently": {
            "time": 1_509_993_277,
            "summary": "Drizzle",
            "icon": "rain",
            "temperature": 17.02,
            "humidity": 0.83,
            "windSpeed": 4.2,
            "precipProbability": 0.5
        },
        "hourly": {
            "summary": "Rain until evening.",
            "icon": "rain",
            "data": [
                {"time": 1_509_991_200, "temperature": 16.5},
                {"time": 1_509_994_800, "temperature": 17.1}
            ]
        },
        "daily": {
            "summary": "Light rain throughout the week.",
            "icon": "rain",
            "data": [
                {"time": 1_509_955_200, "temperatureHigh": 25.0, "temperatureLow": 12.0}
            ]
        },
        "flags": {
            "units": "si",
            "version": "V2.5.4",
            "sourceTimes": {"gfs": "2024-05-01 06Z"}
        },
        "alerts": [
            {
                "title": "Flood Watch",
                "severity": "watch",
                "time": 1_509_993_360,
                "expires": 1_510_036_680
            }
        ]
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> PirateWeatherClient {
    let config = ClientConfig {
        endpoint: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    PirateWeatherClient::new(config).expect("Failed to create client")
}

fn test_request() -> ForecastRequest {
    ForecastRequest::new("test-key", GeoLocation::new_unchecked(37.8267, -122.4233))
        .with_units(UnitSystem::Si)
}

/// Setup a mock for the forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_forecast_response())
            .insert_header("X-Forecast-API-Calls", "12"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&test_request()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert_eq!(forecast.currently().number("temperature"), Some(17.02));
    assert_eq!(forecast.hourly().len(), 2);
    assert_eq!(forecast.daily().len(), 1);
    assert_eq!(forecast.alerts().len(), 1);
    assert_eq!(forecast.flags().units(), Some("si"));
    assert_eq!(forecast.response().status, 200);
    assert_eq!(
        forecast.response().header("x-forecast-api-calls"),
        Some("12")
    );
}

#[tokio::test]
async fn test_missing_blocks_are_empty_not_errors() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currently": {"temperature": 3.0}
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let forecast = client.fetch(&test_request()).await.unwrap();

    assert!(forecast.daily().is_empty());
    assert!(forecast.daily().summary.is_none());
    assert!(forecast.alerts().is_empty());
    assert!(forecast.flags().is_empty());
}

#[tokio::test]
async fn test_update_replaces_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currently": {"temperature": 20.5},
            "alerts": []
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let mut forecast = client.fetch(&test_request()).await.unwrap();
    assert_eq!(forecast.alerts().len(), 1);

    client.update(&mut forecast).await.unwrap();

    assert_eq!(forecast.currently().number("temperature"), Some(20.5));
    assert!(forecast.alerts().is_empty());
    assert!(forecast.daily().is_empty());
}

#[tokio::test]
async fn test_fetch_missing_block_splices_block_in() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param(
            "exclude",
            "minutely,currently,hourly,flags,day_night,alerts",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "daily": {"summary": "Sunny", "data": [{"temperatureHigh": 25.0}]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param("extend", "hourly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currently": {"temperature": 3.0}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let mut forecast = client.fetch(&test_request()).await.unwrap();
    assert!(forecast.daily().is_empty());

    let fetched = client
        .fetch_missing_block(&mut forecast, BlockName::Daily)
        .await
        .unwrap();

    assert!(fetched);
    assert_eq!(forecast.daily().summary.as_deref(), Some("Sunny"));
    assert_eq!(forecast.currently().number("temperature"), Some(3.0));
}

#[tokio::test]
async fn test_fetch_missing_block_skips_present_block() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let mut forecast = client.fetch(&test_request()).await.unwrap();

    let fetched = client
        .fetch_missing_block(&mut forecast, BlockName::Hourly)
        .await
        .unwrap();
    assert!(!fetched);
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_forbidden_is_invalid_api_key() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(403).set_body_string("Forbidden"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&test_request()).await;

    assert!(
        matches!(result, Err(ForecastError::InvalidApiKey)),
        "Expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_upstream_status() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&test_request()).await;

    assert!(
        matches!(result, Err(ForecastError::Upstream { status: 500 })),
        "Expected Upstream 500, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_returns_upstream_status() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&test_request()).await;

    assert_eq!(result.unwrap_err().status(), Some(429));
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&test_request()).await;

    assert!(
        matches!(result, Err(ForecastError::Parse(_))),
        "Expected Parse, got: {result:?}"
    );
}

#[tokio::test]
async fn test_non_object_json_response() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch(&test_request()).await;

    assert!(matches!(result, Err(ForecastError::Parse(_))));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_forecast_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = PirateWeatherClient::new(ClientConfig {
        endpoint: mock_server.uri(),
        timeout_secs: 1,
        ..Default::default()
    })
    .unwrap();
    let result = client.fetch(&test_request()).await;

    assert!(
        matches!(result, Err(ForecastError::Transport(_))),
        "Expected Transport, got: {result:?}"
    );
}

#[tokio::test]
async fn test_transport_error_does_not_expose_api_key() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_forecast_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = PirateWeatherClient::new(ClientConfig {
        endpoint: mock_server.uri(),
        timeout_secs: 1,
        ..Default::default()
    })
    .unwrap();
    let err = client.fetch(&test_request()).await.unwrap_err();

    let message = err.to_string();
    assert!(!message.contains("test-key"), "key leaked: {message}");
    assert!(!format!("{err:?}").contains("test-key"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = PirateWeatherClient::new(ClientConfig {
        endpoint: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..Default::default()
    })
    .unwrap();

    let result = client.fetch(&test_request()).await;

    assert!(matches!(&result, Err(ForecastError::Transport(_))));
    assert!(!format!("{result:?}").contains("test-key"));
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param("units", "ca"))
        .and(query_param("lang", "de"))
        .and(query_param("extend", "hourly"))
        .and(query_param("version", "2"))
        .and(query_param("exclude", "gfs,nam"))
        .and(query_param("include", "day_night_forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = test_request()
        .with_units(UnitSystem::Ca)
        .with_language(Language::new("de").unwrap())
        .with_exclude(["gfs", "nam"]);
    let result = client.fetch(&request).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
