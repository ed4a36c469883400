//! OpenWeather provider and search state against a mock HTTP server.

use chrono::NaiveDate;
use weather_core::{
    Condition, ErrorKind, FetchError, OpenWeatherProvider, SearchOutcome, WeatherProvider,
    WeatherState,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn london_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "base": "stations",
        "main": {"temp": 283.15, "feels_like": 282.2, "pressure": 1012, "humidity": 70},
        "visibility": 10000,
        "wind": {"speed": 3.5, "deg": 240},
        "dt": 1736000000,
        "sys": {"country": "GB", "sunrise": 1735977000, "sunset": 1736006000},
        "timezone": 0,
        "name": "London",
        "cod": 200
    })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".to_string()).with_base_url(server.uri())
}

fn jan_3_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
}

#[tokio::test]
async fn fetches_current_weather_by_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_response()))
        .expect(1)
        .mount(&server)
        .await;

    let snap = provider_for(&server).current("London").await.unwrap();

    assert_eq!(snap.place, "London");
    assert_eq!(snap.country, "GB");
    assert_eq!(snap.condition, Condition::Rain);
    assert_eq!(snap.humidity_pct, 70.0);
}

#[tokio::test]
async fn location_with_spaces_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_response()))
        .expect(1)
        .mount(&server)
        .await;

    assert!(provider_for(&server).current("New York").await.is_ok());
}

#[tokio::test]
async fn not_found_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = provider_for(&server).current("Atlantis").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkOrHttp);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(err.to_string().contains("city not found"));
}

#[tokio::test]
async fn unexpected_shape_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "X"})))
        .mount(&server)
        .await;

    let err = provider_for(&server).current("X").await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let provider = OpenWeatherProvider::new("k".to_string()).with_base_url("http://127.0.0.1:1");
    let err = provider.current("London").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert_eq!(err.kind(), ErrorKind::NetworkOrHttp);
}

#[tokio::test]
async fn end_to_end_card_for_london() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_response()))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let mut state = WeatherState::new("London");
    assert!(state.search(&provider).await.is_applied());

    let text = state.card(jan_3_2025()).expect("card after success").to_string();

    assert!(text.contains("London, GB"));
    assert!(text.contains("Date: 03/01/25"));
    assert!(text.contains("💧"));
    assert!(text.contains("10.00°C / 50.00°F"));
    assert!(text.contains("Light rain"));
    assert!(text.contains("70%"));
    assert!(text.contains("3.5 m/s"));
}

#[tokio::test]
async fn failed_search_keeps_last_good_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_response()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let mut state = WeatherState::new("London");
    state.search(&provider).await;
    let before = state.card(jan_3_2025());

    state.set_query("Atlantis");
    let outcome = state.search(&provider).await;

    assert_eq!(
        outcome,
        SearchOutcome::Failed { generation: 2, kind: ErrorKind::NetworkOrHttp }
    );
    assert_eq!(state.card(jan_3_2025()), before);
    assert!(!state.is_loading());
}
