//! Area aggregation tests
//!
//! Tests the per-area breakdown against a mock weather server:
//! - Area order and display names follow the configured table
//! - Unknown cities make no upstream calls
//! - Failed areas are left out

use serde_json::{json, Value};
use shared::{areas, Category, TrendPolicy, WindUnit};
use weather_backend::services::{AreaService, WeatherService};
use weather_backend::{WeatherClient, WeatherError};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(name: &str, main: &str, temp: f64) -> Value {
    json!({
        "weather": [{ "main": main, "description": "scattered clouds", "icon": "03d" }],
        "main": { "temp": temp, "humidity": 65 },
        "wind": { "speed": 3.1 },
        "name": name
    })
}

fn area_service(server: &MockServer) -> AreaService {
    let client = WeatherClient::with_base_url("test-key".to_string(), server.uri());
    AreaService::new(WeatherService::new(
        client,
        WindUnit::MetresPerSecond,
        TrendPolicy::default(),
    ))
}

#[tokio::test]
async fn test_london_areas_in_configured_order() {
    let server = MockServer::start().await;

    // Upstream resolves every sub-area to the parent city name
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("London", "Clouds", 15.2)))
        .expect(6)
        .mount(&server)
        .await;

    let result = area_service(&server).fetch_area_weather("london").await.unwrap();

    assert_eq!(result.city, "London");
    let names: Vec<&str> = result.areas.iter().map(|r| r.display_name.as_str()).collect();
    let expected: Vec<&str> = areas::areas_for("London").unwrap().to_vec();
    assert_eq!(names, expected);

    assert_eq!(result.areas[0].query_name, "Westminster,London");
    assert!(result.areas.iter().all(|r| r.trend.is_none()));
    assert_eq!(result.dominant_category, Category::Cloudy);
}

#[tokio::test]
async fn test_area_queries_include_city_and_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "West End,Glasgow,GB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Glasgow", "Rain", 8.0)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Glasgow", "Drizzle", 8.0)))
        .expect(3)
        .mount(&server)
        .await;

    let result = area_service(&server).fetch_area_weather("Glasgow").await.unwrap();

    assert_eq!(result.areas.len(), 4);
    assert_eq!(result.areas[0].display_name, "West End");
}

#[tokio::test]
async fn test_unknown_city_makes_no_calls() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = area_service(&server).fetch_area_weather("atlantis").await.unwrap_err();

    match err {
        WeatherError::UnknownCity(city) => assert_eq!(city, "Atlantis"),
        other => panic!("expected UnknownCity, got {other:?}"),
    }
}

#[tokio::test]
async fn test_all_areas_failing_yields_empty_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let result = area_service(&server).fetch_area_weather("Leeds").await.unwrap();

    assert_eq!(result.city, "Leeds");
    assert!(result.areas.is_empty());
    assert_eq!(result.dominant_category, Category::Default);
}

#[tokio::test]
async fn test_failed_areas_are_skipped() {
    let server = MockServer::start().await;

    for area in ["Camden", "Brixton"] {
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", format!("{area},London,GB")))
            .respond_with(ResponseTemplate::new(404))
            .with_priority(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("London", "Clear", 21.0)))
        .mount(&server)
        .await;

    let result = area_service(&server).fetch_area_weather("London").await.unwrap();

    let names: Vec<&str> = result.areas.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Westminster", "Greenwich", "Chelsea", "Stratford"]);
    assert_eq!(result.dominant_category, Category::Sunny);
}

#[tokio::test]
async fn test_dominant_category_from_first_area() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Everton,Liverpool,GB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Liverpool", "Thunderstorm", 12.0)))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Liverpool", "Clear", 12.0)))
        .mount(&server)
        .await;

    let result = area_service(&server).fetch_area_weather("Liverpool").await.unwrap();

    assert_eq!(result.areas.len(), 4);
    assert_eq!(result.areas[0].category, Category::Danger);
    assert_eq!(result.areas[1].category, Category::Sunny);
    assert_eq!(result.dominant_category, Category::Danger);
}
