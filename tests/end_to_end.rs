//! End-to-end tests: upstream fetch, store load, and the HTTP front end
//!
//! Runs a fake upstream and the real router on ephemeral local ports.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use airports::cache::{AirportQuery, AirportStore, StoreState};
use airports::data::{AirportSource, FlatAirport, UpstreamClient};
use airports::server;

/// Upstream payload: one complete record, one without state, one missing its
/// city, and one null entry
fn upstream_payload() -> Value {
    json!([
        {
            "airportCode": "SYD",
            "airportName": "Sydney Kingsford",
            "location": {"latitude": -33.946, "longitude": 151.177},
            "city": {
                "cityCode": "SYD",
                "cityName": "Sydney",
                "timeZoneName": "Australia/Sydney",
                "state": {"stateCode": "NSW", "stateName": "New South Wales"}
            },
            "country": {"countryCode": "AU", "countryName": "Australia"},
            "region": {"regionCode": "AU", "regionName": "Australia"}
        },
        {
            "airportCode": "DRW",
            "airportName": "Darwin International",
            "location": {"latitude": -12.415, "longitude": 130.877},
            "city": {
                "cityCode": "DRW",
                "cityName": "Darwin",
                "timeZoneName": "Australia/Darwin"
            },
            "country": {"countryCode": "AU", "countryName": "Australia"},
            "region": {"regionCode": "AU", "regionName": "Australia"}
        },
        {
            "airportCode": "NOCITY",
            "airportName": "Nowhere",
            "location": {"latitude": 0.0, "longitude": 0.0},
            "country": {"countryCode": "XX", "countryName": "Nowhere"},
            "region": {"regionCode": "XX", "regionName": "Nowhere"}
        },
        null
    ])
}

/// Serves `router` on an ephemeral port and returns its address
async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_upstream(body: Value) -> SocketAddr {
    spawn(Router::new().route(
        "/airports",
        get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    ))
    .await
}

fn client_for(addr: SocketAddr) -> UpstreamClient {
    UpstreamClient::with_timeout(format!("http://{}/airports", addr), Duration::from_secs(5))
        .unwrap()
}

async fn loaded_store() -> Arc<AirportStore> {
    let upstream = spawn_upstream(upstream_payload()).await;
    let store = Arc::new(AirportStore::new());
    store.load(&client_for(upstream)).await;
    store
}

#[tokio::test]
async fn test_upstream_client_parses_null_entries() {
    let upstream = spawn_upstream(upstream_payload()).await;
    let airports = client_for(upstream).fetch_all().await;

    assert_eq!(airports.len(), 4);
    assert!(airports[3].is_none());
    assert_eq!(airports[0].as_ref().unwrap().airport_code, "SYD");
}

#[tokio::test]
async fn test_upstream_null_body_yields_empty() {
    let upstream = spawn_upstream(Value::Null).await;
    assert!(client_for(upstream).fetch_all().await.is_empty());
}

#[tokio::test]
async fn test_upstream_error_status_yields_empty() {
    let upstream = spawn(Router::new().route(
        "/airports",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let client = client_for(upstream);
    assert!(client.try_fetch_all().await.is_err());
    assert!(client.fetch_all().await.is_empty());
}

#[tokio::test]
async fn test_upstream_malformed_body_yields_empty() {
    let upstream = spawn(Router::new().route("/airports", get(|| async { "<html>oops</html>" }))).await;
    assert!(client_for(upstream).fetch_all().await.is_empty());
}

#[tokio::test]
async fn test_load_keeps_only_complete_records() {
    let store = loaded_store().await;

    assert_eq!(store.state(), StoreState::Ready);
    assert_eq!(store.len(), 2);

    let darwin = store.get("DRW").unwrap();
    assert!(darwin.state_code.is_none());
    assert!(darwin.state_name.is_none());
    assert_eq!(darwin.time_zone_name, "Australia/Darwin");
    assert!(store.get("NOCITY").is_none());
}

#[tokio::test]
async fn test_failed_upstream_still_reaches_ready() {
    let unreachable =
        UpstreamClient::with_timeout("http://127.0.0.1:9/airports", Duration::from_secs(2))
            .unwrap();
    let store = AirportStore::new();
    store.load(&unreachable).await;

    assert_eq!(store.state(), StoreState::Ready);
    assert!(store.query(&AirportQuery::new()).is_empty());
}

async fn get_json(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(format!("http://{}{}", addr, path)).await.unwrap();
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_http_list_without_filters_returns_all() {
    let addr = spawn(server::router(loaded_store().await)).await;

    let (status, body) = get_json(addr, "/api/v1/airports").await;
    assert_eq!(status, reqwest::StatusCode::OK);

    let airports: Vec<FlatAirport> = serde_json::from_value(body).unwrap();
    assert_eq!(airports.len(), 2);
    assert_eq!(airports[0].airport_code, "SYD");
    assert_eq!(airports[1].airport_code, "DRW");
}

#[tokio::test]
async fn test_http_filters_combine_and_ignore_blank_and_unknown() {
    let addr = spawn(server::router(loaded_store().await)).await;

    let (_, body) = get_json(addr, "/api/v1/airports?countryCode=au&stateCode=nsw").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["airportCode"], "SYD");
    assert_eq!(body[0]["stateName"], "New South Wales");

    let (_, body) = get_json(addr, "/api/v1/airports?countryCode=&foo=bar").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get_json(addr, "/api/v1/airports?airportName=KINGS").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["airportName"], "Sydney Kingsford");
}

#[tokio::test]
async fn test_http_no_match_returns_empty_array() {
    let addr = spawn(server::router(loaded_store().await)).await;

    let (status, body) = get_json(addr, "/api/v1/airports?countryCode=XYZ").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_http_health_and_admin_placeholders() {
    let addr = spawn(server::router(loaded_store().await)).await;
    let client = reqwest::Client::new();

    let (status, body) = get_json(addr, "/health").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["airports"], 2);

    // Cached airports are served before the mock
    let (status, body) = get_json(addr, "/api/v1/admin/airports/drw").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["airportName"], "Darwin International");

    let (status, _) = get_json(addr, "/api/v1/admin/airports/UNKNOWN").await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);

    let response = client
        .post(format!("http://{}/api/v1/admin/airports", addr))
        .json(&json!({"airportCode": "test", "airportName": "Test Airport"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    assert!(response.headers().contains_key("location"));

    let response = client
        .delete(format!("http://{}/api/v1/admin/airports/TEST", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    // Placeholders never touch the cache
    let (_, body) = get_json(addr, "/health").await;
    assert_eq!(body["airports"], 2);
}
