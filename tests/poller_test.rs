//! Integration tests against a mock sensor backend.
//!
//! Run with: cargo test --test poller_test

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;

use sensor_panel::client::SensorClient;
use sensor_panel::common::AppState;
use sensor_panel::config::Config;
use sensor_panel::dom::Document;
use sensor_panel::error::TransportError;
use sensor_panel::panel::{MediaState, Panel, StatusState};
use sensor_panel::poll::{probe, scheduler, worker};
use sensor_panel::schema::{NOT_AVAILABLE, PLACEHOLDER_TARGET, STATUS_TARGET, Schema, VIDEO_TARGET};

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn setup(base_url: String, schema: Schema) -> (AppState, Document) {
    let config = Config {
        base_url,
        schema,
        poll_interval_ms: 100,
        ..Config::default()
    };
    let doc = Document::with_memory_elements(&schema.target_ids());
    let panel = Panel::bind(&doc, schema);
    let client = SensorClient::new(&config).unwrap();
    (AppState::new(config, client, panel), doc)
}

#[tokio::test]
async fn key_value_payload_is_rendered() {
    let app = Router::new().route(
        "/sensor_data",
        get(|| async { Json(json!({"value": 23.5, "key": "temp"})) }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::KeyValue);

    let rendered = worker::poll_once(&state).await;

    assert_eq!(rendered, Some(StatusState::ShowingData));
    assert_eq!(doc.text_of(STATUS_TARGET).unwrap(), "Key: temp\nValue: 23.5");
}

#[tokio::test]
async fn environment_payload_is_rendered() {
    let app = Router::new().route(
        "/sensor_data",
        get(|| async {
            Json(json!({"Temperature": 24, "Humidity": 61, "Moisture": 44.5, "CO2": 398.2}))
        }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::Environment);

    worker::poll_once(&state).await;

    assert_eq!(doc.text_of("temperature").unwrap(), "24");
    assert_eq!(doc.text_of("humidity").unwrap(), "61");
    assert_eq!(doc.text_of("moisture").unwrap(), "44.5");
    assert_eq!(doc.text_of("co2").unwrap(), "398.2");
}

#[tokio::test]
async fn backend_error_payload_is_a_domain_error() {
    let app = Router::new().route(
        "/sensor_data",
        get(|| async { Json(json!({"error": "sensor disconnected"})) }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::Environment);

    let rendered = worker::poll_once(&state).await;

    assert_eq!(rendered, Some(StatusState::ShowingDomainError));
    assert_eq!(doc.text_of(STATUS_TARGET).unwrap(), "sensor disconnected");
    assert_eq!(doc.text_of("temperature").unwrap(), NOT_AVAILABLE);
}

#[tokio::test]
async fn server_error_status_is_a_transport_error() {
    // Body is ignored for non-2xx, even if it looks like a reading.
    let app = Router::new().route(
        "/sensor_data",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"key": "temp", "value": 1})),
            )
        }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::KeyValue);

    let err = state.client.get_sensor_data().await.unwrap_err();
    assert!(matches!(err, TransportError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));

    worker::poll_once(&state).await;
    assert_eq!(
        doc.text_of(STATUS_TARGET).unwrap(),
        "Error fetching sensor data: Network response was not ok"
    );
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let app = Router::new().route("/sensor_data", get(|| async { "definitely not json" }));
    let (state, doc) = setup(spawn_backend(app).await, Schema::KeyValue);

    let rendered = worker::poll_once(&state).await;

    assert_eq!(rendered, Some(StatusState::ShowingTransportError));
    let status = doc.text_of(STATUS_TARGET).unwrap();
    assert!(status.starts_with("Error fetching sensor data: "), "{status}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (state, doc) = setup(format!("http://{addr}"), Schema::KeyValue);

    let err = state.client.get_sensor_data().await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));

    worker::poll_once(&state).await;
    let status = doc.text_of(STATUS_TARGET).unwrap();
    assert!(status.starts_with("Error fetching sensor data: "), "{status}");
    assert_eq!(state.panel.status_state(), StatusState::ShowingTransportError);
}

#[tokio::test]
async fn video_probe_reports_load_and_error() {
    let ok = Router::new().route("/video_feed", get(|| async { "frame" }));
    let (state, doc) = setup(spawn_backend(ok).await, Schema::KeyValue);

    assert_eq!(probe::probe_once(&state).await, MediaState::Loaded);
    assert_eq!(doc.is_visible(VIDEO_TARGET), Some(true));
    assert_eq!(doc.is_visible(PLACEHOLDER_TARGET), Some(false));

    // No /video_feed route: 404
    let missing = Router::new();
    let (state, doc) = setup(spawn_backend(missing).await, Schema::KeyValue);

    assert_eq!(probe::probe_once(&state).await, MediaState::Unavailable);
    assert_eq!(doc.is_visible(VIDEO_TARGET), Some(false));
    assert_eq!(doc.is_visible(PLACEHOLDER_TARGET), Some(true));
}

#[tokio::test]
async fn poller_fires_immediately_then_on_cadence() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/sensor_data",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({"key": "k", "value": 1}))
            }
        }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::KeyValue);

    let task = tokio::spawn(scheduler::run_poller(state));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(doc.text_of(STATUS_TARGET).unwrap(), "Key: k\nValue: 1");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let after = hits.load(Ordering::SeqCst);
    task.abort();
    assert!((3..=5).contains(&after), "got {after} polls");
}

#[tokio::test]
async fn slow_responses_do_not_delay_ticks() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/sensor_data",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(1000)).await;
                Json(json!({"key": "k", "value": 1}))
            }
        }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::KeyValue);

    let task = tokio::spawn(scheduler::run_poller(state));
    tokio::time::sleep(Duration::from_millis(450)).await;
    task.abort();

    // Several requests are in flight at once; none has rendered yet.
    assert!(hits.load(Ordering::SeqCst) >= 3);
    assert_eq!(doc.text_of(STATUS_TARGET).unwrap(), "");
}

#[tokio::test]
async fn overlapping_cycles_all_complete() {
    let app = Router::new().route(
        "/sensor_data",
        get(|| async { Json(json!({"key": "k", "value": 7})) }),
    );
    let (state, doc) = setup(spawn_backend(app).await, Schema::KeyValue);

    let results = futures::future::join_all((0..4).map(|_| worker::poll_once(&state))).await;

    assert!(results.iter().all(|r| *r == Some(StatusState::ShowingData)));
    assert_eq!(doc.text_of(STATUS_TARGET).unwrap(), "Key: k\nValue: 7");
}
