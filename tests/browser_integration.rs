#![cfg(target_arch = "wasm32")]

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::pair;
use leptos::*;
use signal_dashboard_wasm::application::DashboardStore;
use signal_dashboard_wasm::domain::dashboard::{DashboardAction, DashboardState};
use signal_dashboard_wasm::domain::logging::{LogComponent, LogEntry, LogLevel};
use signal_dashboard_wasm::domain::market_data::StatusReport;
use signal_dashboard_wasm::domain::errors::{InfrastructureError, InfrastructureResult, NetworkError};
use signal_dashboard_wasm::infrastructure::DashboardHttpClient;
use signal_dashboard_wasm::infrastructure::http::race_timeout;
use signal_dashboard_wasm::infrastructure::rendering::LineChartRenderer;
use signal_dashboard_wasm::infrastructure::services::ConsoleLogger;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn signal_store_batches_into_one_notification() {
    let store = create_rw_signal(DashboardState::new());
    let notifications = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&notifications);
    create_effect(move |_| {
        store.track();
        counter.set(counter.get() + 1);
    });
    let before = notifications.get();

    let changed = store.dispatch_batch(vec![
        DashboardAction::SetStatus(StatusReport::offline()),
        DashboardAction::RefreshStarted,
        DashboardAction::RefreshFinished,
    ]);

    assert_eq!(changed, 3);
    assert_eq!(notifications.get(), before + 1);
    assert_eq!(store.read(|state| state.status().is_offline()), Some(true));
}

#[wasm_bindgen_test]
fn disposed_signal_store_ignores_writes() {
    let store = create_rw_signal(DashboardState::new());
    store.dispose();

    assert!(!store.dispatch(DashboardAction::SelectPair(pair("EURUSD"))));
    assert_eq!(store.read(|state| state.pending_chart_token()), None);
}

#[wasm_bindgen_test]
fn candle_path_encodes_pair() {
    assert_eq!(DashboardHttpClient::candles_path(&pair("EURUSD")), "api/data/EURUSD");
    assert_eq!(DashboardHttpClient::candles_path(&pair("BTC/USD")), "api/data/BTC%2FUSD");
}

#[wasm_bindgen_test]
fn base_url_loses_trailing_slash() {
    let client = DashboardHttpClient::new("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[wasm_bindgen_test]
fn console_format_includes_metadata() {
    let entry = LogEntry::new(LogLevel::Warn, LogComponent::Infrastructure("HTTP"), "HTTP 503").with_metadata("/api/status");
    assert_eq!(
        ConsoleLogger::format_log_entry(&entry, "12:00:00.000"),
        "[12:00:00.000]  WARN INF:HTTP | HTTP 503 | /api/status"
    );
}

#[wasm_bindgen_test(async)]
async fn stalled_request_times_out() {
    let stalled = futures::future::pending::<InfrastructureResult<String>>();

    let result = race_timeout(stalled, 20).await;

    assert_eq!(result, Err(InfrastructureError::Network(NetworkError::Timeout { after_ms: 20 })));
}

#[wasm_bindgen_test(async)]
async fn body_read_after_headers_shares_the_deadline() {
    let slow_body = async {
        // Headers arrived; the body trickles in past the deadline.
        gloo_timers::future::sleep(std::time::Duration::from_millis(200)).await;
        Ok::<_, InfrastructureError>("[]".to_string())
    };

    let result = race_timeout(slow_body, 20).await;

    assert!(matches!(result, Err(InfrastructureError::Network(NetworkError::Timeout { .. }))));
}

#[wasm_bindgen_test(async)]
async fn fast_request_passes_through() {
    let result = race_timeout(async { Ok::<_, InfrastructureError>(7) }, 1_000).await;
    assert_eq!(result, Ok(7));
}

#[wasm_bindgen_test]
fn chart_renders_onto_fresh_canvas() {
    use wasm_bindgen::JsCast;

    let canvas: web_sys::HtmlCanvasElement = gloo::utils::document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();

    let renderer = LineChartRenderer::new(320, 200);
    assert_eq!(renderer.render(&canvas, &common::candles(&[1.0, 1.2, 1.1])), Ok(()));
    assert_eq!((canvas.width(), canvas.height()), (320, 200));
}
