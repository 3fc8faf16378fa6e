//! HTTP integration tests
//!
//! Drive the full router with axum-test against in-memory feeds.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::{TestServer, TestServerConfig, Transport};
    use serde_json::Value;

    use crate::app::PageService;
    use crate::config::{Config, Limits};
    use crate::domain::entities::FeedItem;
    use crate::test_utils::{scenario_live_feed, test_item, InMemoryFeedSource};
    use crate::{build_router, AppState};

    const LIVE: &str = "live.json";
    const ARCHIVE: &str = "archive.json";

    fn config(data_dir: PathBuf) -> Config {
        Config {
            port: 0,
            data_dir,
            live_feed: LIVE.to_string(),
            archive_feed: ARCHIVE.to_string(),
            hero_interval: Duration::from_secs(7),
            limits: Limits::default(),
        }
    }

    fn app_with(source: InMemoryFeedSource, data_dir: PathBuf) -> axum::Router {
        let config = config(data_dir);
        let page_service = Arc::new(PageService::new(
            Arc::new(source),
            config.live_feed.clone(),
            config.archive_feed.clone(),
            config.limits,
        ));
        build_router(AppState {
            page_service,
            config,
        })
    }

    fn server_with(source: InMemoryFeedSource, data_dir: PathBuf) -> TestServer {
        TestServer::new(app_with(source, data_dir)).unwrap()
    }

    /// WebSocket routes need a real socket
    fn live_server() -> TestServer {
        let source = InMemoryFeedSource::new()
            .with_feed(LIVE, scenario_live_feed())
            .with_feed(ARCHIVE, vec![]);
        let config = TestServerConfig {
            transport: Some(Transport::HttpRandomPort),
            ..TestServerConfig::default()
        };
        TestServer::new_with_config(app_with(source, std::env::temp_dir()), config).unwrap()
    }

    /// Final `active` flag sent for a tab
    fn last_active(patches: &[Value], target: &str) -> Option<bool> {
        patches
            .iter()
            .rev()
            .find(|p| p["op"] == "active" && p["target"] == target)
            .and_then(|p| p["active"].as_bool())
    }

    /// HTML appended to the latest grid after its last clear
    fn latest_grid_html(patches: &[Value]) -> String {
        let last_clear = patches
            .iter()
            .rposition(|p| p["op"] == "clear" && p["target"] == "latestGrid")
            .unwrap();
        patches[last_clear..]
            .iter()
            .filter(|p| p["op"] == "append" && p["target"] == "latestGrid")
            .filter_map(|p| p["html"].as_str())
            .collect()
    }

    fn scenario_server() -> TestServer {
        let source = InMemoryFeedSource::new()
            .with_feed(LIVE, scenario_live_feed())
            .with_feed(ARCHIVE, vec![test_item("archive_1", "LATEST")]);
        server_with(source, std::env::temp_dir())
    }

    fn grid<'a>(snapshot: &'a Value, key: &str) -> &'a Value {
        snapshot["grids"]
            .as_array()
            .unwrap()
            .iter()
            .find(|g| g["grid"] == key)
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = scenario_server();

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn home_renders_html_without_caching() {
        let server = scenario_server();

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header("cache-control"), "no-store");
        let html = response.text();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"data-id="latest_new""#));
        assert!(html.contains(r#"id="memeEmpty""#));
    }

    #[tokio::test]
    async fn home_snapshot_matches_selection() {
        let server = scenario_server();

        let response = server
            .get("/")
            .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let snapshot = response.json::<Value>();
        assert_eq!(
            snapshot["hero_pool"],
            serde_json::json!(["latest_new", "latest_mid", "sports_1"])
        );
        assert_eq!(snapshot["active_tab"], "LATEST");
        assert_eq!(snapshot["ticker"].as_array().unwrap().len(), 8);
        assert_eq!(grid(&snapshot, "latest")["items"].as_array().unwrap().len(), 3);
        assert_eq!(grid(&snapshot, "meme")["empty"], true);
        assert_eq!(grid(&snapshot, "archive")["items"], serde_json::json!(["archive_1"]));
    }

    #[tokio::test]
    async fn home_tab_query_filters_latest_grid() {
        let server = scenario_server();

        let response = server
            .get("/")
            .add_query_param("tab", "SPORTS")
            .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .await;

        let snapshot = response.json::<Value>();
        assert_eq!(snapshot["active_tab"], "SPORTS");
        assert_eq!(grid(&snapshot, "latest")["items"], serde_json::json!(["sports_1"]));
        assert_eq!(snapshot["hero_index"], 0);
    }

    #[tokio::test]
    async fn home_rejects_unknown_tab() {
        let server = scenario_server();

        let response = server.get("/").add_query_param("tab", "WEATHER").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn home_reports_unavailable_feed() {
        let source = InMemoryFeedSource::new()
            .with_feed(LIVE, scenario_live_feed())
            .failing(ARCHIVE);
        let server = server_with(source, std::env::temp_dir());

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Feed unavailable");
        assert_eq!(body["details"], ARCHIVE);
    }

    #[tokio::test]
    async fn empty_feeds_render_empty_states() {
        let source = InMemoryFeedSource::new()
            .with_feed(LIVE, vec![])
            .with_feed(ARCHIVE, vec![]);
        let server = server_with(source, std::env::temp_dir());

        let response = server
            .get("/")
            .add_header(header::ACCEPT, HeaderValue::from_static("application/json"))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let snapshot = response.json::<Value>();
        assert_eq!(snapshot["hero_pool"], serde_json::json!([]));
        for key in ["latest", "real", "sports", "meme", "archive"] {
            assert_eq!(grid(&snapshot, key)["empty"], true, "grid {}", key);
        }
    }

    #[tokio::test]
    async fn article_lookup() {
        let server = scenario_server();

        let found = server
            .get("/api/article")
            .add_query_param("id", "archive_1")
            .await;
        assert_eq!(found.status_code(), StatusCode::OK);
        let item = found.json::<FeedItem>();
        assert_eq!(item.id, "archive_1");

        let missing = server.get("/api/article").add_query_param("id", "nope").await;
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let no_id = server.get("/api/article").await;
        assert_eq!(no_id.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn data_files_are_served_from_data_dir() {
        let dir = std::env::temp_dir().join(format!("iriline-data-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("live.json"), r#"{"items":[]}"#).unwrap();
        let server = server_with(InMemoryFeedSource::new(), dir.clone());

        let response = server.get("/data/live.json").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header("cache-control"), "no-store");
        assert_eq!(response.header("content-type"), "application/json");
        assert_eq!(response.text(), r#"{"items":[]}"#);

        let missing = server.get("/data/archive.json").await;
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let traversal = server.get("/data/..%2Fsecret").await;
        assert_eq!(traversal.status_code(), StatusCode::BAD_REQUEST);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn live_session_opens_on_requested_tab() {
        let server = live_server();

        let mut ws = server
            .get_websocket("/live?tab=SPORTS")
            .await
            .into_websocket()
            .await;
        let patches: Vec<Value> = ws.receive_json().await;

        assert_eq!(last_active(&patches, "tab-SPORTS"), Some(true));
        assert_eq!(last_active(&patches, "tab-LATEST"), Some(false));
        let grid = latest_grid_html(&patches);
        assert!(grid.contains(r#"data-id="sports_1""#));
        assert!(!grid.contains(r#"data-id="latest_new""#));
    }

    #[tokio::test]
    async fn live_session_defaults_to_latest_and_switches_tabs() {
        let server = live_server();

        let mut ws = server.get_websocket("/live").await.into_websocket().await;
        let initial: Vec<Value> = ws.receive_json().await;
        assert_eq!(last_active(&initial, "tab-LATEST"), Some(true));
        assert!(latest_grid_html(&initial).contains(r#"data-id="latest_new""#));

        ws.send_json(&serde_json::json!({"tab": "MEME"})).await;
        let switched: Vec<Value> = ws.receive_json().await;

        assert_eq!(last_active(&switched, "tab-MEME"), Some(true));
        assert_eq!(last_active(&switched, "tab-LATEST"), Some(false));
        assert!(latest_grid_html(&switched).is_empty());
        assert!(switched
            .iter()
            .any(|p| p["op"] == "visible" && p["target"] == "latestEmpty" && p["visible"] == true));
    }

    #[tokio::test]
    async fn live_rejects_unknown_tab() {
        let server = live_server();

        let response = server.get_websocket("/live?tab=WEATHER").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
