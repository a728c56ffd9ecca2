//! End-to-end checks of the JSON API against in-memory controllers.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Local;
use linkshare_api::{
    adapters::{StdRandomSource, SystemClock},
    config::Config,
    web::{router, AppState},
};
use linkshare_core::domain::PreviewDraft;
use linkshare_core::ports::{PortError, PortResult, PreviewGenerator};
use linkshare_core::SynthesizingGenerator;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tower::ServiceExt;

//=========================================================================================
// Harness
//=========================================================================================

fn state_with(generator: Arc<dyn PreviewGenerator>) -> Arc<AppState> {
    let config = Arc::new(Config {
        preview_delay: Duration::ZERO,
        random_seed: Some(7),
        ..Config::default()
    });
    let random = Arc::new(StdRandomSource::seeded(7));
    Arc::new(AppState::with_ports(config, random, Arc::new(SystemClock), generator))
}

fn synthesizing() -> SynthesizingGenerator {
    SynthesizingGenerator::new(Arc::new(StdRandomSource::seeded(11)))
}

fn app() -> Router {
    router(state_with(Arc::new(synthesizing())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

fn ids(list: &Value, key: &str) -> Vec<String> {
    list[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

struct GatedGenerator {
    gate: Arc<Notify>,
    inner: SynthesizingGenerator,
}

#[async_trait]
impl PreviewGenerator for GatedGenerator {
    async fn generate(&self, url: &str) -> PortResult<PreviewDraft> {
        self.gate.notified().await;
        self.inner.generate(url).await
    }
}

struct FailingGenerator;

#[async_trait]
impl PreviewGenerator for FailingGenerator {
    async fn generate(&self, _url: &str) -> PortResult<PreviewDraft> {
        Err(PortError::Unexpected("unfurl service down".to_string()))
    }
}

//=========================================================================================
// Ingestion
//=========================================================================================

#[tokio::test]
async fn seeded_previews_are_listed() {
    let app = app();
    let (status, body) = send(&app, "GET", "/previews", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "previews"), ["1", "2", "3", "4"]);
    assert_eq!(body["total"], 4);
    assert_eq!(body["previews"][0]["platform_icon"], "instagram");
    assert_eq!(body["previews"][0]["category"]["key"], "cooking");
    assert_eq!(body["is_generating"], false);
}

#[tokio::test]
async fn valid_url_creates_preview_at_the_front() {
    let app = app();
    let (status, created) = send(
        &app,
        "POST",
        "/previews",
        Some(json!({ "url": "https://www.youtube.com/watch?v=abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["platform"], "YouTube");
    assert_eq!(created["title"], "YouTube Video");
    let tags = created["tags"].as_array().unwrap().len();
    assert!((2..=4).contains(&tags));

    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(list["total"], 5);
    assert_eq!(list["previews"][0]["id"], created["id"]);
    assert_eq!(list["url_input"], "");
}

#[tokio::test]
async fn rejected_urls_do_not_change_the_list() {
    let app = app();
    let (status, _) = send(&app, "POST", "/previews", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, message) = send(&app, "POST", "/previews", Some(json!({ "url": "ftp://x.com" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.as_str().unwrap().contains("http://"));

    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(list["total"], 4);
}

#[tokio::test]
async fn second_submit_while_generating_is_rejected() {
    let gate = Arc::new(Notify::new());
    let state = state_with(Arc::new(GatedGenerator {
        gate: gate.clone(),
        inner: synthesizing(),
    }));
    let app = router(state.clone());

    let first = tokio::spawn({
        let app = app.clone();
        async move { send(&app, "POST", "/previews", Some(json!({ "url": "https://vimeo.com/1" }))).await }
    });
    while !state.ingestion.lock().await.is_generating() {
        tokio::task::yield_now().await;
    }

    let (status, _) = send(&app, "POST", "/previews", Some(json!({ "url": "https://vimeo.com/2" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    gate.notify_one();
    let (status, created) = first.await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["url"], "https://vimeo.com/1");
    assert!(!state.ingestion.lock().await.is_generating());
}

#[tokio::test]
async fn abandoned_submit_still_clears_the_generating_flag() {
    let gate = Arc::new(Notify::new());
    let state = state_with(Arc::new(GatedGenerator {
        gate: gate.clone(),
        inner: synthesizing(),
    }));
    let app = router(state.clone());

    let abandoned = tokio::time::timeout(
        Duration::from_millis(50),
        send(&app, "POST", "/previews", Some(json!({ "url": "https://vimeo.com/1" }))),
    )
    .await;
    assert!(abandoned.is_err());
    assert!(state.ingestion.lock().await.is_generating());

    gate.notify_one();
    while state.ingestion.lock().await.is_generating() {
        tokio::task::yield_now().await;
    }

    gate.notify_one();
    let (status, created) = send(&app, "POST", "/previews", Some(json!({ "url": "https://vimeo.com/2" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["url"], "https://vimeo.com/2");

    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(list["total"], 6);
    assert_eq!(list["previews"][1]["url"], "https://vimeo.com/1");
}

#[tokio::test]
async fn input_edits_are_refused_while_generating() {
    let gate = Arc::new(Notify::new());
    let state = state_with(Arc::new(GatedGenerator {
        gate: gate.clone(),
        inner: synthesizing(),
    }));
    let app = router(state.clone());

    let first = tokio::spawn({
        let app = app.clone();
        async move { send(&app, "POST", "/previews", Some(json!({ "url": "https://vimeo.com/1" }))).await }
    });
    while !state.ingestion.lock().await.is_generating() {
        tokio::task::yield_now().await;
    }

    let (status, _) = send(&app, "PUT", "/previews/input", Some(json!({ "url": "https://b.com" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    send(&app, "PUT", "/clipboard", Some(json!({ "text": "https://c.com" }))).await;
    let (status, _) = send(&app, "POST", "/previews/input/paste", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    gate.notify_one();
    let (status, _) = first.await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(list["url_input"], "");

    let (status, input) = send(&app, "PUT", "/previews/input", Some(json!({ "url": "https://b.com" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(input["url_input"], "https://b.com");
}

#[tokio::test]
async fn failed_generation_reports_bad_gateway_and_resets() {
    let app = router(state_with(Arc::new(FailingGenerator)));
    let (status, _) = send(&app, "POST", "/previews", Some(json!({ "url": "https://tiktok.com/v/1" }))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(list["is_generating"], false);
    assert_eq!(list["total"], 4);
    assert_eq!(list["url_input"], "https://tiktok.com/v/1");
}

#[tokio::test]
async fn filters_narrow_and_clear() {
    let app = app();
    let (_, list) = send(&app, "PUT", "/previews/filters", Some(json!({ "query": "Instagram" }))).await;
    assert_eq!(ids(&list, "previews"), ["1", "4"]);

    let (_, list) = send(&app, "POST", "/previews/categories/travel/toggle", None).await;
    assert_eq!(ids(&list, "previews"), ["4"]);
    assert_eq!(list["category"], "travel");

    let (_, list) = send(&app, "POST", "/previews/categories/travel/toggle", None).await;
    assert_eq!(list["category"], Value::Null);
    assert_eq!(ids(&list, "previews"), ["1", "4"]);

    let (_, list) = send(&app, "DELETE", "/previews/filters", None).await;
    assert_eq!(list["query"], "");
    assert_eq!(ids(&list, "previews").len(), 4);
}

#[tokio::test]
async fn removal_ignores_unknown_ids() {
    let app = app();
    let (status, _) = send(&app, "DELETE", "/previews/nope", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/previews/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(ids(&list, "previews"), ["1", "3", "4"]);
}

#[tokio::test]
async fn clipboard_paste_and_deep_links_reach_the_input_state() {
    let app = app();
    let (status, pasted) = send(&app, "POST", "/previews/input/paste", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pasted["changed"], false);

    send(&app, "PUT", "/clipboard", Some(json!({ "text": "https://youtu.be/xyz" }))).await;
    let (_, pasted) = send(&app, "POST", "/previews/input/paste", None).await;
    assert_eq!(pasted["changed"], true);
    assert_eq!(pasted["url_input"], "https://youtu.be/xyz");

    let (status, _) = send(&app, "POST", "/deep-links", Some(json!({ "url": "linkshare://share?u=1" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = send(&app, "GET", "/previews", None).await;
    assert_eq!(list["last_deep_link"], "linkshare://share?u=1");

    let (status, _) = send(&app, "POST", "/previews/1/share", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn categories_are_listed_in_chip_order() {
    let (_, categories) = send(&app(), "GET", "/categories", None).await;
    let keys: Vec<&str> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys.len(), 10);
    assert_eq!(keys[0], "cooking");
    assert_eq!(keys[9], "other");
}

//=========================================================================================
// Organizer
//=========================================================================================

#[tokio::test]
async fn favorites_selection_includes_filed_favorites() {
    let app = app();
    let (_, list) = send(&app, "PUT", "/videos/selection", Some(json!({ "selection": "favorites" }))).await;
    assert_eq!(list["title"], "Favorites");
    assert_eq!(ids(&list, "videos"), ["1", "3", "6"]);
    let three = &list["videos"][1];
    assert_eq!(three["folder_id"], "folder-3");
    assert_eq!(three["folder_name"], "Inspiration");
}

#[tokio::test]
async fn folder_creation_ignores_blank_names() {
    let app = app();
    let (status, _) = send(&app, "POST", "/folders", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, folder) = send(&app, "POST", "/folders", Some(json!({ "name": " Road Trips " }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(folder["name"], "Road Trips");
    assert_eq!(folder["video_count"], 0);

    let (_, folders) = send(&app, "GET", "/folders", None).await;
    let list = folders["folders"].as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[5]["name"], "Road Trips");
    assert_eq!(folders["favorites_count"], 3);
    assert_eq!(folders["all_count"], 6);
}

#[tokio::test]
async fn favorite_toggle_is_an_involution() {
    let app = app();
    let (_, first) = send(&app, "POST", "/videos/2/favorite", None).await;
    assert_eq!(first["is_favorite"], true);
    let (_, second) = send(&app, "POST", "/videos/2/favorite", None).await;
    assert_eq!(second["is_favorite"], false);

    let (status, _) = send(&app, "POST", "/videos/404/favorite", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn moved_video_follows_its_folder() {
    let app = app();
    send(&app, "POST", "/videos/5/move-request", None).await;
    let (_, list) = send(&app, "GET", "/videos", None).await;
    assert_eq!(list["moving_video_id"], "5");

    let (status, _) = send(&app, "POST", "/videos/5/move", Some(json!({ "folder_id": "folder-3" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = send(&app, "PUT", "/videos/selection", Some(json!({ "selection": "folder-3" }))).await;
    assert_eq!(ids(&list, "videos"), ["3", "5"]);
    assert_eq!(list["moving_video_id"], Value::Null);

    send(&app, "POST", "/videos/5/move", Some(json!({ "folder_id": null }))).await;
    let (_, list) = send(&app, "GET", "/videos", None).await;
    assert_eq!(ids(&list, "videos"), ["3"]);
}

#[tokio::test]
async fn pending_move_completes_into_the_chosen_folder() {
    let app = app();
    let (status, _) = send(&app, "POST", "/videos/move-request/complete", Some(json!({ "folder_id": "folder-0" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, folders) = send(&app, "GET", "/folders", None).await;
    assert_eq!(folders["folders"][0]["video_count"], 1);

    send(&app, "POST", "/videos/4/move-request", None).await;
    let (status, _) = send(&app, "POST", "/videos/move-request/complete", Some(json!({ "folder_id": "folder-0" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, "PUT", "/videos/selection", Some(json!({ "selection": "folder-0" }))).await;
    assert_eq!(ids(&list, "videos"), ["1", "4"]);
    assert_eq!(list["moving_video_id"], Value::Null);
}

#[tokio::test]
async fn calendar_and_view_mode_state() {
    let app = app();
    let (_, list) = send(&app, "GET", "/videos", None).await;
    assert_eq!(list["show_calendar"], false);
    assert_eq!(list["view_mode"], "grid");
    assert_eq!(list["selected_date"], Local::now().date_naive().to_string());

    let (_, list) = send(&app, "POST", "/videos/calendar/toggle", None).await;
    assert_eq!(list["show_calendar"], true);
    assert_eq!(ids(&list, "videos"), ["1"]);

    let (_, list) = send(&app, "PUT", "/videos/calendar/date", Some(json!({ "date": "1999-01-01" }))).await;
    assert!(ids(&list, "videos").is_empty());

    let (_, list) = send(&app, "PUT", "/videos/search", Some(json!({ "query": "yoga" }))).await;
    assert!(ids(&list, "videos").is_empty());
    let (_, list) = send(&app, "POST", "/videos/calendar/toggle", None).await;
    assert_eq!(ids(&list, "videos"), ["4"]);

    let (_, list) = send(&app, "POST", "/videos/view-mode/toggle", None).await;
    assert_eq!(list["view_mode"], "list");
}

#[test]
fn openapi_document_lists_both_screens() {
    use utoipa::OpenApi;
    let doc = linkshare_api::web::ApiDoc::openapi();
    let paths = &doc.paths.paths;
    for path in [
        "/previews",
        "/previews/{id}/share",
        "/videos",
        "/videos/{id}/move",
        "/videos/move-request/complete",
        "/folders",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
