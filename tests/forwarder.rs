use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use actix_web::{http::StatusCode, test, web, App, HttpRequest, HttpResponse, HttpServer};
use irrigation::{
    api::routes::{configure, json_config},
    data::layout::default_layout,
    error::ServiceError,
    logic::forwarder::{DialogflowForwarder, Forwarder},
    models::grid::IrrigationGrid,
    state::AppState,
};

/// A local stand-in for the conversational platform's detect-intent endpoint.
struct FakePlatform {
    status: StatusCode,
    body: String,
    seen: Mutex<Vec<(Option<String>, serde_json::Value)>>,
}

async fn detect(
    platform: web::Data<FakePlatform>,
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    let auth = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    platform.seen.lock().unwrap().push((auth, body.into_inner()));
    HttpResponse::build(platform.status)
        .content_type("application/json")
        .body(platform.body.clone())
}

/// Starts the fake platform on an ephemeral port and returns its endpoint URL.
fn start_platform(platform: Arc<FakePlatform>) -> String {
    let data = web::Data::from(platform);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/detect", web::post().to(detect))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/detect")
}

fn platform(status: StatusCode, body: serde_json::Value) -> Arc<FakePlatform> {
    Arc::new(FakePlatform {
        status,
        body: body.to_string(),
        seen: Mutex::new(Vec::new()),
    })
}

fn forwarder(url: String) -> DialogflowForwarder {
    DialogflowForwarder::new(Some(url), "test-token".into(), Duration::from_secs(5)).unwrap()
}

#[actix_web::test]
async fn test_forward_sends_envelope_with_bearer_token() {
    let fake = platform(
        StatusCode::OK,
        serde_json::json!({ "queryResult": { "fulfillmentText": "Turning on water for Carrot." } }),
    );
    let url = start_platform(fake.clone());

    let reply = forwarder(url).forward("water the carrots").await.unwrap();
    assert_eq!(reply.as_deref(), Some("Turning on water for Carrot."));

    let seen = fake.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-token"));
    assert_eq!(
        body,
        &serde_json::json!({
            "queryInput": { "text": { "text": "water the carrots", "languageCode": "en" } }
        })
    );
}

#[actix_web::test]
async fn test_forward_missing_fulfillment_text_is_none() {
    let fake = platform(StatusCode::OK, serde_json::json!({ "responseId": "r-1" }));
    let url = start_platform(fake);
    let reply = forwarder(url).forward("hello").await.unwrap();
    assert_eq!(reply, None);
}

#[actix_web::test]
async fn test_forward_non_success_status_is_error() {
    let fake = platform(StatusCode::UNAUTHORIZED, serde_json::json!({ "error": "bad token" }));
    let url = start_platform(fake);
    let err = forwarder(url).forward("hello").await.unwrap_err();
    assert!(matches!(err, ServiceError::ForwardStatus(401)), "got {err:?}");
}

#[actix_web::test]
async fn test_forward_malformed_reply_is_error() {
    let fake = Arc::new(FakePlatform {
        status: StatusCode::OK,
        body: "<html>not json</html>".into(),
        seen: Mutex::new(Vec::new()),
    });
    let url = start_platform(fake);
    let err = forwarder(url).forward("hello").await.unwrap_err();
    assert!(matches!(err, ServiceError::Forward(_)), "got {err:?}");
}

#[actix_web::test]
async fn test_forward_unconfigured_endpoint() {
    let unconfigured =
        DialogflowForwarder::new(None, "test-token".into(), Duration::from_secs(1)).unwrap();
    let err = unconfigured.forward("hello").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotConfigured));
}

#[actix_web::test]
async fn test_ask_route_through_real_forwarder() {
    let fake = platform(
        StatusCode::OK,
        serde_json::json!({
            "queryResult": { "fulfillmentText": "Turning off water for all plants." }
        }),
    );
    let url = start_platform(fake);
    let grid = IrrigationGrid::new(default_layout()).unwrap();
    let state = web::Data::new(AppState::new(grid, Arc::new(forwarder(url))));

    let app = test::init_service(
        App::new()
            .app_data(state)
            .app_data(json_config())
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/ask")
        .set_json(serde_json::json!({ "message": "stop all watering" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["reply"], "Turning off water for all plants.");
}

#[actix_web::test]
async fn test_ask_route_platform_error_falls_back() {
    let fake = platform(StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({}));
    let url = start_platform(fake);
    let grid = IrrigationGrid::new(default_layout()).unwrap();
    let state = web::Data::new(AppState::new(grid, Arc::new(forwarder(url))));

    let app = test::init_service(
        App::new()
            .app_data(state)
            .app_data(json_config())
            .configure(configure),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/ask")
        .set_json(serde_json::json!({ "message": "hello" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["reply"], "Sorry, I didn't get that.");
}
