use std::path::PathBuf;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{test, App};
use serde_json::{json, Value};
use tempfile::TempDir;
use tera::Tera;

use french_tutor::model::ModelManager;
use french_tutor::store::ChatStore;
use french_tutor::web::routes;
use french_tutor::AppState;

fn app_state(database_path: PathBuf) -> Data<AppState> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", "<h1>Professeur de français</h1>")
        .expect("template");
    Data::new(AppState {
        tera,
        model: ModelManager::rule_based(),
        store: ChatStore::new(database_path),
    })
}

fn ready_state(temp: &TempDir) -> Data<AppState> {
    let state = app_state(temp.path().join("tutor.db"));
    state.store.ensure_tables().expect("ensure_tables");
    state
}

#[actix_web::test]
async fn empty_message_is_rejected_before_any_write() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("tutor.db");
    let app = test::init_service(
        App::new()
            .app_data(app_state(db.clone()))
            .configure(routes::configure),
    )
    .await;

    for body in [json!({ "message": "" }), json!({ "message": "   " }), json!({})] {
        let req = test::TestRequest::post().uri("/chat").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Message vide");
    }
    assert!(!db.exists());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let temp = TempDir::new().unwrap();
    let app =
        test::init_service(App::new().app_data(ready_state(&temp)).configure(routes::configure))
            .await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(ContentType::json())
        .set_payload("{\"message\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn arithmetic_is_answered_directly() {
    let temp = TempDir::new().unwrap();
    let app =
        test::init_service(App::new().app_data(ready_state(&temp)).configure(routes::configure))
            .await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "12 + 7" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert!(body["response"].as_str().unwrap().contains("19"));
    assert!(!body["session_id"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn database_failure_still_answers() {
    let temp = TempDir::new().unwrap();
    let unreachable = temp.path().join("no-such-dir").join("tutor.db");
    let app = test::init_service(
        App::new()
            .app_data(app_state(unreachable))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "bonjour", "session_id": "abc" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["session_id"], "abc");
    assert!(body["response"].as_str().unwrap().starts_with("Bonjour"));
}

#[actix_web::test]
async fn history_replays_a_session_in_order() {
    let temp = TempDir::new().unwrap();
    let app =
        test::init_service(App::new().app_data(ready_state(&temp)).configure(routes::configure))
            .await;

    for message in ["bonjour", "conjugue être"] {
        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": message, "session_id": "s-42", "history": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/history/s-42").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["user_message"], "bonjour");
    assert_eq!(messages[1]["user_message"], "conjugue être");
    assert!(messages[1]["bot_response"].as_str().unwrap().contains("je suis"));

    let req = test::TestRequest::get().uri("/history/unknown").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn history_store_failure_is_a_generic_error() {
    let temp = TempDir::new().unwrap();
    let unreachable = temp.path().join("no-such-dir").join("tutor.db");
    let app = test::init_service(
        App::new()
            .app_data(app_state(unreachable))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/history/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().contains("no-such-dir"));
}

#[actix_web::test]
async fn index_and_health_are_served() {
    let temp = TempDir::new().unwrap();
    let app =
        test::init_service(App::new().app_data(ready_state(&temp)).configure(routes::configure))
            .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "status": "ok" }));

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(String::from_utf8_lossy(&body).contains("Professeur"));
}
