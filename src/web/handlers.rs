use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::web::models::{ChatRequest, ChatResponse, ErrorResponse, HistoryResponse};
use crate::AppState;

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let context = Context::new();
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat endpoint
pub async fn chat(data: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let ChatRequest {
        message,
        history,
        session_id,
    } = req.into_inner();

    if message.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Message vide"));
    }

    let session_id = session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    info!(
        "Chat request from session {} ({} history turns): {}",
        session_id,
        history.len(),
        message
    );

    let response = data.model.answer(&message, &history).await;

    // A failed save never changes what the student sees.
    let store = data.store.clone();
    let (sid, question, answer) = (session_id.clone(), message, response.clone());
    match tokio::task::spawn_blocking(move || store.record_exchange(&sid, &question, &answer)).await
    {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Failed to save exchange for session {}: {}", session_id, e),
        Err(e) => error!("Save task for session {} did not complete: {}", session_id, e),
    }

    HttpResponse::Ok().json(ChatResponse {
        response,
        success: true,
        session_id,
    })
}

// Stored history of one session
pub async fn history(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let session_id = path.into_inner();
    let store = data.store.clone();
    let sid = session_id.clone();

    let result = match tokio::task::spawn_blocking(move || store.history(&sid)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(messages) => HttpResponse::Ok().json(HistoryResponse {
            messages,
            success: true,
        }),
        Err(e) => {
            error!("Failed to load history for session {}: {}", session_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Erreur lors de la récupération de l'historique",
            ))
        }
    }
}
