use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    logic::forwarder::FALLBACK_REPLY,
    models::request::{AskRequest, AskResponse, ErrorResponse},
    state::AppState,
};

/// POST /ask
/// Relays a free-text message to the conversational platform. Failures never
/// surface to the caller; they turn into the fallback reply.
#[utoipa::path(
    tag = "ask",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Agent reply, or the fallback sentence", body = AskResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
    )
)]
#[post("/ask")]
pub async fn ask(state: web::Data<AppState>, body: web::Json<AskRequest>) -> impl Responder {
    let message = body.into_inner().message;

    let reply = match state.forwarder().forward(&message).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            log::warn!("Conversational platform reply had no fulfillmentText");
            FALLBACK_REPLY.to_string()
        }
        Err(e) => {
            log::error!("Forwarding message failed: {e}");
            FALLBACK_REPLY.to_string()
        }
    };

    HttpResponse::Ok().json(AskResponse { reply })
}
