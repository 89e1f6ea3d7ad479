use actix_web::{post, web, HttpResponse};

use crate::{
    error::ServiceError,
    logic::resolver::{resolve_intent, Intent, Resolution},
    models::request::{ErrorResponse, QueryResult, WebhookRequest, WebhookResponse},
    state::AppState,
};

/// POST /webhook
/// Fulfillment endpoint for the conversational agent: switches watering on or
/// off for the named plants and answers with a confirmation sentence.
#[utoipa::path(
    tag = "webhook",
    request_body = WebhookRequest,
    responses(
        (status = 200, description = "Confirmation or rejection text", body = WebhookResponse),
        (status = 400, description = "Malformed fulfillment request", body = ErrorResponse),
    )
)]
#[post("/webhook")]
pub async fn webhook(
    state: web::Data<AppState>,
    body: web::Json<WebhookRequest>,
) -> Result<HttpResponse, ServiceError> {
    let QueryResult { intent, parameters } = body.into_inner().query_result;
    if parameters.plant.is_empty() {
        return Err(ServiceError::bad_request(
            "queryResult.parameters.plant must name at least one plant",
        ));
    }

    let intent = Intent::from_display_name(&intent.display_name);
    let resolution = {
        let mut grid = state.grid();
        resolve_intent(&mut grid, &intent, &parameters.plant)
    };

    match &resolution {
        Resolution::Applied { on, targets, .. } => log::info!(
            "{intent:?}: {} target(s) switched {}",
            targets.len(),
            if *on { "on" } else { "off" }
        ),
        Resolution::Unrecognized { .. } => {
            log::warn!("No recognised plant in {:?}", parameters.plant)
        }
        Resolution::UnsupportedIntent { intent } => {
            log::warn!("Ignoring unsupported intent '{intent}'")
        }
    }

    Ok(HttpResponse::Ok().json(WebhookResponse {
        fulfillment_text: resolution.into_fulfillment_text(),
    }))
}
