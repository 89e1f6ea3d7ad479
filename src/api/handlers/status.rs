use actix_web::{get, web, HttpResponse, Responder};

use crate::state::AppState;

/// GET /get_status
/// Returns the valve state of every cell, row-major, 1 = watering.
#[utoipa::path(
    tag = "status",
    responses((status = 200, description = "Valve state matrix", body = Vec<Vec<u8>>, example = json!([[0, 1, 0], [1, 0, 0]])))
)]
#[get("/get_status")]
pub async fn get_status(state: web::Data<AppState>) -> impl Responder {
    let status = state.grid().status_bits();
    HttpResponse::Ok().json(status)
}
