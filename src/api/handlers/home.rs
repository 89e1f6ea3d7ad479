use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
/// Serves the dashboard page; it polls `/get_status` and posts to `/ask`.
#[utoipa::path(
    tag = "page",
    responses((status = 200, description = "Dashboard page", content_type = "text/html", body = String))
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
