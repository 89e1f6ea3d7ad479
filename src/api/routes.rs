use actix_web::{error::InternalError, web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    handlers::{ask::ask, home::index, status::get_status, webhook::webhook},
    openapi::ApiDoc,
};
use crate::models::request::ErrorResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(get_status)
        .service(webhook)
        .service(ask)
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}

/// JSON extractor config: malformed bodies and missing keys become
/// `400 {"error": ...}` instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        log::warn!("{message}");
        let response = HttpResponse::BadRequest().json(ErrorResponse { error: message });
        InternalError::from_response(err, response).into()
    })
}
