use utoipa::OpenApi;

use crate::models::{
    plant::PlantCode,
    request::{
        AskRequest, AskResponse, ErrorResponse, IntentInfo, QueryResult, WebhookParameters,
        WebhookRequest, WebhookResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Irrigation Grid API",
        description = "Keeps the on/off watering state of a planted grid and switches it from conversational-agent intents.",
        version = "0.1.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::home::index,
        crate::api::handlers::status::get_status,
        crate::api::handlers::webhook::webhook,
        crate::api::handlers::ask::ask,
    ),
    components(
        schemas(
            PlantCode,
            // Fulfillment webhook
            WebhookRequest, QueryResult, IntentInfo, WebhookParameters, WebhookResponse,
            // Ask relay
            AskRequest, AskResponse,
            // Shared
            ErrorResponse,
        )
    ),
    tags(
        (name = "page",    description = "Static dashboard"),
        (name = "status",  description = "Current watering state"),
        (name = "webhook", description = "Conversational agent fulfillment"),
        (name = "ask",     description = "Free-text relay to the conversational agent"),
    )
)]
pub struct ApiDoc;
