use actix_web::{middleware, web, App, HttpServer};

use irrigation::{api::routes, config::Config, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;
    log::debug!("{config:?}");
    let state = web::Data::new(AppState::from_config(&config).map_err(std::io::Error::other)?);

    if config.dialogflow_url.is_none() {
        log::warn!("DIALOGFLOW_URL is not set; /ask will always answer with the fallback reply");
    }

    let bind_addr = config.bind_addr.clone();
    println!("🌱 Irrigation grid started at http://{bind_addr}");
    println!("   GET  /");
    println!("   GET  /get_status");
    println!("   POST /webhook");
    println!("   POST /ask");
    println!("   ");
    println!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    println!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(routes::json_config())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
