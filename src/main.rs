use actix_web::{middleware::Logger, web, App, HttpServer};

use examgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).expect("failed to build application state");

    log::info!("starting exam question server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .service(handlers::upload_preflight)
            .service(handlers::upload)
            .service(handlers::health_check)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
