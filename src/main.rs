use actix_web::{middleware, web, App, HttpServer};
use log::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use garden::{
    api::{openapi::ApiDoc, state::GardenState},
    config::AppConfig,
    logic::companion::catalog_asymmetries,
    storage::FileStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env may carry RUST_LOG, so load it before the logger.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AppConfig::from_env();

    for asymmetry in catalog_asymmetries() {
        warn!(
            "catalog lists {} -> {} as {:?} but not the reverse",
            asymmetry.from, asymmetry.to, asymmetry.relationship
        );
    }

    let storage = FileStore::new(config.data_dir.clone());
    let state = web::Data::new(GardenState::restored(
        Box::new(storage),
        config.layout_key.clone(),
    ));

    let bind_addr = config.bind_addr.clone();
    info!("🌱 Garden API started at http://{bind_addr}");
    info!("   GET    /api/vegetables");
    info!("   GET    /api/relationship?a={{id}}&b={{id}}");
    info!("   GET    /api/garden");
    info!("   POST   /api/garden/placements");
    info!("   DELETE /api/garden/placements/{{id}}");
    info!("   POST   /api/garden/save");
    info!("   layout key '{}' in {}", config.layout_key, config.data_dir.display());
    info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(garden::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
