mod api;
mod database;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use services::account_store::{AccountStore, MongoAccountStore};
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let mongodb_uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let database_name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "intellios".to_string());

    log::info!("🚀 Starting IntelliOS Workspace Service...");
    log::info!("📊 Database: {} ({})", mongodb_uri, database_name);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&mongodb_uri, &database_name)
        .await
        .expect("Failed to connect to MongoDB");

    log::info!("✅ MongoDB connected successfully");

    // Single store handle for the process, injected into every handler
    let store: Arc<dyn AccountStore> = Arc::new(MongoAccountStore::new(db));
    let store_data = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Trusted-client API: any origin, any method, any header
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Root health check
            .route("/", web::get().to(api::health::root))
            // Auth endpoints
            .route("/api/login", web::post().to(api::auth::login))
            .route("/api/signup", web::post().to(api::auth::signup))
            // Workspace endpoints
            .route("/api/workspace", web::post().to(api::workspaces::upsert_workspace))
            .route("/api/workspaces", web::post().to(api::workspaces::list_workspaces))
            .route("/api/workspace", web::delete().to(api::workspaces::delete_workspace))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
