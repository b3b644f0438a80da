use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use posts_service::db::PgPostStore;
use posts_service::openapi::ApiDoc;
use posts_service::services::PostFeedService;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn run_healthcheck() -> io::Result<()> {
    let port = std::env::var("POSTS_SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
    let url = format!("http://127.0.0.1:{}/api/v1/health", port);
    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

/// Posts Service
///
/// # Routes
///
/// - `GET /api/v1/posts?page=&random=` (also mounted at `/posts`) - paginated post feed
/// - `/api/v1/health`, `/api/v1/health/ready`, `/api/v1/health/live` - probes
/// - `/metrics` - Prometheus exposition
/// - `/swagger-ui/` - API documentation
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Container healthchecks: `posts-service healthcheck`
    if matches!(
        std::env::args().nth(1).as_deref(),
        Some("healthcheck") | Some("healthcheck-http")
    ) {
        return run_healthcheck().await;
    }

    let _ = dotenvy::dotenv();

    let config = match posts_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log.json);

    tracing::info!("Starting posts-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let mut db_cfg = DbPoolConfig::with_url("posts-service", config.database.url.clone());
    if std::env::var("DB_MAX_CONNECTIONS").is_err() {
        db_cfg.max_connections = config.database.max_connections;
    }
    db_cfg.min_connections = db_cfg.min_connections.min(db_cfg.max_connections);

    db_cfg.log_config();
    let db_pool = match create_pg_pool(db_cfg).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    let feed_service = web::Data::new(PostFeedService::new(Arc::new(PgPostStore::new(db_pool))));

    let bind_address = config.bind_address();
    let workers = config.app.workers;
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allowed_methods(vec!["GET"]).allow_any_header().max_age(3600);

        App::new()
            .app_data(feed_service.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
            )
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(posts_service::configure_routes)
    })
    .bind(&bind_address)?
    .workers(workers)
    .shutdown_timeout(30)
    .run()
    .await?;

    tracing::info!("Posts-service shutting down");
    Ok(())
}
