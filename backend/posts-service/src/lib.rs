/// Posts Service Library
///
/// Serves a paginated, newest-first feed of posts. Each post is returned with
/// its author, its total comment count and a capped subset of comments.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Store rows and response views
/// - `services`: Pagination, comment selection and page assembly
/// - `db`: Store trait and PostgreSQL implementation
/// - `error`: Error types and the opaque error response
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use actix_web::web;

/// Register the service routes; app data (`PostFeedService`) is supplied by the caller.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(metrics::serve_metrics))
        .route("/posts", web::get().to(handlers::list_posts))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_summary))
                .route("/health/ready", web::get().to(handlers::readiness_summary))
                .route("/health/live", web::get().to(handlers::liveness_check))
                .route("/posts", web::get().to(handlers::list_posts)),
        );
}
