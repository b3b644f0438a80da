/// HTTP handlers for posts-service
///
/// - Posts: the paginated post feed
/// - Health: liveness, readiness and summary probes
pub mod health;
pub mod posts;

pub use health::{health_summary, liveness_check, readiness_summary};
pub use posts::list_posts;
