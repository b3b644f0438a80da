/// Post handlers - HTTP endpoint for the post feed
use crate::error::Result;
use crate::metrics::posts::POSTS_LIST_REQUESTS_TOTAL;
use crate::models::{CommentSelection, ErrorResponse, PostListResponse};
use crate::services::PostFeedService;
use actix_web::{http::header::ContentType, web, HttpResponse};
use utoipa::IntoParams;

/// Query parameters for the post feed.
///
/// Both are kept as raw strings; normalization never rejects a request.
/// A repeated key takes its last value.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// 1-based page number; invalid values fall back to page 1, values past
    /// the end are clamped to the last page
    pub page: Option<String>,
    /// `true` (any case) samples comments randomly instead of by recency
    pub random: Option<String>,
}

impl ListPostsQuery {
    /// Pick `page` and `random` out of decoded query pairs, ignoring other keys.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => query.page = Some(value),
                "random" => query.random = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// List posts, newest first, ten per page
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Page of posts with up to three comments each", body = PostListResponse),
        (status = 500, description = "Internal failure", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    service: web::Data<PostFeedService>,
    pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse> {
    let query = ListPostsQuery::from_pairs(pairs.into_inner());
    let selection = CommentSelection::from_query(query.random.as_deref());

    let outcome = match service.list_page(query.page.as_deref(), selection).await {
        Ok(page) => serde_json::to_vec(&page).map_err(Into::into),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(body) => {
            POSTS_LIST_REQUESTS_TOTAL
                .with_label_values(&[selection.as_str(), "ok"])
                .inc();
            Ok(HttpResponse::Ok()
                .content_type(ContentType::json())
                .body(body))
        }
        Err(e) => {
            POSTS_LIST_REQUESTS_TOTAL
                .with_label_values(&[selection.as_str(), "error"])
                .inc();
            tracing::error!(
                error = %e,
                requested = ?query.page,
                mode = selection.as_str(),
                "Error in post list"
            );
            Err(e)
        }
    }
}
