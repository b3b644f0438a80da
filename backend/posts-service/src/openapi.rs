/// OpenAPI documentation for the Posts Service
use crate::models::{CommentView, ErrorResponse, PostListResponse, PostView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts Service API",
        version = "1.0.0",
        description = "Read-only feed of posts, newest first, ten per page. Each post carries its author, total comment count and up to three comments, chosen by recency or by random sample.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(crate::handlers::posts::list_posts),
    components(schemas(PostListResponse, PostView, CommentView, ErrorResponse)),
    tags(
        (name = "posts", description = "Paginated post feed"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/v1/openapi.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_post_list_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/posts"));

        let schemas = doc.components.expect("components").schemas;
        for name in ["PostListResponse", "PostView", "CommentView", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
