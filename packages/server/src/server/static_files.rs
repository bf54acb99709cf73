use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the grader page (packages/server/web) at compile time
#[derive(RustEmbed)]
#[folder = "web/"]
pub struct WebAppAssets;

const INDEX: &str = "index.html";

/// Serve the grader page and its assets; unknown paths fall back to the page.
pub async fn serve_web_app(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    let (path, content) = match WebAppAssets::get(path) {
        Some(content) => (path, content),
        None => match WebAppAssets::get(INDEX) {
            Some(content) => (INDEX, content),
            None => return (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
        },
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_serves_index() {
        let response = tokio_test::block_on(serve_web_app(Uri::from_static("/")));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }

    #[test]
    fn test_unknown_path_falls_back_to_index() {
        let response = tokio_test::block_on(serve_web_app(Uri::from_static("/some/client/route")));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }
}
