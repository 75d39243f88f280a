use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every way producing the CV page can fail.
/// None of them yield a partial page: the handler answers with an error page instead.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CV document not found: {0}")]
    NotFound(String),

    #[error("CV document is invalid: {0}")]
    InvalidData(String),

    #[error("CV API request failed: {0}")]
    Transport(String),

    /// Holds the path as written in the document; the resolved path is only logged.
    #[error("Missing asset {0}")]
    MissingAsset(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl RenderError {
    pub fn status(&self) -> StatusCode {
        match self {
            RenderError::NotFound(_) | RenderError::InvalidData(_) | RenderError::Transport(_) => {
                StatusCode::BAD_GATEWAY
            }
            RenderError::MissingAsset(_) | RenderError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            RenderError::NotFound(_) | RenderError::InvalidData(_) | RenderError::Transport(_) => {
                format!("No se pudo obtener la información del CV desde la API: {self}")
            }
            RenderError::MissingAsset(_) | RenderError::Template(_) => {
                format!("No se pudo generar la página del CV: {self}")
            }
        }
    }
}

impl From<handlebars::RenderError> for RenderError {
    fn from(e: handlebars::RenderError) -> Self {
        RenderError::Template(e.to_string())
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!("Failed to render CV page ({status}): {self}");

        let body = format!(
            "<!doctype html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\"><title>Curriculum Vitae</title></head>\n<body>\n<div class=\"error\" role=\"alert\">{}</div>\n</body>\n</html>\n",
            handlebars::html_escape(&self.user_message())
        );

        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_upstream_failures_are_bad_gateway() {
        for error in [
            RenderError::NotFound("x".into()),
            RenderError::InvalidData("x".into()),
            RenderError::Transport("x".into()),
        ] {
            assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_local_failures_are_internal() {
        let missing = RenderError::MissingAsset("ana.png".into());
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let template = RenderError::Template("x".into());
        assert_eq!(template.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_page_escapes_message() {
        let response = RenderError::Transport("<script>boom</script>".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");

        let body = body_text(response).await;
        assert!(body.contains("No se pudo obtener la información del CV desde la API"));
        assert!(body.contains("&lt;script&gt;boom&lt;/script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[tokio::test]
    async fn test_missing_asset_page_shows_document_path_only() {
        let response = RenderError::MissingAsset("img/ana.png".into()).into_response();
        let body = body_text(response).await;
        assert!(body.contains("No se pudo generar la página del CV: Missing asset img/ana.png<"));
    }
}
