pub mod cv;
pub mod health;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::errors::AppError;
use crate::state::AppState;

/// Open CORS for read-only retrieval: any origin, any header, GET only.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Read-only surface: GET and CORS preflights pass, anything else is 405.
/// Runs outside the CORS layer, which would otherwise answer any OPTIONS,
/// and before axum's implicit HEAD handling on `get` routes.
async fn allow_only_get(request: Request, next: Next) -> Response {
    let headers = request.headers();
    let is_preflight = request.method() == Method::OPTIONS
        && headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if request.method() == Method::GET || is_preflight {
        return next.run(request).await;
    }

    let mut response = AppError::MethodNotAllowed(request.method().to_string()).into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET"));
    response
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/cv", get(cv::handle_get_cv))
        .layer(cors_layer())
        .layer(middleware::from_fn(allow_only_get))
        .with_state(state)
}
