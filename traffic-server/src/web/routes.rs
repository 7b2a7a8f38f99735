//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::RouteQuery;

use super::dto::*;
use super::state::AppState;
use super::text::render_routes;

const WELCOME: &str = "Welcome to the AI-Powered Traffic Prediction System!";
const MISSING_ENDPOINTS: &str = "Start point and destination are required.";
const NO_ROUTES: &str = "No routes found for the given start point and destination.";
const INTERNAL: &str = "Internal server error";

/// Create the application router.
///
/// `allowed_origins` are the browser origins permitted by CORS.
pub fn create_router(state: AppState, allowed_origins: &[HeaderValue]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict_routes/", post(predict_routes))
        .route("/predict_routes", post(predict_routes))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy: listed origins with credentials, any method and header.
fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    // Credentials cannot be combined with a wildcard origin
    if allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any());
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Greeting.
async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME.to_string(),
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request prefers a plain-text listing.
fn accepts_text(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/plain"))
}

/// Predict travel times for every stored route between two places.
async fn predict_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PredictRoutesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let query = RouteQuery::parse(&req.start_point, &req.destination).map_err(|_| {
        AppError::BadRequest {
            message: MISSING_ENDPOINTS.to_string(),
        }
    })?;

    let records = state.routes.find(&query.origin, &query.destination);
    let routes = state.scorer.score(&records).map_err(|e| {
        error!(
            operation = e.operation,
            road = %e.road_name,
            error = %e,
            "error predicting routes"
        );
        AppError::Internal
    })?;

    let Some(routes) = routes else {
        warn!(%query, "no routes found");
        return Err(AppError::NotFound {
            message: NO_ROUTES.to_string(),
        });
    };
    info!(%query, count = routes.len(), "generated route options");

    // Return plain text or JSON based on Accept header
    if accepts_text(&headers) {
        Ok(render_routes(&routes).into_response())
    } else {
        let options: Vec<RouteOption> = routes.iter().map(RouteOption::from_scored).collect();
        Ok(Json(options).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    /// Logged where it arose; the body stays generic
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL.to_string()),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
