//! Application router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Page routes live at the root; JSON endpoints are nested under `/api/`.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints::{auth, health, pages, predict};
use crate::api::types::ApiContext;

/// Build the application router.
///
/// Handlers use `State<ApiContext>`; `.with_state()` converts
/// `Router<ApiContext>` into a mountable `Router<()>`.
pub fn app_router(ctx: ApiContext) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login).post(auth::login))
        .route("/register", get(pages::register).post(auth::register))
        .route("/extra", get(pages::extra))
        .route("/home", get(pages::home));

    let api_routes = Router::new()
        .route("/predict", post(predict::predict))
        .route("/health", get(health::check));

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}
