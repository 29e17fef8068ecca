//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`            - Liveness probe (public)
//! - `POST   /auth/register`     - Create an account (public)
//! - `POST   /auth/login`        - Sign in (public)
//! - `POST   /shorten`           - Create a short link (Bearer token)
//! - `GET    /user/urls`         - List owned links (Bearer token)
//! - `GET    /{code}`            - Redirect and record a click (public)
//! - `DELETE /{code}`            - Delete an owned link (Bearer token)
//! - `GET    /{code}/analytics`  - Click analytics report (Bearer token)
//!
//! Authentication is enforced per handler through the `AuthUser` extractor
//! rather than a route layer, so the public redirect and the protected
//! delete can share the `/{code}` path.

use axum::Router;
use axum::routing::{get, post};

use crate::api::handlers::{
    analytics_handler, delete_link_handler, health_handler, login_handler, redirect_handler,
    register_handler, shorten_handler, user_links_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/shorten", post(shorten_handler))
        .route("/user/urls", get(user_links_handler))
        .route(
            "/{code}",
            get(redirect_handler).delete(delete_link_handler),
        )
        .route("/{code}/analytics", get(analytics_handler))
        .with_state(state)
        .layer(tracing::layer())
}
