use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::health::health_check;
use super::routines::routines_routes;
use super::workouts::workouts_routes;
use crate::auth::{cors_layer, security_headers_layer, AuthService};
use crate::config::AppConfig;

pub fn create_routes(db: PgPool, config: &AppConfig) -> Router {
    let auth_service = AuthService::new(db.clone(), &config.jwt_secret);

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .nest("/auth", auth_routes(auth_service.clone()))
        .nest("/workouts", workouts_routes(db.clone(), auth_service.clone()))
        .nest("/routines", routines_routes(db, auth_service))
        .layer(TraceLayer::new_for_http())
        .layer(security_headers_layer())
        .layer(cors_layer(&config.cors_origin))
}
