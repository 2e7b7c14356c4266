use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use sqlx::PgPool;

use super::{internal_error, ApiError};
use crate::auth::{jwt_auth_middleware, AuthService, UserSession};
use crate::models::{CreateWorkoutRequest, Workout};
use crate::services::WorkoutService;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workouts: WorkoutService,
}

pub fn workouts_routes(db: PgPool, auth_service: AuthService) -> Router {
    let state = WorkoutsState {
        workouts: WorkoutService::new(db),
    };

    Router::new()
        .route("/", get(get_workouts).post(create_workout))
        .route("/:workout_id", delete(delete_workout))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(state)
}

/// All workouts owned by the authenticated user
#[tracing::instrument(skip(state))]
async fn get_workouts(
    State(state): State<WorkoutsState>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<Vec<Workout>>, (StatusCode, Json<ApiError>)> {
    let workouts = state
        .workouts
        .get_workouts_by_user(session.user_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(workouts))
}

/// Create a workout owned by the authenticated user
#[tracing::instrument(skip(state, request))]
async fn create_workout(
    State(state): State<WorkoutsState>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<CreateWorkoutRequest>,
) -> Result<Json<Workout>, (StatusCode, Json<ApiError>)> {
    let workout = state
        .workouts
        .create_workout(session.user_id, request)
        .await
        .map_err(internal_error)?;

    Ok(Json(workout))
}

/// Delete one of the authenticated user's workouts
#[tracing::instrument(skip(state))]
async fn delete_workout(
    State(state): State<WorkoutsState>,
    Extension(session): Extension<UserSession>,
    Path(workout_id): Path<i64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ApiError>)> {
    let deleted = state
        .workouts
        .delete_workout(workout_id, session.user_id)
        .await
        .map_err(internal_error)?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new("NOT_FOUND", "Workout not found")),
        ));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
