use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use super::{internal_error, ApiError};
use crate::auth::{jwt_auth_middleware, AuthService, UserSession};
use crate::models::{CreateRoutineRequest, RoutineResponse, RoutinesPage};
use crate::services::RoutineService;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct RoutinesQuery {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRoutineQuery {
    pub routine_id: i64,
}

#[derive(Clone)]
pub struct RoutinesState {
    pub routines: RoutineService,
}

pub fn routines_routes(db: PgPool, auth_service: AuthService) -> Router {
    let state = RoutinesState {
        routines: RoutineService::new(db),
    };

    Router::new()
        .route(
            "/",
            get(get_routines).post(create_routine).delete(delete_routine),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(state)
}

/// One page of the authenticated user's routines, newest first
#[tracing::instrument(skip(state))]
async fn get_routines(
    State(state): State<RoutinesState>,
    Extension(session): Extension<UserSession>,
    Query(query): Query<RoutinesQuery>,
) -> Result<Json<RoutinesPage>, (StatusCode, Json<ApiError>)> {
    // Validate the cursor before any query runs
    let before_id = parse_cursor(query.cursor.as_deref()).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("INVALID_CURSOR", "cursor must be an integer")),
        )
    })?;

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let page = state
        .routines
        .list_routines(session.user_id, before_id, limit)
        .await
        .map_err(internal_error)?;

    Ok(Json(page))
}

/// Create a routine, attaching existing workouts by id
#[tracing::instrument(skip(state, request))]
async fn create_routine(
    State(state): State<RoutinesState>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<CreateRoutineRequest>,
) -> Result<Json<RoutineResponse>, (StatusCode, Json<ApiError>)> {
    let routine = state
        .routines
        .create_routine(session.user_id, request)
        .await
        .map_err(internal_error)?;

    Ok(Json(routine))
}

/// Delete a routine by id, returning its prior data, or `null` on a miss
#[tracing::instrument(skip(state))]
async fn delete_routine(
    State(state): State<RoutinesState>,
    // Identity is required; the lookup itself is not owner-scoped
    Extension(_session): Extension<UserSession>,
    Query(query): Query<DeleteRoutineQuery>,
) -> Result<Json<Option<RoutineResponse>>, (StatusCode, Json<ApiError>)> {
    let deleted = state
        .routines
        .delete_routine(query.routine_id)
        .await
        .map_err(internal_error)?;

    Ok(Json(deleted))
}

/// An absent or empty cursor means the newest page; anything else must be an
/// integer id boundary.
fn parse_cursor(cursor: Option<&str>) -> Result<Option<i64>, std::num::ParseIntError> {
    match cursor {
        None => Ok(None),
        Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_absent_and_empty() {
        assert_eq!(parse_cursor(None).unwrap(), None);
        assert_eq!(parse_cursor(Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_cursor_numeric() {
        assert_eq!(parse_cursor(Some("42")).unwrap(), Some(42));
    }

    #[test]
    fn test_parse_cursor_rejects_non_numeric() {
        assert!(parse_cursor(Some("abc")).is_err());
        assert!(parse_cursor(Some("4.5")).is_err());
    }
}
