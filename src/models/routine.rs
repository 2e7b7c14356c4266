use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A routine row as stored; associated workout ids live in the
/// `routine_workouts` join table.
#[derive(Debug, Clone, FromRow)]
pub struct Routine {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRoutineRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub workouts: Vec<i64>,
}

/// A routine projected together with its associated workout ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutineResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub workouts: Vec<i64>,
}

/// One page of a user's routines, newest first. `previous_cursor` is the
/// boundary id for fetching the next older page; the wire name
/// `previousCursor` is kept for client compatibility.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoutinesPage {
    pub routines: Vec<RoutineResponse>,
    #[serde(rename = "previousCursor")]
    pub previous_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_serializes_with_camel_case_cursor() {
        let page = RoutinesPage {
            routines: vec![],
            previous_cursor: Some("4".to_string()),
        };

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["previousCursor"], "4");
    }

    #[test]
    fn test_absent_cursor_serializes_as_null() {
        let page = RoutinesPage {
            routines: vec![],
            previous_cursor: None,
        };

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["previousCursor"].is_null());
    }
}
