use anyhow::Result;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::models::{CreateRoutineRequest, Routine, RoutineResponse, RoutinesPage};

/// Keyset-paginated, owner-scoped access to routines and their workout
/// associations. Routine ids are strictly increasing and never reused, so a
/// page boundary is always a stable id value: concurrent inserts can never
/// skip or duplicate a row between pages.
#[derive(Clone)]
pub struct RoutineService {
    db: PgPool,
}

impl RoutineService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List one page of the user's routines, newest first. `before_id` is the
    /// already-validated cursor: only routines with a smaller id are returned.
    pub async fn list_routines(
        &self,
        user_id: i64,
        before_id: Option<i64>,
        limit: i64,
    ) -> Result<RoutinesPage> {
        let rows: Vec<Routine> = match before_id {
            Some(boundary) => {
                sqlx::query_as(
                    "SELECT id, user_id, name, description FROM routines
                     WHERE user_id = $1 AND id < $2
                     ORDER BY id DESC
                     LIMIT $3",
                )
                .bind(user_id)
                .bind(boundary)
                .bind(limit)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT id, user_id, name, description FROM routines
                     WHERE user_id = $1
                     ORDER BY id DESC
                     LIMIT $2",
                )
                .bind(user_id)
                .bind(limit)
                .fetch_all(&self.db)
                .await?
            }
        };

        let previous_cursor = next_page_cursor(&rows, limit);

        let routine_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut workouts_by_routine = self.workout_ids_by_routine(&routine_ids).await?;

        let routines = rows
            .into_iter()
            .map(|r| RoutineResponse {
                workouts: workouts_by_routine.remove(&r.id).unwrap_or_default(),
                id: r.id,
                user_id: r.user_id,
                name: r.name,
                description: r.description,
            })
            .collect();

        Ok(RoutinesPage {
            routines,
            previous_cursor,
        })
    }

    /// Create a routine and associate the requested workouts. Workout ids
    /// that do not exist are skipped, not an error; duplicate ids collapse
    /// because the association is a set.
    pub async fn create_routine(
        &self,
        user_id: i64,
        request: CreateRoutineRequest,
    ) -> Result<RoutineResponse> {
        let mut tx = self.db.begin().await?;

        let routine: Routine = sqlx::query_as(
            "INSERT INTO routines (user_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, name, description",
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(&request.description)
        .fetch_one(&mut *tx)
        .await?;

        for workout_id in &request.workouts {
            let workout_exists = sqlx::query_scalar::<_, i64>("SELECT id FROM workouts WHERE id = $1")
                .bind(workout_id)
                .fetch_optional(&mut *tx)
                .await?;

            if workout_exists.is_some() {
                sqlx::query(
                    "INSERT INTO routine_workouts (routine_id, workout_id)
                     VALUES ($1, $2)
                     ON CONFLICT DO NOTHING",
                )
                .bind(routine.id)
                .bind(workout_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        // Re-read after commit so the response reflects the exact committed
        // association set, including skipped ids.
        let created = self
            .get_routine(routine.id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("routine {} missing after commit", routine.id))?;

        Ok(created)
    }

    /// Delete a routine and its associations, returning the prior data.
    /// Lookup is by id alone, not scoped to an owner. A miss returns `None`.
    pub async fn delete_routine(&self, routine_id: i64) -> Result<Option<RoutineResponse>> {
        let routine = match self.get_routine(routine_id).await? {
            Some(routine) => routine,
            None => return Ok(None),
        };

        // Associations cascade; referenced workouts survive.
        sqlx::query("DELETE FROM routines WHERE id = $1")
            .bind(routine_id)
            .execute(&self.db)
            .await?;

        Ok(Some(routine))
    }

    /// Fetch a single routine with its workout ids
    pub async fn get_routine(&self, routine_id: i64) -> Result<Option<RoutineResponse>> {
        let routine: Option<Routine> =
            sqlx::query_as("SELECT id, user_id, name, description FROM routines WHERE id = $1")
                .bind(routine_id)
                .fetch_optional(&self.db)
                .await?;

        let Some(routine) = routine else {
            return Ok(None);
        };

        let mut workouts_by_routine = self.workout_ids_by_routine(&[routine.id]).await?;

        Ok(Some(RoutineResponse {
            workouts: workouts_by_routine.remove(&routine.id).unwrap_or_default(),
            id: routine.id,
            user_id: routine.user_id,
            name: routine.name,
            description: routine.description,
        }))
    }

    /// Batched association fetch for a set of routines
    async fn workout_ids_by_routine(
        &self,
        routine_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>> {
        if routine_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let pairs: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT routine_id, workout_id FROM routine_workouts WHERE routine_id = ANY($1)",
        )
        .bind(routine_ids)
        .fetch_all(&self.db)
        .await?;

        let mut by_routine: HashMap<i64, Vec<i64>> = HashMap::new();
        for (routine_id, workout_id) in pairs {
            by_routine.entry(routine_id).or_default().push(workout_id);
        }

        Ok(by_routine)
    }
}

/// Cursor for the next older page: the smallest returned id, but only when
/// the page was full. A short page is the final one and yields no cursor.
fn next_page_cursor(rows: &[Routine], limit: i64) -> Option<String> {
    if rows.is_empty() || (rows.len() as i64) < limit {
        return None;
    }

    rows.last().map(|r| r.id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routine(id: i64) -> Routine {
        Routine {
            id,
            user_id: 1,
            name: format!("routine {id}"),
            description: None,
        }
    }

    #[test]
    fn test_full_page_yields_smallest_id_as_cursor() {
        let rows = vec![routine(5), routine(4)];
        assert_eq!(next_page_cursor(&rows, 2), Some("4".to_string()));
    }

    #[test]
    fn test_short_page_yields_no_cursor() {
        let rows = vec![routine(1)];
        assert_eq!(next_page_cursor(&rows, 2), None);
    }

    #[test]
    fn test_empty_page_yields_no_cursor() {
        assert_eq!(next_page_cursor(&[], 10), None);
    }
}
