use anyhow::Result;
use sqlx::PgPool;

use crate::models::{CreateWorkoutRequest, Workout};

#[derive(Clone)]
pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_workout(
        &self,
        user_id: i64,
        request: CreateWorkoutRequest,
    ) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (user_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, name, description, created_at",
        )
        .bind(user_id)
        .bind(&request.name)
        .bind(&request.description)
        .fetch_one(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn get_workouts_by_user(&self, user_id: i64) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT id, user_id, name, description, created_at FROM workouts
             WHERE user_id = $1
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(workouts)
    }

    pub async fn delete_workout(&self, workout_id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(workout_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
