//! Genre repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::Genre,
};

/// Persistence operations for genres
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// List all genres sorted by name
    async fn list(&self) -> AppResult<Vec<Genre>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Genre>;

    /// Exact, case-sensitive name lookup used by the duplicate check on create
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;

    async fn create(&self, name: &str) -> AppResult<Genre>;

    async fn update(&self, id: i32, name: &str) -> AppResult<Genre>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgGenreRepository {
    pool: Pool<Postgres>,
}

impl PgGenreRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn check_required(name: &str) -> AppResult<()> {
        // Normally pre-filtered by form validation
        if name.trim().is_empty() {
            return Err(AppError::Constraint("Genre name is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn list(&self) -> AppResult<Vec<Genre>> {
        let rows = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let row = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, name: &str) -> AppResult<Genre> {
        Self::check_required(name)?;
        let row =
            sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, name: &str) -> AppResult<Genre> {
        Self::check_required(name)?;
        sqlx::query_as::<_, Genre>("UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name")
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Genre {} not found", id)));
        }
        Ok(())
    }
}
