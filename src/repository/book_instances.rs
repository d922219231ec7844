//! Book instance repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{BookInstance, BookInstanceWithBook, NewBookInstance},
};

/// Persistence operations for book copies
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookInstanceRepository: Send + Sync {
    /// List all copies with their book reference expanded
    async fn list_with_books(&self) -> AppResult<Vec<BookInstanceWithBook>>;

    /// Fetch one copy with its book reference expanded
    async fn find_with_book(&self, id: i32) -> AppResult<BookInstanceWithBook>;

    async fn create(&self, record: &NewBookInstance) -> AppResult<BookInstance>;

    async fn update(&self, id: i32, record: &NewBookInstance) -> AppResult<BookInstance>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgBookInstanceRepository {
    pool: Pool<Postgres>,
}

impl PgBookInstanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn check_required(record: &NewBookInstance) -> AppResult<()> {
        // Normally pre-filtered by form validation
        if record.imprint.trim().is_empty() {
            return Err(AppError::Constraint("Imprint is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookInstanceRepository for PgBookInstanceRepository {
    async fn list_with_books(&self) -> AppResult<Vec<BookInstanceWithBook>> {
        let rows = sqlx::query_as::<_, BookInstanceWithBook>(
            r#"
            SELECT bi.id, bi.book_id, b.title AS book_title, bi.imprint, bi.status, bi.due_back
            FROM book_instances bi
            JOIN books b ON b.id = bi.book_id
            ORDER BY b.title, bi.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_with_book(&self, id: i32) -> AppResult<BookInstanceWithBook> {
        sqlx::query_as::<_, BookInstanceWithBook>(
            r#"
            SELECT bi.id, bi.book_id, b.title AS book_title, bi.imprint, bi.status, bi.due_back
            FROM book_instances bi
            JOIN books b ON b.id = bi.book_id
            WHERE bi.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))
    }

    async fn create(&self, record: &NewBookInstance) -> AppResult<BookInstance> {
        Self::check_required(record)?;
        let row = sqlx::query_as::<_, BookInstance>(
            r#"
            INSERT INTO book_instances (book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(record.book_id)
        .bind(&record.imprint)
        .bind(&record.status)
        .bind(record.due_back)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, record: &NewBookInstance) -> AppResult<BookInstance> {
        Self::check_required(record)?;
        sqlx::query_as::<_, BookInstance>(
            r#"
            UPDATE book_instances
            SET book_id = $1, imprint = $2, status = $3, due_back = $4
            WHERE id = $5
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(record.book_id)
        .bind(&record.imprint)
        .bind(&record.status)
        .bind(record.due_back)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book copy {} not found", id)));
        }
        Ok(())
    }
}
