//! Book repository
//!
//! Read-only: the book collection is owned by a separate catalog
//! collaborator. This server only needs titles for the copy form's picker
//! and the set of books referencing a genre.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Book};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books sorted by title
    async fn list_titles(&self) -> AppResult<Vec<Book>>;

    /// Books whose genre list references the given genre
    async fn find_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>>;
}

#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list_titles(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, title FROM books ORDER BY title")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
