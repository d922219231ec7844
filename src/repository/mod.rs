//! Repository layer for database operations

pub mod book_instances;
pub mod books;
pub mod genres;

pub use book_instances::{BookInstanceRepository, PgBookInstanceRepository};
pub use books::{BookRepository, PgBookRepository};
pub use genres::{GenreRepository, PgGenreRepository};

#[cfg(test)]
pub use book_instances::MockBookInstanceRepository;
#[cfg(test)]
pub use books::MockBookRepository;
#[cfg(test)]
pub use genres::MockGenreRepository;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub genres: PgGenreRepository,
    pub book_instances: PgBookInstanceRepository,
    pub books: PgBookRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            genres: PgGenreRepository::new(pool.clone()),
            book_instances: PgBookInstanceRepository::new(pool.clone()),
            books: PgBookRepository::new(pool.clone()),
            pool,
        }
    }
}
