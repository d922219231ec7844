//! Genre workflows

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Book, Genre},
    repository::{BookRepository, GenreRepository},
};

/// Outcome of a create request after the application-level duplicate check
#[derive(Debug)]
pub enum CreateGenreOutcome {
    Created(Genre),
    /// A genre with the same name already exists; nothing was inserted
    AlreadyExists(Genre),
}

/// Outcome of a delete request after the referencing-books guard
#[derive(Debug)]
pub enum DeleteGenreOutcome {
    Deleted,
    /// Books still reference the genre; it was left untouched
    Blocked { genre: Genre, books: Vec<Book> },
}

#[derive(Clone)]
pub struct GenresService {
    genres: Arc<dyn GenreRepository>,
    books: Arc<dyn BookRepository>,
}

impl GenresService {
    pub fn new(genres: Arc<dyn GenreRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { genres, books }
    }

    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.genres.list().await
    }

    pub async fn find(&self, id: i32) -> AppResult<Genre> {
        self.genres.find_by_id(id).await
    }

    /// The genre plus the books whose genre list references it, fetched
    /// concurrently
    pub async fn detail(&self, id: i32) -> AppResult<(Genre, Vec<Book>)> {
        let (genre, books) =
            tokio::try_join!(self.genres.find_by_id(id), self.books.find_by_genre(id))?;
        Ok((genre, books))
    }

    /// Insert unless a genre with the exact same name already exists.
    ///
    /// Uniqueness is screened here, not by a store constraint.
    pub async fn create(&self, name: &str) -> AppResult<CreateGenreOutcome> {
        if let Some(existing) = self.genres.find_by_name(name).await? {
            return Ok(CreateGenreOutcome::AlreadyExists(existing));
        }
        let genre = self.genres.create(name).await?;
        Ok(CreateGenreOutcome::Created(genre))
    }

    /// Rename the genre; the duplicate check is not re-run on update
    pub async fn update(&self, id: i32, name: &str) -> AppResult<Genre> {
        self.genres.update(id, name).await
    }

    /// Delete unless at least one book still references the genre
    pub async fn delete(&self, id: i32) -> AppResult<DeleteGenreOutcome> {
        let (genre, books) = self.detail(id).await?;
        if !books.is_empty() {
            return Ok(DeleteGenreOutcome::Blocked { genre, books });
        }
        self.genres.delete(genre.id).await?;
        Ok(DeleteGenreOutcome::Deleted)
    }
}
