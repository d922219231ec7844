//! Business logic services

pub mod book_instances;
pub mod genres;

use std::sync::Arc;

use crate::repository::Repository;

pub use book_instances::BookInstancesService;
pub use genres::{CreateGenreOutcome, DeleteGenreOutcome, GenresService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub genres: GenresService,
    pub book_instances: BookInstancesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let books = Arc::new(repository.books.clone());
        Self {
            genres: GenresService::new(Arc::new(repository.genres.clone()), books.clone()),
            book_instances: BookInstancesService::new(
                Arc::new(repository.book_instances.clone()),
                books,
            ),
        }
    }
}
