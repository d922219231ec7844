//! Book copy workflows

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Book, BookInstance, BookInstanceWithBook, NewBookInstance},
    repository::{BookInstanceRepository, BookRepository},
};

#[derive(Clone)]
pub struct BookInstancesService {
    instances: Arc<dyn BookInstanceRepository>,
    books: Arc<dyn BookRepository>,
}

impl BookInstancesService {
    pub fn new(instances: Arc<dyn BookInstanceRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { instances, books }
    }

    pub async fn list(&self) -> AppResult<Vec<BookInstanceWithBook>> {
        self.instances.list_with_books().await
    }

    pub async fn detail(&self, id: i32) -> AppResult<BookInstanceWithBook> {
        self.instances.find_with_book(id).await
    }

    /// Book picker entries for the copy form
    pub async fn book_choices(&self) -> AppResult<Vec<Book>> {
        self.books.list_titles().await
    }

    /// The copy being edited plus the book picker, fetched concurrently
    pub async fn edit_view(&self, id: i32) -> AppResult<(BookInstanceWithBook, Vec<Book>)> {
        let (instance, books) =
            tokio::try_join!(self.instances.find_with_book(id), self.books.list_titles())?;
        Ok((instance, books))
    }

    pub async fn create(&self, record: &NewBookInstance) -> AppResult<BookInstance> {
        self.instances.create(record).await
    }

    pub async fn update(&self, id: i32, record: &NewBookInstance) -> AppResult<BookInstance> {
        self.instances.update(id, record).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.instances.delete(id).await
    }
}
