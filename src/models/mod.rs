//! Data models for the catalog

pub mod book;
pub mod book_instance;
pub mod genre;

// Re-export commonly used types
pub use book::Book;
pub use book_instance::{
    BookInstance, BookInstanceForm, BookInstanceWithBook, NewBookInstance, ValidatedBookInstance,
};
pub use genre::{Genre, GenreForm};
