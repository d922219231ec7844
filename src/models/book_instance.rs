//! Book instance (physical copy) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{self, ValidationErrors};

/// Book copy record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    /// Canonical detail URL for this record
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }
}

/// Book copy with its book reference expanded
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookInstanceWithBook {
    pub id: i32,
    pub book_id: i32,
    pub book_title: String,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

/// Fields of a copy to insert or overwrite, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookInstance {
    pub book_id: i32,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

/// Raw book copy form body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

/// Result of validating a [`BookInstanceForm`]
pub struct ValidatedBookInstance {
    /// Sanitized field values, for re-rendering the form on failure
    pub form: BookInstanceForm,
    /// Parsed book id when the submitted reference was usable
    pub selected_book: Option<i32>,
    /// The record to store; present only when validation passed
    pub record: Option<NewBookInstance>,
    pub errors: ValidationErrors,
}

impl BookInstanceForm {
    pub fn validate(&self) -> ValidatedBookInstance {
        let mut errors = ValidationErrors::new();
        let book = validation::validate_text(
            &mut errors,
            "book",
            &self.book,
            1,
            "Book must be specified",
        );
        let imprint = validation::validate_text(
            &mut errors,
            "imprint",
            &self.imprint,
            1,
            "Imprint must be specified",
        );
        let status = validation::sanitize(&self.status);
        let due_back =
            validation::optional_iso_date(&mut errors, "due_back", &self.due_back, "Invalid date");

        let selected_book = book.parse::<i32>().ok();
        if selected_book.is_none() && !book.is_empty() {
            errors.push("book", "Book must be specified");
        }

        let record = match (selected_book, errors.is_empty()) {
            (Some(book_id), true) => Some(NewBookInstance {
                book_id,
                imprint: imprint.clone(),
                status: status.clone(),
                due_back,
            }),
            _ => None,
        };

        ValidatedBookInstance {
            form: BookInstanceForm {
                book,
                imprint,
                status,
                due_back: self.due_back.trim().to_string(),
            },
            selected_book,
            record,
            errors,
        }
    }
}

impl From<&BookInstanceWithBook> for BookInstanceForm {
    fn from(instance: &BookInstanceWithBook) -> Self {
        Self {
            book: instance.book_id.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.clone(),
            due_back: instance
                .due_back
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}
