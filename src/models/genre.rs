//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{self, ValidationErrors};

/// Genre record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Canonical detail URL for this record
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

/// Raw genre form body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

impl GenreForm {
    /// Sanitize and check the name field.
    ///
    /// `min` is 1 on create and 3 on update. Returns the sanitized name so
    /// a failed form re-renders with the submitted value intact.
    pub fn validate(&self, min: usize, message: &str) -> (String, ValidationErrors) {
        let mut errors = ValidationErrors::new();
        let name = validation::validate_text(&mut errors, "name", &self.name, min, message);
        (name, errors)
    }
}
