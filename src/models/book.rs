//! Book model
//!
//! Books are owned by a separate catalog collaborator; this server only
//! reads them, for the copy form's book picker and for the referencing-books
//! guard on genre deletion.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book record, id and title only
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
}
