//! Book model
//!
//! Domain model for the book library.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// A book in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    /// New unread book with a fresh id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            read: false,
        }
    }

    /// Copy of this book with `read` flipped
    pub fn toggled(&self) -> Self {
        Self {
            read: !self.read,
            ..self.clone()
        }
    }
}

/// Updated details for a book
///
/// Set fields replace the book's values, unset fields keep them. The id is
/// not part of the patch, it never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.genre.is_none() && self.read.is_none()
    }

    /// Shallow-merge this patch over `book`, returning the replacement record
    pub fn apply_to(&self, book: &Book) -> Book {
        Book {
            id: book.id,
            title: self.title.clone().unwrap_or_else(|| book.title.clone()),
            author: self.author.clone().unwrap_or_else(|| book.author.clone()),
            genre: self.genre.clone().unwrap_or_else(|| book.genre.clone()),
            read: self.read.unwrap_or(book.read),
        }
    }
}
