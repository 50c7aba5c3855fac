//! Book library state
//!
//! Two slices: the books themselves and the filter criteria. The filter is
//! stored but nothing reads it yet.

use crate::domain_models::{Book, RecordId};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BooksState {
    pub books: Vec<Book>,
}

impl BooksState {
    pub fn find(&self, id: RecordId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookFilterState {
    pub filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryState {
    pub books: BooksState,
    pub filter: BookFilterState,
}
