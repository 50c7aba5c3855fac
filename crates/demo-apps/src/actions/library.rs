//! Actions for the book library.

use crate::domain_models::{Book, BookPatch, RecordId};
use unistore::Action;

#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LibraryAction {
    /// Append a new book (created with its id already assigned)
    AddBook(Book),

    /// Flip the read status of the book with this id
    ToggleReadStatus(RecordId),

    /// Merge updated details into the book with this id
    EditBook {
        id: RecordId,
        updated_details: BookPatch,
    },

    /// Remove the book with this id
    DeleteBook(RecordId),

    /// Replace the filter criteria
    FilterBooks(String),
}

impl LibraryAction {
    /// Create an `ADD_BOOK` action for a new unread book
    pub fn add_book(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        LibraryAction::AddBook(Book::new(title, author, genre))
    }

    /// Id of the record created by an `ADD_BOOK` action
    pub fn created_id(&self) -> Option<RecordId> {
        match self {
            LibraryAction::AddBook(book) => Some(book.id),
            _ => None,
        }
    }
}

impl Action for LibraryAction {
    fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kinds() {
        assert_eq!(LibraryAction::add_book("a", "b", "c").kind(), "ADD_BOOK");
        assert_eq!(
            LibraryAction::ToggleReadStatus(RecordId::generate()).kind(),
            "TOGGLE_READ_STATUS"
        );
        assert_eq!(
            LibraryAction::EditBook {
                id: RecordId::generate(),
                updated_details: BookPatch::default(),
            }
            .kind(),
            "EDIT_BOOK"
        );
        assert_eq!(LibraryAction::FilterBooks(String::new()).kind(), "FILTER_BOOKS");
    }
}
