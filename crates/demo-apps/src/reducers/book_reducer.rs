//! Book Reducer
//!
//! Owns the `books` slice of the library. `FILTER_BOOKS` is not handled
//! here and leaves the slice unchanged.

use crate::actions::LibraryAction;
use crate::state::BooksState;
use unistore::Reducer;

pub fn reduce_books(mut state: BooksState, action: &LibraryAction) -> BooksState {
    match action {
        LibraryAction::AddBook(book) => {
            log::debug!("Adding book {}: {:?} by {:?}", book.id, book.title, book.author);
            state.books.push(book.clone());
        }
        LibraryAction::ToggleReadStatus(id) => {
            if let Some(book) = state.books.iter_mut().find(|book| book.id == *id) {
                *book = book.toggled();
            }
        }
        LibraryAction::EditBook {
            id,
            updated_details,
        } => {
            if let Some(book) = state.books.iter_mut().find(|book| book.id == *id) {
                *book = updated_details.apply_to(book);
            }
        }
        LibraryAction::DeleteBook(id) => {
            state.books.retain(|book| book.id != *id);
        }
        LibraryAction::FilterBooks(_) => {}
    }
    state
}

impl Reducer<LibraryAction> for BooksState {
    fn reduce(self, action: &LibraryAction) -> Self {
        reduce_books(self, action)
    }
}
