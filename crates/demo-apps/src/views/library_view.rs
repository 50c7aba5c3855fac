//! Book library view
//!
//! `add` takes `title | author | genre`; a book is only added when all three
//! are non-empty. `edit` takes `;`-separated `field=value` pairs.

use super::{common_command, resolve_id, split_command, Command, CommandError, ParseResult, View};
use crate::actions::LibraryAction;
use crate::domain_models::BookPatch;
use crate::state::LibraryState;

const EDIT_USAGE: &str = "edit <id> title=..; author=..; genre=..; read=true|false";

#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryView;

impl View for LibraryView {
    type State = LibraryState;
    type Action = LibraryAction;

    fn title(&self) -> &'static str {
        "Book Library"
    }

    fn parse(&self, line: &str, state: &LibraryState) -> ParseResult<LibraryAction> {
        let Some((verb, rest)) = split_command(line) else {
            return Ok(None);
        };
        let ids = || state.books.books.iter().map(|book| &book.id);

        match verb.as_str() {
            "add" => {
                let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
                match fields.as_slice() {
                    [title, author, genre]
                        if !title.is_empty() && !author.is_empty() && !genre.is_empty() =>
                    {
                        Ok(Some(Command::Dispatch(LibraryAction::add_book(
                            *title, *author, *genre,
                        ))))
                    }
                    _ => Ok(None),
                }
            }
            "toggle" | "read" | "unread" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("toggle <id>"));
                }
                let id = resolve_id(rest, ids())?;
                Ok(Some(Command::Dispatch(LibraryAction::ToggleReadStatus(id))))
            }
            "edit" => {
                let (id_arg, details) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if id_arg.is_empty() {
                    return Err(CommandError::Usage(EDIT_USAGE));
                }
                let id = resolve_id(id_arg, ids())?;
                let updated_details = parse_patch(details)?;
                if updated_details.is_empty() {
                    return Ok(None);
                }
                Ok(Some(Command::Dispatch(LibraryAction::EditBook {
                    id,
                    updated_details,
                })))
            }
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("delete <id>"));
                }
                let id = resolve_id(rest, ids())?;
                Ok(Some(Command::Dispatch(LibraryAction::DeleteBook(id))))
            }
            "filter" => Ok(Some(Command::Dispatch(LibraryAction::FilterBooks(
                rest.to_string(),
            )))),
            other => common_command(other)
                .map(Some)
                .ok_or_else(|| CommandError::Unknown(other.to_string())),
        }
    }

    fn render(&self, state: &LibraryState) -> String {
        let mut out = String::from(self.title());
        if state.books.books.is_empty() {
            out.push_str("\n  (empty)");
        }
        for book in &state.books.books {
            let mark = if book.read { "x" } else { " " };
            out.push_str(&format!(
                "\n  [{}] {} by {} ({})  ({})",
                mark,
                book.title,
                book.author,
                book.genre,
                book.id.short()
            ));
        }
        out
    }

    fn snapshot(&self, state: &LibraryState) -> serde_json::Result<String> {
        serde_json::to_string(&state.books.books)
    }

    fn help(&self) -> &'static str {
        "add <title> | <author> | <genre> | toggle <id> | edit <id> field=value; .. | delete <id> | filter <criteria> | list | quit"
    }
}

/// Parse `title=..; author=..` into a patch, skipping blank values
fn parse_patch(details: &str) -> Result<BookPatch, CommandError> {
    let mut patch = BookPatch::default();
    for pair in details.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or(CommandError::Usage(EDIT_USAGE))?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim().to_lowercase().as_str() {
            "title" => patch.title = Some(value.to_string()),
            "author" => patch.author = Some(value.to_string()),
            "genre" => patch.genre = Some(value.to_string()),
            "read" => {
                patch.read = Some(
                    value
                        .parse::<bool>()
                        .map_err(|_| CommandError::Usage(EDIT_USAGE))?,
                )
            }
            _ => return Err(CommandError::Usage(EDIT_USAGE)),
        }
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::book_reducer::reduce_books;
    use crate::state::BooksState;

    fn library() -> LibraryState {
        LibraryState {
            books: reduce_books(
                BooksState::default(),
                &LibraryAction::add_book("Dune", "Frank Herbert", "Sci-Fi"),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_requires_all_fields() {
        let state = LibraryState::default();
        assert_eq!(LibraryView.parse("add Dune | Frank Herbert", &state), Ok(None));
        assert_eq!(LibraryView.parse("add Dune |  | Sci-Fi", &state), Ok(None));

        match LibraryView.parse("add Dune | Frank Herbert | Sci-Fi", &state) {
            Ok(Some(Command::Dispatch(LibraryAction::AddBook(book)))) => {
                assert_eq!(book.title, "Dune");
                assert_eq!(book.author, "Frank Herbert");
                assert_eq!(book.genre, "Sci-Fi");
                assert!(!book.read);
            }
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn test_edit_builds_patch() {
        let state = library();
        let id = state.books.books[0].id;
        let line = format!("edit {} title=Dune Messiah; read=true", id.short());

        assert_eq!(
            LibraryView.parse(&line, &state),
            Ok(Some(Command::Dispatch(LibraryAction::EditBook {
                id,
                updated_details: BookPatch {
                    title: Some("Dune Messiah".to_string()),
                    read: Some(true),
                    ..Default::default()
                },
            })))
        );
    }

    #[test]
    fn test_edit_rejects_unknown_field() {
        let state = library();
        let line = format!("edit {} pages=400", state.books.books[0].id);
        assert_eq!(
            LibraryView.parse(&line, &state),
            Err(CommandError::Usage(EDIT_USAGE))
        );
    }

    #[test]
    fn test_edit_with_only_blank_values_is_ignored() {
        let state = library();
        let line = format!("edit {} title= ", state.books.books[0].id);
        assert_eq!(LibraryView.parse(&line, &state), Ok(None));
    }

    #[test]
    fn test_filter_dispatches_criteria() {
        assert_eq!(
            LibraryView.parse("filter Sci-Fi", &LibraryState::default()),
            Ok(Some(Command::Dispatch(LibraryAction::FilterBooks(
                "Sci-Fi".to_string()
            ))))
        );
    }

    #[test]
    fn test_render_and_snapshot() {
        let state = library();
        assert!(LibraryView
            .render(&state)
            .contains("[ ] Dune by Frank Herbert (Sci-Fi)"));

        let json = LibraryView.snapshot(&state).unwrap();
        assert!(json.starts_with("[{\"id\":"));
        assert!(json.contains("\"read\":false"));
    }
}
