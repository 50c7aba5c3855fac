use super::RecordId;
use serde::{Deserialize, Serialize};

/// A todo item; `status` is true once completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub title: String,
    pub status: bool,
}

impl Todo {
    /// New open todo with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            title: title.into(),
            status: false,
        }
    }

    /// Copy of this todo with `status` flipped
    pub fn toggled(&self) -> Self {
        Self {
            status: !self.status,
            ..self.clone()
        }
    }
}
