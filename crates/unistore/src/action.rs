//! Action trait

use std::fmt::Debug;

/// An immutable description of a requested state change.
///
/// Apps model their actions as one enum per app, so reducers match
/// exhaustively over the variants. `kind` exposes the stable tag of a
/// variant (e.g. `"ADD_TODO"`) for logging and display; enums usually
/// derive it with `strum::IntoStaticStr`.
///
/// Actions must be `Send` so async tasks can queue them through a
/// [`Dispatcher`](crate::Dispatcher).
pub trait Action: Debug + Send + 'static {
    /// Tag of this action, e.g. `"TOGGLE_TODO"`
    fn kind(&self) -> &'static str;
}
