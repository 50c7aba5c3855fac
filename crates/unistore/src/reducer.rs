//! Reducer trait and slice composition

/// Pure state transition for one slice of state.
///
/// A reducer takes the current slice by value and returns the full
/// replacement. It is total: there is no failure path. Actions that do not
/// concern the slice must return the input unchanged.
pub trait Reducer<A> {
    fn reduce(self, action: &A) -> Self;
}

/// Implements [`Reducer`] for a state struct by applying the reducer of
/// each named slice field to that field alone.
///
/// Every field of the struct must be listed, so the composed reducer always
/// builds a complete new state and never merges partial slices.
///
/// ```rust
/// use unistore::{combine_reducers, Reducer};
///
/// #[derive(Default)]
/// struct Count(i64);
/// #[derive(Default)]
/// struct Label(String);
///
/// enum Msg {
///     Bump,
///     Rename(String),
/// }
///
/// impl Reducer<Msg> for Count {
///     fn reduce(self, action: &Msg) -> Self {
///         match action {
///             Msg::Bump => Count(self.0 + 1),
///             _ => self,
///         }
///     }
/// }
///
/// impl Reducer<Msg> for Label {
///     fn reduce(self, action: &Msg) -> Self {
///         match action {
///             Msg::Rename(name) => Label(name.clone()),
///             _ => self,
///         }
///     }
/// }
///
/// #[derive(Default)]
/// struct State {
///     count: Count,
///     label: Label,
/// }
///
/// combine_reducers!(State, Msg { count, label });
///
/// let state = State::default().reduce(&Msg::Bump).reduce(&Msg::Rename("x".into()));
/// assert_eq!(state.count.0, 1);
/// assert_eq!(state.label.0, "x");
/// ```
#[macro_export]
macro_rules! combine_reducers {
    ($state:ty, $action:ty { $($slice:ident),+ $(,)? }) => {
        impl $crate::Reducer<$action> for $state {
            fn reduce(self, action: &$action) -> Self {
                Self {
                    $($slice: $crate::Reducer::reduce(self.$slice, action),)+
                }
            }
        }
    };
}
