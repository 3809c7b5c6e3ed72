use thiserror::Error;

/// Errors reported by [`crate::BackStack`] construction and [`crate::BackStack::set`].
///
/// Every other stack operation is total and reports success through its
/// boolean return value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    /// An empty page list was passed to construction or `set`.
    #[error("invalid argument: page list must not be empty")]
    EmptyPages,

    /// `set` attempted to replace the stack with a different root page.
    #[error("invalid argument: the root page is fixed once the stack is created")]
    RootChanged,
}
