use alloc::string::String;

/// Errors from parsing a [`crate::RootMargin`] or [`crate::Length`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MarginError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes at most 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid length `{0}` (expected a number followed by `px` or `%`)")]
    InvalidLength(String),
}
