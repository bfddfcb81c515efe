use thiserror::Error;

/// Configuration errors reported at the parse boundary.
///
/// The core pipeline is infallible; invalid settings are rejected while
/// parsing them, before any batch is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniquifyError {
    /// The direction mode was neither `head` nor `tail`.
    #[error("`{0}` is not a recognized direction mode")]
    UnknownDirection(String),

    /// The operation name did not match any of the four entry points.
    #[error("`{0}` is not a recognized operation")]
    UnknownOperation(String),
}
