//! App error types.

use thiserror::Error;

/// Errors from app event handling.
///
/// Rejected logins are not errors here: they become a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Navigation to a path no route is registered for.
    #[error("unknown route: {path}")]
    UnknownRoute {
        /// The requested path.
        path: String,
    },
}

impl AppError {
    /// Returns true if this error is fatal (unrecoverable).
    ///
    /// Every app error leaves state untouched, so none are fatal.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::UnknownRoute { .. } => false,
        }
    }
}
