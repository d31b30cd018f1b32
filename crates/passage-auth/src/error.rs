//! Authentication flow error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::HttpAction;

/// Errors produced while resolving an authentication attempt
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthError {
    /// The flow or one of its collaborators is misconfigured
    #[error("Authentication configuration error: {message}")]
    Configuration { message: String },

    /// A provider exchange failed (bad callback, upstream rejection, ...)
    #[error("Authentication protocol error: {message}")]
    Protocol { message: String },

    /// Generic authentication failure
    #[error("Authentication error: {message}")]
    Generic { message: String },

    /// An HTTP action was raised but no adapter or context was available
    /// to render it
    #[error("HTTP action {action} could not be rendered: no adapter or web context")]
    UnrenderedAction { action: HttpAction },

    /// A failure escalated past every recovery path, original cause attached
    #[error("Unrecoverable authentication failure")]
    Unrecoverable {
        #[source]
        source: Box<AuthError>,
    },
}

impl AuthError {
    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Configuration { .. } => "CONFIGURATION_ERROR",
            AuthError::Protocol { .. } => "PROTOCOL_ERROR",
            AuthError::Generic { .. } => "AUTHENTICATION_ERROR",
            AuthError::UnrenderedAction { .. } => "UNRENDERED_ACTION",
            AuthError::Unrecoverable { .. } => "UNRECOVERABLE",
        }
    }

    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Configuration { .. } => 500,
            AuthError::Protocol { .. } => 401,
            AuthError::Generic { .. } => 401,
            AuthError::UnrenderedAction { .. } => 500,
            AuthError::Unrecoverable { .. } => 500,
        }
    }

    /// Whether this error must surface to the host pipeline as-is.
    ///
    /// Unrecoverable errors are never converted into an error-page redirect
    /// and are never re-wrapped by [`into_unrecoverable`](Self::into_unrecoverable).
    pub fn is_unrecoverable(&self) -> bool {
        matches!(
            self,
            AuthError::Configuration { .. }
                | AuthError::UnrenderedAction { .. }
                | AuthError::Unrecoverable { .. }
        )
    }

    /// Escalate this error to an unrecoverable one.
    ///
    /// Already-unrecoverable errors are returned unchanged; anything else is
    /// wrapped with the original error kept as the source, so the cause chain
    /// survives escalation.
    pub fn into_unrecoverable(self) -> Self {
        if self.is_unrecoverable() {
            self
        } else {
            Self::Unrecoverable {
                source: Box::new(self),
            }
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn generic_error(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Create an error for an HTTP action that could not be rendered
    pub fn unrendered_action(action: HttpAction) -> Self {
        Self::UnrenderedAction { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::config_error("test").error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(AuthError::protocol_error("test").error_code(), "PROTOCOL_ERROR");
        assert_eq!(
            AuthError::generic_error("test").into_unrecoverable().error_code(),
            "UNRECOVERABLE"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::config_error("test").status_code(), 500);
        assert_eq!(AuthError::protocol_error("test").status_code(), 401);
        assert_eq!(
            AuthError::unrendered_action(HttpAction::no_content()).status_code(),
            500
        );
    }

    #[test]
    fn test_unrecoverable_classification() {
        assert!(AuthError::config_error("test").is_unrecoverable());
        assert!(AuthError::unrendered_action(HttpAction::no_content()).is_unrecoverable());
        assert!(!AuthError::protocol_error("test").is_unrecoverable());
        assert!(!AuthError::generic_error("test").is_unrecoverable());
    }

    #[test]
    fn test_into_unrecoverable_passes_through_unchanged() {
        let original = AuthError::config_error("missing adapter");
        assert_eq!(original.clone().into_unrecoverable(), original);

        let wrapped = AuthError::generic_error("boom").into_unrecoverable();
        assert_eq!(wrapped.clone().into_unrecoverable(), wrapped);
    }

    #[test]
    fn test_into_unrecoverable_preserves_cause() {
        let wrapped = AuthError::protocol_error("bad state").into_unrecoverable();
        let source = wrapped.source().expect("cause must be preserved");
        assert_eq!(
            source.to_string(),
            AuthError::protocol_error("bad state").to_string()
        );
    }

    #[test]
    fn test_error_display() {
        let err = AuthError::protocol_error("state mismatch");
        assert_eq!(
            err.to_string(),
            "Authentication protocol error: state mismatch"
        );
    }
}
