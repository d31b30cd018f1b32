//! Adapter-independent HTTP action values
//!
//! An [`HttpAction`] is the structured description of "produce this HTTP
//! response now". It is the only legitimate way an authentication attempt
//! signals a deliberate response (a challenge, a redirect) as opposed to a
//! failure. Turning an action into a concrete framework response is the job
//! of an [`HttpActionAdapter`](crate::traits::HttpActionAdapter).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable HTTP-level response directive: a status code plus optional
/// redirect location and body content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpAction {
    status: u16,
    location: Option<String>,
    content: Option<String>,
}

impl HttpAction {
    /// Create an action with a bare status code
    pub fn new(status: u16) -> Self {
        Self {
            status,
            location: None,
            content: None,
        }
    }

    fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            location: Some(location.into()),
            content: None,
        }
    }

    /// Create a 200 OK action carrying body content
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            status: 200,
            location: None,
            content: Some(content.into()),
        }
    }

    /// Create a 204 No Content action
    pub fn no_content() -> Self {
        Self::new(204)
    }

    /// Create a 302 Found redirect
    pub fn found(location: impl Into<String>) -> Self {
        Self::redirect(302, location)
    }

    /// Create a 303 See Other redirect
    pub fn see_other(location: impl Into<String>) -> Self {
        Self::redirect(303, location)
    }

    /// Create a 307 Temporary Redirect
    pub fn temporary_redirect(location: impl Into<String>) -> Self {
        Self::redirect(307, location)
    }

    /// Create a 400 Bad Request action
    pub fn bad_request() -> Self {
        Self::new(400)
    }

    /// Create a 401 Unauthorized action
    pub fn unauthorized() -> Self {
        Self::new(401)
    }

    /// Create a 403 Forbidden action
    pub fn forbidden() -> Self {
        Self::new(403)
    }

    /// Get the status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the redirect target, if any
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Get the body content, if any
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Check if the action is a redirect (3xx status)
    pub fn is_redirection(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

impl fmt::Display for HttpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} -> {}", self.status, location),
            None => write!(f, "{}", self.status),
        }
    }
}
