//! Mock collaborators for testing authentication flows

use std::collections::HashMap;

use crate::action::HttpAction;
use crate::traits::{HttpActionAdapter, WebContext};

/// In-memory [`WebContext`] for tests
///
/// Defaults to an empty path on `http://localhost:80` with no parameters.
#[derive(Debug, Clone)]
pub struct MockWebContext {
    path: String,
    scheme: String,
    server_name: String,
    server_port: u16,
    parameters: HashMap<String, String>,
}

impl MockWebContext {
    /// Create a context with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the request scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the server name
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Set the server port
    pub fn with_server_port(mut self, server_port: u16) -> Self {
        self.server_port = server_port;
        self
    }

    /// Add a request parameter
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

impl Default for MockWebContext {
    fn default() -> Self {
        Self {
            path: String::new(),
            scheme: "http".to_string(),
            server_name: "localhost".to_string(),
            server_port: 80,
            parameters: HashMap::new(),
        }
    }
}

impl WebContext for MockWebContext {
    fn path(&self) -> &str {
        &self.path
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn server_name(&self) -> &str {
        &self.server_name
    }

    fn server_port(&self) -> u16 {
        self.server_port
    }

    fn request_parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }
}

/// Adapter whose rendering is the action itself
///
/// Lets tests assert on exactly what the flow asked the host stack to
/// produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAdapter;

impl HttpActionAdapter for PassthroughAdapter {
    type Output = HttpAction;

    fn adapt(&self, action: &HttpAction, _context: &dyn WebContext) -> HttpAction {
        action.clone()
    }
}
