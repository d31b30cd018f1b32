//! Default authorization generation strategies

use crate::profile::{Credentials, UserProfile};
use crate::traits::{AuthorizationGenerator, WebContext};

/// Grants a fixed set of roles to every authenticated profile
///
/// The role list is fixed at construction (empty by default) and read-only
/// afterwards. Generation is idempotent: the profile's role set collapses
/// duplicates, so applying the generator twice is the same as applying it
/// once. This default strategy ignores the web context and credentials
/// entirely and accepts both being absent.
#[derive(Debug, Clone, Default)]
pub struct DefaultRolesAuthorizationGenerator {
    default_roles: Vec<String>,
}

impl DefaultRolesAuthorizationGenerator {
    /// Create a generator granting the given roles
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the configured roles
    pub fn default_roles(&self) -> &[String] {
        &self.default_roles
    }
}

impl AuthorizationGenerator for DefaultRolesAuthorizationGenerator {
    fn generate(
        &self,
        _context: Option<&dyn WebContext>,
        _credentials: Option<&Credentials>,
        profile: &mut UserProfile,
    ) {
        profile.add_roles(self.default_roles.iter().cloned());
    }
}
