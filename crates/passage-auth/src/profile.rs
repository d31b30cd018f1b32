//! User profile and credential types

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// An established identity and the entitlements attached to it
///
/// The role set collapses duplicates; repeated role assignment is a no-op.
/// A profile is owned by the request that authenticated it and is not shared
/// across concurrent requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identifier of the profile within its provider
    pub id: String,

    /// Roles granted to this identity
    pub roles: HashSet<String>,

    /// Additional provider-specific attributes
    pub attributes: HashMap<String, serde_json::Value>,
}

impl UserProfile {
    /// Create a profile with no roles or attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: HashSet::new(),
            attributes: HashMap::new(),
        }
    }

    /// Add a single role
    pub fn add_role(&mut self, role: impl Into<String>) {
        self.roles.insert(role.into());
    }

    /// Add every role from the iterator
    pub fn add_roles<I, S>(&mut self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for role in roles {
            self.roles.insert(role.into());
        }
    }

    /// Check if the profile has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Opaque credential material forwarded to authorization generators
///
/// The flow never inspects this; strategies that derive authorizations from
/// the credential exchange may.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Raw token or assertion the provider exchanged, when available
    pub token: Option<String>,
}

impl Credentials {
    /// Create credentials wrapping a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}
