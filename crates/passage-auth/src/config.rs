//! Authentication flow configuration types and utilities

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::authorization::DefaultRolesAuthorizationGenerator;
use crate::callback::DefaultUrlResolver;
use crate::engine::ActionResolver;
use crate::error::AuthError;
use crate::AuthResult;

/// Authentication flow configuration
///
/// Built once at startup, validated, then shared read-only with every
/// request. The wiring helpers produce the strategy objects configured here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthFlowConfig {
    /// Base URL of the shared callback endpoint
    #[serde(default)]
    pub callback_url: String,

    /// Where unexpected failures redirect; failures are fatal when unset
    pub error_url: Option<String>,

    /// Roles granted to every authenticated profile
    #[serde(default)]
    pub default_roles: Vec<String>,

    /// Names of the configured clients, unique and non-blank
    #[serde(default)]
    pub clients: Vec<String>,

    /// Complete relative URLs against the request scheme/host/port
    #[serde(default)]
    pub complete_relative_urls: bool,
}

impl AuthFlowConfig {
    /// Validate the configuration
    pub fn validate(&self) -> AuthResult<()> {
        if let Some(url) = &self.error_url {
            if url.trim().is_empty() {
                return Err(AuthError::config_error("error_url must not be blank when set"));
            }
        }

        let mut seen = HashSet::new();
        for name in &self.clients {
            if name.trim().is_empty() {
                return Err(AuthError::config_error("client names must not be blank"));
            }
            if !seen.insert(name.as_str()) {
                return Err(AuthError::config_error(format!(
                    "duplicate client name: {}",
                    name
                )));
            }
        }

        if !self.clients.is_empty() && self.callback_url.trim().is_empty() {
            return Err(AuthError::config_error(
                "callback_url is required when clients are configured",
            ));
        }

        Ok(())
    }

    /// Build the configured action resolver
    pub fn action_resolver(&self) -> ActionResolver {
        let resolver = ActionResolver::new().with_url_resolver(self.url_resolver());
        match &self.error_url {
            Some(url) => resolver.with_error_url(url.clone()),
            None => resolver,
        }
    }

    /// Build the configured default-roles generator
    pub fn authorization_generator(&self) -> DefaultRolesAuthorizationGenerator {
        DefaultRolesAuthorizationGenerator::new(self.default_roles.iter().cloned())
    }

    /// Build the configured base URL resolver
    pub fn url_resolver(&self) -> DefaultUrlResolver {
        if self.complete_relative_urls {
            DefaultUrlResolver::completing_relative_urls()
        } else {
            DefaultUrlResolver::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AuthFlowConfig {
        AuthFlowConfig {
            callback_url: "https://host/cb".to_string(),
            error_url: Some("/error".to_string()),
            default_roles: vec!["user".to_string()],
            clients: vec!["github".to_string(), "oidc".to_string()],
            complete_relative_urls: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base_config().validate().is_ok());
        assert!(AuthFlowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_blank_error_url_rejected() {
        let mut config = base_config();
        config.error_url = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_client_name_rejected() {
        let mut config = base_config();
        config.clients.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_client_name_rejected() {
        let mut config = base_config();
        config.clients.push("github".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clients_require_callback_url() {
        let mut config = base_config();
        config.callback_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wiring_helpers() {
        let config = base_config();
        assert_eq!(config.action_resolver().error_url(), Some("/error"));
        assert_eq!(
            config.authorization_generator().default_roles(),
            ["user".to_string()]
        );

        let mut config = config;
        config.error_url = None;
        assert_eq!(config.action_resolver().error_url(), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: AuthFlowConfig = serde_json::from_str("{}").expect("minimal config");
        assert!(config.callback_url.is_empty());
        assert!(config.error_url.is_none());
        assert!(config.default_roles.is_empty());
        assert!(config.clients.is_empty());
        assert!(!config.complete_relative_urls);
    }
}
