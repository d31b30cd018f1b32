//! Outcome resolution for authentication attempts
//!
//! Every authentication or authorization attempt ends in an [`AuthOutcome`]:
//! either a deliberate HTTP action (a challenge, a redirect) or a genuine
//! failure. [`ActionResolver`] converts that outcome into the final response
//! the caller sees, through the host-supplied
//! [`HttpActionAdapter`](crate::traits::HttpActionAdapter):
//!
//! - a deliberate action is rendered as-is, never treated as a failure
//! - a failure becomes a redirect to the configured error URL, when one is set
//! - otherwise the failure escalates to the host pipeline, unrecoverable,
//!   with its original cause intact

use std::fmt;

use crate::action::HttpAction;
use crate::callback::DefaultUrlResolver;
use crate::error::AuthError;
use crate::traits::{HttpActionAdapter, UrlResolver, WebContext};
use crate::AuthResult;

/// The result of an authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A deliberate, already-decided HTTP response
    Action(HttpAction),

    /// A genuine failure
    Failure(AuthError),
}

impl From<HttpAction> for AuthOutcome {
    fn from(action: HttpAction) -> Self {
        Self::Action(action)
    }
}

impl From<AuthError> for AuthOutcome {
    fn from(error: AuthError) -> Self {
        Self::Failure(error)
    }
}

/// Converts attempt outcomes into final responses
///
/// Configuration is fixed at construction and read-only afterwards, so one
/// resolver instance serves any number of concurrent requests. Resolution is
/// a pure, synchronous, one-shot decision; the only side effect is the single
/// call into the adapter.
pub struct ActionResolver {
    error_url: Option<String>,
    url_resolver: Box<dyn UrlResolver>,
}

impl ActionResolver {
    /// Create a resolver with no error URL and the standard URL strategy
    pub fn new() -> Self {
        Self {
            error_url: None,
            url_resolver: Box::new(DefaultUrlResolver::new()),
        }
    }

    /// Set the URL unexpected failures redirect to
    pub fn with_error_url(mut self, url: impl Into<String>) -> Self {
        self.error_url = Some(url.into());
        self
    }

    /// Replace the strategy used to compute the error redirect target
    pub fn with_url_resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
        self.url_resolver = Box::new(resolver);
        self
    }

    /// Get the configured error URL
    pub fn error_url(&self) -> Option<&str> {
        self.error_url.as_deref()
    }

    /// Resolve an attempt outcome into the adapter's final response.
    ///
    /// A missing adapter or context is a fatal configuration error: no
    /// adaptation is attempted and the outcome is propagated as an
    /// unrecoverable [`AuthError`], regardless of the outcome kind or any
    /// configured error URL. A blank error URL counts as unset.
    pub fn resolve<A>(
        &self,
        outcome: AuthOutcome,
        adapter: Option<&A>,
        context: Option<&dyn WebContext>,
    ) -> AuthResult<A::Output>
    where
        A: HttpActionAdapter + ?Sized,
    {
        let (Some(adapter), Some(context)) = (adapter, context) else {
            return Err(fatal(outcome));
        };

        match outcome {
            AuthOutcome::Action(action) => {
                tracing::debug!(status = action.status(), "extra HTTP action required");
                Ok(adapter.adapt(&action, context))
            }
            AuthOutcome::Failure(error) => {
                match self.error_url.as_deref().filter(|url| !url.trim().is_empty()) {
                    Some(error_url) => {
                        let target = self.url_resolver.compute(error_url, context);
                        tracing::debug!(error = %error, redirect = %target, "redirecting failed attempt to error URL");
                        Ok(adapter.adapt(&HttpAction::found(target), context))
                    }
                    None => Err(error.into_unrecoverable()),
                }
            }
        }
    }
}

impl Default for ActionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionResolver")
            .field("error_url", &self.error_url)
            .finish_non_exhaustive()
    }
}

/// Propagate an outcome that cannot be rendered
fn fatal(outcome: AuthOutcome) -> AuthError {
    match outcome {
        AuthOutcome::Action(action) => AuthError::unrendered_action(action),
        AuthOutcome::Failure(error) => error.into_unrecoverable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockWebContext, PassthroughAdapter};
    use std::error::Error;

    const ADAPTER: PassthroughAdapter = PassthroughAdapter;

    fn resolve_with(
        resolver: &ActionResolver,
        outcome: AuthOutcome,
        context: &MockWebContext,
    ) -> AuthResult<HttpAction> {
        resolver.resolve(outcome, Some(&ADAPTER), Some(context))
    }

    #[test]
    fn test_action_outcome_is_rendered_as_is() {
        let resolver = ActionResolver::new();
        let action = HttpAction::found("/login");
        let rendered = resolve_with(&resolver, action.clone().into(), &MockWebContext::new())
            .expect("deliberate action must render");
        assert_eq!(rendered, action);
    }

    #[test]
    fn test_action_outcome_ignores_error_url() {
        // a 302 challenge is not a failure and must never be substituted
        let resolver = ActionResolver::new().with_error_url("/error");
        let action = HttpAction::found("/login");
        let rendered = resolve_with(&resolver, action.clone().into(), &MockWebContext::new())
            .expect("deliberate action must render");
        assert_eq!(rendered, action);
    }

    #[test]
    fn test_failure_redirects_to_error_url() {
        let resolver = ActionResolver::new().with_error_url("/error");
        let rendered = resolve_with(
            &resolver,
            AuthError::protocol_error("bad callback").into(),
            &MockWebContext::new(),
        )
        .expect("failure must redirect when an error URL is set");
        assert_eq!(rendered, HttpAction::found("/error"));
    }

    #[test]
    fn test_failure_redirect_uses_url_resolver() {
        let resolver = ActionResolver::new()
            .with_error_url("/error")
            .with_url_resolver(DefaultUrlResolver::completing_relative_urls());
        let context = MockWebContext::new()
            .with_scheme("https")
            .with_server_name("example.org")
            .with_server_port(443);
        let rendered = resolve_with(
            &resolver,
            AuthError::protocol_error("bad callback").into(),
            &context,
        )
        .expect("failure must redirect when an error URL is set");
        assert_eq!(rendered, HttpAction::found("https://example.org/error"));
    }

    #[test]
    fn test_blank_error_url_counts_as_unset() {
        let resolver = ActionResolver::new().with_error_url("   ");
        let result = resolve_with(
            &resolver,
            AuthError::protocol_error("boom").into(),
            &MockWebContext::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_without_error_url_escalates_wrapped() {
        let resolver = ActionResolver::new();
        let error = resolve_with(
            &resolver,
            AuthError::protocol_error("boom").into(),
            &MockWebContext::new(),
        )
        .unwrap_err();
        assert!(error.is_unrecoverable());
        let source = error.source().expect("original cause must be preserved");
        assert_eq!(
            source.to_string(),
            AuthError::protocol_error("boom").to_string()
        );
    }

    #[test]
    fn test_unrecoverable_failure_passes_through_unchanged() {
        let resolver = ActionResolver::new();
        let original = AuthError::config_error("no client configured");
        let error = resolve_with(&resolver, original.clone().into(), &MockWebContext::new())
            .unwrap_err();
        assert_eq!(error, original);
    }

    #[test]
    fn test_missing_adapter_is_fatal() {
        let resolver = ActionResolver::new().with_error_url("/error");
        let context = MockWebContext::new();
        let result = resolver.resolve::<PassthroughAdapter>(
            AuthError::protocol_error("boom").into(),
            None,
            Some(&context),
        );
        assert!(result.unwrap_err().is_unrecoverable());
    }

    #[test]
    fn test_missing_context_is_fatal_even_for_actions() {
        let resolver = ActionResolver::new().with_error_url("/error");
        let result = resolver.resolve(
            HttpAction::found("/login").into(),
            Some(&ADAPTER),
            None,
        );
        let error = result.unwrap_err();
        assert!(error.is_unrecoverable());
        assert_eq!(error.error_code(), "UNRENDERED_ACTION");
    }
}
