//! Core authentication flow traits
//!
//! The seams between this crate's decision logic and the host web stack.
//! Hosts implement [`WebContext`] and [`HttpActionAdapter`] once per
//! framework; the strategy traits have default implementations in
//! [`callback`](crate::callback) and [`authorization`](crate::authorization).

use crate::action::HttpAction;
use crate::profile::{Credentials, UserProfile};

/// Read-only view of the current HTTP request
///
/// Exposes exactly what the decision logic needs: the request path for
/// callback routing, the scheme/host/port for URL completion, and request
/// parameters for query-based client routing.
pub trait WebContext {
    /// Path portion of the request URL, without the query string
    fn path(&self) -> &str;

    /// Request scheme, `"http"` or `"https"`
    fn scheme(&self) -> &str;

    /// Server host name
    fn server_name(&self) -> &str;

    /// Server port
    fn server_port(&self) -> u16;

    /// Value of a request parameter (query or form), if present
    fn request_parameter(&self, name: &str) -> Option<String>;
}

/// Renders an [`HttpAction`] into a concrete framework response
///
/// The sole way the flow turns an abstract action into a protocol-level
/// response. Rendering a well-formed action must not fail; fallibility
/// belongs to the host stack behind `Output` if it needs it.
pub trait HttpActionAdapter: Send + Sync {
    /// The host framework's response type
    type Output;

    /// Render the action against the current request context
    fn adapt(&self, action: &HttpAction, context: &dyn WebContext) -> Self::Output;
}

/// Computes the canonical form of a configured URL for the current request
pub trait UrlResolver: Send + Sync {
    /// Compute the final URL, possibly completing a relative one against
    /// the request's scheme, host and port
    fn compute(&self, url: &str, context: &dyn WebContext) -> String;
}

/// Strategy that lets many named clients share one callback endpoint
///
/// `compute` decides how a client name is encoded into the callback URL
/// issued to the provider; `matches` recognizes that encoding on the way
/// back, routing an incoming callback request to the right client.
pub trait CallbackUrlResolver: Send + Sync {
    /// Compute the callback URL for the given client
    fn compute(
        &self,
        url_resolver: &dyn UrlResolver,
        url: &str,
        client_name: &str,
        context: &dyn WebContext,
    ) -> String;

    /// Check whether the current request targets the given client
    fn matches(&self, client_name: &str, context: &dyn WebContext) -> bool;
}

/// Attaches authorizations to a profile once an identity is established
pub trait AuthorizationGenerator: Send + Sync {
    /// Enrich the profile's role set. Context and credentials are optional;
    /// strategies that do not need them must accept both being absent.
    fn generate(
        &self,
        context: Option<&dyn WebContext>,
        credentials: Option<&Credentials>,
        profile: &mut UserProfile,
    );
}
