//! Callback URL computation and client routing strategies
//!
//! A single callback endpoint serves every configured client. The strategies
//! here decide how the target client is encoded into the callback URL handed
//! to a provider and how it is recognized again on the incoming callback
//! request. All of them are pure functions of their inputs and safe for
//! unlimited concurrent use.

use url::form_urlencoded;

use crate::traits::{CallbackUrlResolver, UrlResolver, WebContext};

/// Standard base URL-computation strategy
///
/// Returns the configured URL unchanged unless relative-URL completion is
/// enabled, in which case URLs without an `http://`/`https://` prefix are
/// completed against the request's scheme, host and port. Default ports
/// (80 for http, 443 for https) are elided.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUrlResolver {
    complete_relative_urls: bool,
}

impl DefaultUrlResolver {
    /// Create a passthrough resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that completes relative URLs against the request
    pub fn completing_relative_urls() -> Self {
        Self {
            complete_relative_urls: true,
        }
    }
}

impl UrlResolver for DefaultUrlResolver {
    fn compute(&self, url: &str, context: &dyn WebContext) -> String {
        if !self.complete_relative_urls
            || url.starts_with("http://")
            || url.starts_with("https://")
        {
            return url.to_string();
        }

        let scheme = context.scheme();
        let default_port = if scheme == "https" { 443 } else { 80 };
        let mut computed = format!("{}://{}", scheme, context.server_name());
        if context.server_port() != default_port {
            computed.push(':');
            computed.push_str(&context.server_port().to_string());
        }
        if !url.starts_with('/') {
            computed.push('/');
        }
        computed.push_str(url);
        computed
    }
}

/// Encodes the client name as an extra path segment of the callback URL
///
/// `compute` produces `<base>/<client_name>`; `matches` compares the last
/// non-empty path segment of the request against the client name,
/// case-sensitively. For deployments where the provider must be addressed in
/// the path rather than in a query parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParameterCallbackUrlResolver;

impl PathParameterCallbackUrlResolver {
    /// Create the path-parameter strategy
    pub fn new() -> Self {
        Self
    }
}

impl CallbackUrlResolver for PathParameterCallbackUrlResolver {
    fn compute(
        &self,
        url_resolver: &dyn UrlResolver,
        url: &str,
        client_name: &str,
        context: &dyn WebContext,
    ) -> String {
        let base = url_resolver.compute(url, context);
        format!("{}/{}", base, client_name)
    }

    fn matches(&self, client_name: &str, context: &dyn WebContext) -> bool {
        context
            .path()
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .map_or(false, |segment| segment == client_name)
    }
}

/// Encodes the client name as a query parameter of the callback URL
#[derive(Debug, Clone)]
pub struct QueryParameterCallbackUrlResolver {
    client_name_parameter: String,
}

impl QueryParameterCallbackUrlResolver {
    /// Create the strategy with the standard `client_name` parameter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the strategy with a custom parameter name
    pub fn with_parameter_name(name: impl Into<String>) -> Self {
        Self {
            client_name_parameter: name.into(),
        }
    }

    /// Get the query parameter carrying the client name
    pub fn client_name_parameter(&self) -> &str {
        &self.client_name_parameter
    }
}

impl Default for QueryParameterCallbackUrlResolver {
    fn default() -> Self {
        Self {
            client_name_parameter: "client_name".to_string(),
        }
    }
}

impl CallbackUrlResolver for QueryParameterCallbackUrlResolver {
    fn compute(
        &self,
        url_resolver: &dyn UrlResolver,
        url: &str,
        client_name: &str,
        context: &dyn WebContext,
    ) -> String {
        let base = url_resolver.compute(url, context);
        let encoded: String = form_urlencoded::byte_serialize(client_name.as_bytes()).collect();
        let separator = if base.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            base, separator, self.client_name_parameter, encoded
        )
    }

    fn matches(&self, client_name: &str, context: &dyn WebContext) -> bool {
        context
            .request_parameter(&self.client_name_parameter)
            .map_or(false, |value| value == client_name)
    }
}

/// Leaves the callback URL untouched and never matches
///
/// For deployments with one client per callback endpoint, where routing is
/// done by the surrounding configuration instead of the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParameterCallbackUrlResolver;

impl NoParameterCallbackUrlResolver {
    /// Create the no-op strategy
    pub fn new() -> Self {
        Self
    }
}

impl CallbackUrlResolver for NoParameterCallbackUrlResolver {
    fn compute(
        &self,
        url_resolver: &dyn UrlResolver,
        url: &str,
        _client_name: &str,
        context: &dyn WebContext,
    ) -> String {
        url_resolver.compute(url, context)
    }

    fn matches(&self, _client_name: &str, _context: &dyn WebContext) -> bool {
        false
    }
}

/// Pick the configured client whose callback route matches the request
///
/// Returns the first matching name in iteration order; configuration is
/// expected to keep client names unique.
pub fn find_matching_client<'a, I>(
    resolver: &dyn CallbackUrlResolver,
    client_names: I,
    context: &dyn WebContext,
) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    client_names
        .into_iter()
        .find(|name| resolver.matches(name, context))
}
