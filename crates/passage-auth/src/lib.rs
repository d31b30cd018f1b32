//! # passage-auth: authentication flow decision core
//!
//! The decision and routing logic shared by every authentication flow:
//! resolving the outcome of an attempt into a final HTTP response, routing
//! shared callback URLs to named clients, and granting default roles to
//! authenticated profiles. Protocol clients, persistence and the concrete
//! web stack live behind the traits in [`traits`].

pub mod action;
pub mod authorization;
pub mod callback;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod testing;
pub mod traits;

// Error handling
pub use error::AuthError;

// Data model
pub use action::HttpAction;
pub use profile::{Credentials, UserProfile};

// Collaborator traits
pub use traits::{
    AuthorizationGenerator, CallbackUrlResolver, HttpActionAdapter, UrlResolver, WebContext,
};

// Outcome resolution
pub use engine::{ActionResolver, AuthOutcome};

// Callback routing strategies
pub use callback::{
    find_matching_client, DefaultUrlResolver, NoParameterCallbackUrlResolver,
    PathParameterCallbackUrlResolver, QueryParameterCallbackUrlResolver,
};

// Authorization strategies
pub use authorization::DefaultRolesAuthorizationGenerator;

// Configuration
pub use config::AuthFlowConfig;

/// Authentication result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
