//! Identity-provider seam for delegated and wallet-based logins.
//!
//! Providers are external collaborators exposing exactly two capabilities:
//! begin an interactive login (which may pend indefinitely while the user
//! acts in another context, e.g. a browser-extension prompt) and report
//! the current identity, if any. Nothing about provider internals crosses
//! this boundary.

use std::future::Future;

use thiserror::Error;

use carebase_core::session::Role;

/// Identity resolution errors.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("login cancelled by user")]
    Cancelled,

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// The caller identity a provider resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
    pub display_name: String,
    pub role: Role,
}

/// An external identity collaborator.
pub trait IdentityProvider {
    /// Start an interactive login. May suspend indefinitely pending user
    /// action in another context.
    fn begin_login(&self) -> impl Future<Output = Result<Principal, IdentityError>> + Send;

    /// The currently signed-in identity, or `None`.
    fn current_identity(&self) -> Option<Principal>;
}

/// Deterministic in-process provider for tests and local demos.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    principal: Principal,
    signed_in: bool,
}

impl StaticProvider {
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            signed_in: false,
        }
    }

    /// A provider that already reports an identity without logging in.
    pub fn signed_in(principal: Principal) -> Self {
        Self {
            principal,
            signed_in: true,
        }
    }
}

impl IdentityProvider for StaticProvider {
    async fn begin_login(&self) -> Result<Principal, IdentityError> {
        Ok(self.principal.clone())
    }

    fn current_identity(&self) -> Option<Principal> {
        self.signed_in.then(|| self.principal.clone())
    }
}
