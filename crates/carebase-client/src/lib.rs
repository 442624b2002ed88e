//! Carebase remote client.
//!
//! Talks to the carebase backend through JSON RPC stubs, resolves caller
//! identity through pluggable providers, and loads record lists with real
//! pending state (no simulated latency, no unsequenced fetch races).
//!
//! # Modules
//!
//! - [`api`]: [`api::BackendClient`] RPC stubs and the client error taxonomy
//! - [`identity`]: the identity-provider seam and [`identity::Principal`]
//! - [`loader`]: [`loader::ListLoader`] refresh sequencing

pub mod api;
pub mod identity;
pub mod loader;

pub use api::{AuthResponse, BackendClient, ClientError, ClientResult, RegisterRequest};
pub use identity::{IdentityError, IdentityProvider, Principal, StaticProvider};
pub use loader::{ListLoader, RecordSource, RefreshTicket};
