//! Customer Portal Core Library
//!
//! Platform-independent logic behind the customer self-service portal:
//! - global state store with a pure reducer (`store`)
//! - field and form validation (`validation`)
//! - backend abstraction with an in-memory mock (`api`)
//! - data-fetching hooks and mutations (`hooks`)
//! - routes and the authentication guard (`route`)
//!
//! Front ends own a [`Store`], call hooks against an `Arc<dyn PortalApi>`
//! and render from [`PortalState`].

pub mod api;
pub mod error;
pub mod hooks;
pub mod route;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use api::{MockApiConfig, MockPortalApi, PortalApi};
pub use error::{CoreError, CoreResult};
pub use hooks::{Mutation, MutationData, MutationKind, Resource, StoreHook};
pub use route::Route;
pub use store::{Action, PortalState, Store};
pub use validation::{FieldState, FormState, RuleSet};
