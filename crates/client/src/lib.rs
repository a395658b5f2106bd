//! Typed HTTP client and reorder controller for the admin API.
//!
//! [`ApiClient`] is a thin reqwest wrapper, one method per REST
//! operation. The [`reorder`] module turns a locally reordered (or
//! shortened) list into the update fan-out that restores the dense
//! zero-based `order` invariant on the server.

pub mod api_client;
pub mod reorder;

pub use api_client::{ApiClient, ClientError};
