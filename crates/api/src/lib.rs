//! HTTP surface for the resume/portfolio admin backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
