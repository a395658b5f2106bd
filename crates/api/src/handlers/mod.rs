//! Request handlers, one submodule per resource family.
//!
//! Handlers delegate to the corresponding repository in `folio-db` and
//! map errors via [`AppError`](crate::error::AppError). All success
//! responses are 200 with the affected entity as JSON; siblings are never
//! reindexed server-side after a mutation (the client republishes them).

pub mod bullet_point;
pub mod demo;
pub mod education;
pub mod project;
pub mod skill;
