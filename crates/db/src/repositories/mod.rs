//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Fetched rows are mapped
//! through the document->domain mappers before being returned, so every
//! entity leaving this layer is fully validated.
//!
//! Repositories never reindex siblings after a delete or reorder; the
//! dense-`order` invariant is the caller's responsibility.

pub mod bullet_point_repo;
pub mod demo_repo;
pub mod education_repo;
pub mod project_repo;
pub mod skill_repo;

pub use bullet_point_repo::BulletPointRepo;
pub use demo_repo::DemoRepo;
pub use education_repo::EducationRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
