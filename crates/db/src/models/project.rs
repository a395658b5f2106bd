//! Project entity model, DTOs, and document mapper.

use folio_core::error::CoreError;
use folio_core::ordering::Ordered;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{require, require_text};

/// A raw `projects` row as persisted.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectDocument {
    pub id: DbId,
    pub sort_order: Option<i32>,
    pub name: Option<String>,
    pub link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully-populated project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub order: i32,
    pub name: String,
    pub link: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub order: i32,
    pub name: String,
    pub link: String,
}

impl TryFrom<ProjectDocument> for Project {
    type Error = CoreError;

    fn try_from(doc: ProjectDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id,
            order: require(doc.sort_order, "project", "order")?,
            name: require_text(doc.name, "project", "name")?,
            link: require_text(doc.link, "project", "link")?,
        })
    }
}

impl Ordered for Project {
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}
