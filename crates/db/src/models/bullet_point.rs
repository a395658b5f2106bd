//! Bullet point entity model, DTOs, and document mapper.
//!
//! Bullet points belong to exactly one project (`project_id` partition);
//! ordering is dense per project, not global.

use folio_core::error::CoreError;
use folio_core::ordering::Ordered;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{require, require_text};

/// A raw `bullet_points` row as persisted.
#[derive(Debug, Clone, FromRow)]
pub struct BulletPointDocument {
    pub id: DbId,
    pub sort_order: Option<i32>,
    pub text: Option<String>,
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully-populated bullet point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletPoint {
    pub id: DbId,
    pub order: i32,
    pub text: String,
    pub project_id: DbId,
}

/// DTO for creating a new bullet point. The owning project id comes
/// from the route path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBulletPoint {
    pub order: i32,
    pub text: String,
}

impl TryFrom<BulletPointDocument> for BulletPoint {
    type Error = CoreError;

    fn try_from(doc: BulletPointDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id,
            order: require(doc.sort_order, "bullet point", "order")?,
            text: require_text(doc.text, "bullet point", "text")?,
            project_id: require(doc.project_id, "bullet point", "projectId")?,
        })
    }
}

impl Ordered for BulletPoint {
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn full_doc() -> BulletPointDocument {
        BulletPointDocument {
            id: 3,
            sort_order: Some(1),
            text: Some("Implemented the thing".to_string()),
            project_id: Some(7),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn maps_complete_document() {
        let bullet_point = BulletPoint::try_from(full_doc()).unwrap();
        assert_eq!(bullet_point.project_id, 7);
        assert_eq!(bullet_point.order, 1);
    }

    #[test]
    fn rejects_missing_project_id() {
        let mut doc = full_doc();
        doc.project_id = None;
        assert!(BulletPoint::try_from(doc).is_err());
    }

    #[test]
    fn rejects_empty_text() {
        let mut doc = full_doc();
        doc.text = Some(String::new());
        assert!(BulletPoint::try_from(doc).is_err());
    }
}
