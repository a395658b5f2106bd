//! Education entity model, DTOs, and document mapper.

use folio_core::error::CoreError;
use folio_core::ordering::Ordered;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{require, require_text};

/// Allowed GPA range, inclusive. Single site to change if the policy
/// is ever relaxed.
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// A raw `educations` row as persisted.
#[derive(Debug, Clone, FromRow)]
pub struct EducationDocument {
    pub id: DbId,
    pub sort_order: Option<i32>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub graduation_year: Option<i32>,
    pub gpa: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully-populated education entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: DbId,
    pub order: i32,
    pub school: String,
    pub degree: String,
    pub graduation_year: i32,
    pub gpa: f64,
}

/// DTO for creating a new education entry. The caller supplies `order`
/// (the current length of the target list). Serialized by the client,
/// deserialized by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducation {
    pub order: i32,
    pub school: String,
    pub degree: String,
    pub graduation_year: i32,
    pub gpa: f64,
}

impl TryFrom<EducationDocument> for Education {
    type Error = CoreError;

    fn try_from(doc: EducationDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id,
            order: require(doc.sort_order, "education", "order")?,
            school: require_text(doc.school, "education", "school")?,
            degree: require_text(doc.degree, "education", "degree")?,
            graduation_year: require(doc.graduation_year, "education", "graduationYear")?,
            gpa: require(doc.gpa, "education", "gpa")?,
        })
    }
}

impl Ordered for Education {
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

/// Validate caller-supplied education fields on create and update.
pub fn validate_education(order: i32, gpa: f64) -> Result<(), CoreError> {
    if order < 0 {
        return Err(CoreError::Validation(
            "Order must be greater than or equal to 0".to_string(),
        ));
    }
    if !(GPA_MIN..=GPA_MAX).contains(&gpa) {
        return Err(CoreError::Validation(format!(
            "GPA must be between {GPA_MIN} and {GPA_MAX}"
        )));
    }
    Ok(())
}
