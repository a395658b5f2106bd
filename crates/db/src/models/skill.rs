//! Skill entity model, DTOs, and document mapper.
//!
//! Skills are partitioned by [`SkillCategory`]; the ordering invariant
//! holds per category, not across the whole collection.

use std::fmt;
use std::str::FromStr;

use folio_core::error::CoreError;
use folio_core::ordering::Ordered;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::require;

/// Fixed skill categories. Serialized (and stored) under their
/// human-readable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Development Tools")]
    DevelopmentTools,
    #[serde(rename = "Cloud Infrastructure")]
    CloudInfrastructure,
    #[serde(rename = "Technologies")]
    Technologies,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::DevelopmentTools,
        SkillCategory::CloudInfrastructure,
        SkillCategory::Technologies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::DevelopmentTools => "Development Tools",
            SkillCategory::CloudInfrastructure => "Cloud Infrastructure",
            SkillCategory::Technologies => "Technologies",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown skill category: {s}")))
    }
}

/// A raw `skills` row as persisted. The category is stored as free text
/// and only parsed into [`SkillCategory`] by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct SkillDocument {
    pub id: DbId,
    pub sort_order: Option<i32>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully-populated skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: DbId,
    pub order: i32,
    pub category: SkillCategory,
    pub name: String,
}

/// DTO for creating a new skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSkill {
    pub order: i32,
    pub category: SkillCategory,
    pub name: String,
}

impl TryFrom<SkillDocument> for Skill {
    type Error = CoreError;

    fn try_from(doc: SkillDocument) -> Result<Self, Self::Error> {
        let category = require(doc.category, "skill", "category")?;
        Ok(Self {
            id: doc.id,
            order: require(doc.sort_order, "skill", "order")?,
            category: category.parse()?,
            name: crate::models::require_text(doc.name, "skill", "name")?,
        })
    }
}

impl Ordered for Skill {
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

    fn full_doc() -> SkillDocument {
        SkillDocument {
            id: 4,
            sort_order: Some(0),
            category: Some("Technologies".to_string()),
            name: Some("Kubernetes".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn maps_complete_document() {
        let skill = Skill::try_from(full_doc()).unwrap();
        assert_eq!(skill.category, SkillCategory::Technologies);
        assert_eq!(skill.name, "Kubernetes");
    }

    #[test]
    fn rejects_unknown_category() {
        let mut doc = full_doc();
        doc.category = Some("Databases".to_string());
        let err = Skill::try_from(doc).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_missing_order() {
        let mut doc = full_doc();
        doc.sort_order = None;
        assert!(Skill::try_from(doc).is_err());
    }

    #[test]
    fn category_round_trips_through_display() {
        for category in SkillCategory::ALL {
            assert_eq!(category.as_str().parse::<SkillCategory>().unwrap(), category);
        }
    }
}
