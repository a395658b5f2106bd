//! Demo entity model, DTOs, and document mapper.
//!
//! A demo embeds an ordered gallery of image references; each gallery
//! id doubles as the object key in blob storage.

use folio_core::error::CoreError;
use folio_core::ordering::Ordered;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::{require, require_text};

/// One gallery entry: the blob-store object key and its public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub link: String,
}

/// External links for a demo. The GitHub link is required, the live
/// deployment link is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoLinks {
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

/// A raw `demos` row as persisted.
#[derive(Debug, Clone, FromRow)]
pub struct DemoDocument {
    pub id: DbId,
    pub sort_order: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub gallery: Option<Json<Vec<GalleryImage>>>,
    pub links: Option<Json<DemoLinks>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully-populated demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demo {
    pub id: DbId,
    pub order: i32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub gallery: Vec<GalleryImage>,
    pub links: DemoLinks,
}

/// DTO for creating a new demo. A fresh demo normally starts with an
/// empty gallery; images are added through the image subresource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDemo {
    pub order: i32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    pub links: DemoLinks,
}

impl TryFrom<DemoDocument> for Demo {
    type Error = CoreError;

    fn try_from(doc: DemoDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id,
            order: require(doc.sort_order, "demo", "order")?,
            title: require_text(doc.title, "demo", "title")?,
            description: require_text(doc.description, "demo", "description")?,
            // Empty sequences are valid; only absence is an error.
            technologies: require(doc.technologies, "demo", "technologies")?,
            gallery: require(doc.gallery, "demo", "gallery")?.0,
            links: require(doc.links, "demo", "links")?.0,
        })
    }
}

impl Ordered for Demo {
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

    fn full_doc() -> DemoDocument {
        DemoDocument {
            id: 9,
            sort_order: Some(0),
            title: Some("Chat app".to_string()),
            description: Some("Realtime chat".to_string()),
            technologies: Some(vec!["Rust".to_string(), "Postgres".to_string()]),
            gallery: Some(Json(vec![GalleryImage {
                id: "abc123".to_string(),
                link: "https://bucket.s3.amazonaws.com/abc123".to_string(),
            }])),
            links: Some(Json(DemoLinks {
                github: "https://github.com/example/chat".to_string(),
                live: None,
            })),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn maps_complete_document() {
        let demo = Demo::try_from(full_doc()).unwrap();
        assert_eq!(demo.gallery.len(), 1);
        assert_eq!(demo.gallery[0].id, "abc123");
        assert_eq!(demo.links.live, None);
    }

    #[test]
    fn empty_gallery_is_valid() {
        let mut doc = full_doc();
        doc.gallery = Some(Json(Vec::new()));
        assert!(Demo::try_from(doc).is_ok());
    }

    #[test]
    fn rejects_missing_gallery() {
        let mut doc = full_doc();
        doc.gallery = None;
        assert!(Demo::try_from(doc).is_err());
    }

    #[test]
    fn rejects_missing_links_or_title() {
        let mut doc = full_doc();
        doc.links = None;
        assert!(Demo::try_from(doc).is_err());

        let mut doc = full_doc();
        doc.title = Some(String::new());
        assert!(Demo::try_from(doc).is_err());
    }
}
