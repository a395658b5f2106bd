//! Typed client for the admin REST API.

use folio_core::types::DbId;
use folio_db::models::bullet_point::{BulletPoint, CreateBulletPoint};
use folio_db::models::demo::{CreateDemo, Demo};
use folio_db::models::education::{CreateEducation, Education};
use folio_db::models::project::{CreateProject, Project};
use folio_db::models::skill::{CreateSkill, Skill, SkillCategory};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Errors produced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, decode).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Error body shape returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the admin API, bound to one server base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    /// Decode a success body, or surface the server's `{"error": ...}`
    /// message for a non-success status.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    // --- Educations ---

    pub async fn get_educations(&self) -> Result<Vec<Education>, ClientError> {
        let response = self.http.get(self.url("/educations")).send().await?;
        Self::decode(response).await
    }

    pub async fn create_education(
        &self,
        input: &CreateEducation,
    ) -> Result<Education, ClientError> {
        let response = self
            .http
            .post(self.url("/educations"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_education(&self, education: &Education) -> Result<Education, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/educations/{}", education.id)))
            .json(education)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_education(&self, id: DbId) -> Result<Education, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/educations/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Projects ---

    pub async fn get_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.http.get(self.url("/projects")).send().await?;
        Self::decode(response).await
    }

    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        let response = self
            .http
            .post(self.url("/projects"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_project(&self, project: &Project) -> Result<Project, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/projects/{}", project.id)))
            .json(project)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a project. The server cascade-deletes its bullet points.
    pub async fn delete_project(&self, id: DbId) -> Result<Project, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/projects/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Bullet points ---

    pub async fn get_bullet_points(
        &self,
        project_id: DbId,
    ) -> Result<Vec<BulletPoint>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/projects/{project_id}/bulletpoints")))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_bullet_point(
        &self,
        project_id: DbId,
        input: &CreateBulletPoint,
    ) -> Result<BulletPoint, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/projects/{project_id}/bulletpoints")))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_bullet_point(
        &self,
        bullet_point: &BulletPoint,
    ) -> Result<BulletPoint, ClientError> {
        let response = self
            .http
            .put(self.url(&format!(
                "/projects/{}/bulletpoints/{}",
                bullet_point.project_id, bullet_point.id
            )))
            .json(bullet_point)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_bullet_point(
        &self,
        project_id: DbId,
        id: DbId,
    ) -> Result<BulletPoint, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/projects/{project_id}/bulletpoints/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Skills ---

    pub async fn get_skills(&self) -> Result<Vec<Skill>, ClientError> {
        let response = self.http.get(self.url("/skills")).send().await?;
        Self::decode(response).await
    }

    pub async fn get_skills_by_category(
        &self,
        category: SkillCategory,
    ) -> Result<Vec<Skill>, ClientError> {
        let response = self
            .http
            .get(self.url("/skills"))
            .query(&[("category", category.as_str())])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_skill(&self, input: &CreateSkill) -> Result<Skill, ClientError> {
        let response = self
            .http
            .post(self.url("/skills"))
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_skill(&self, skill: &Skill) -> Result<Skill, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/skills/{}", skill.id)))
            .json(skill)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_skill(&self, id: DbId) -> Result<Skill, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/skills/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Demos ---

    pub async fn get_demos(&self) -> Result<Vec<Demo>, ClientError> {
        let response = self.http.get(self.url("/demos")).send().await?;
        Self::decode(response).await
    }

    pub async fn create_demo(&self, input: &CreateDemo) -> Result<Demo, ClientError> {
        let response = self.http.post(self.url("/demos")).json(input).send().await?;
        Self::decode(response).await
    }

    pub async fn update_demo(&self, demo: &Demo) -> Result<Demo, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/demos/{}", demo.id)))
            .json(demo)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete_demo(&self, id: DbId) -> Result<Demo, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/demos/{id}")))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Upload a gallery image (multipart, field `file`). Returns the
    /// updated demo with the new gallery entry appended.
    pub async fn upload_demo_image(
        &self,
        demo_id: DbId,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Demo, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url(&format!("/demos/{demo_id}/images")))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a gallery image by its id (also its blob-store key).
    /// Returns the updated demo.
    pub async fn delete_demo_image(
        &self,
        demo_id: DbId,
        image_id: &str,
    ) -> Result<Demo, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/demos/{demo_id}/images/{image_id}")))
            .send()
            .await?;
        Self::decode(response).await
    }
}
