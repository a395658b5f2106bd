//! S3-backed object store for gallery images.
//!
//! The store exposes exactly the two primitives the gallery needs
//! (put-object, delete-object) plus the deterministic public URL for a
//! stored key. Object keys are 128-bit random hex tokens generated at
//! upload time; the key is also the gallery entry id.

use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;

/// Blob-store configuration, loaded from the environment.
///
/// | Env Var             | Meaning                 |
/// |---------------------|-------------------------|
/// | `BUCKET_REGION`     | AWS region              |
/// | `ACCESS_KEY`        | AWS access key id       |
/// | `SECRET_ACCESS_KEY` | AWS secret access key   |
/// | `BUCKET_NAME`       | Target bucket           |
///
/// All four are required; a missing value is a fatal startup condition
/// for any code path touching demos.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

#[derive(Debug, thiserror::Error)]
pub enum S3Error {
    #[error("Missing required environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("S3 operation failed: {0}")]
    Operation(String),
}

impl S3Config {
    /// Load the blob-store configuration from environment variables.
    pub fn from_env() -> Result<Self, S3Error> {
        fn required(name: &'static str) -> Result<String, S3Error> {
            match std::env::var(name) {
                Ok(value) if !value.is_empty() => Ok(value),
                _ => Err(S3Error::MissingConfig(name)),
            }
        }

        Ok(Self {
            region: required("BUCKET_REGION")?,
            access_key: required("ACCESS_KEY")?,
            secret_key: required("SECRET_ACCESS_KEY")?,
            bucket: required("BUCKET_NAME")?,
        })
    }
}

/// Thin wrapper around the AWS S3 client, scoped to one bucket.
#[derive(Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Build a store from configuration. Credentials are static; the
    /// client is constructed once and shared across requests.
    pub fn new(config: &S3Config) -> Self {
        let credentials = Credentials::from_keys(&config.access_key, &config.secret_key, None);
        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        }
    }

    /// Generate a fresh object key: 128 random bits as 32 hex chars.
    pub fn generate_key() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// The public URL for a stored key.
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{key}", self.bucket)
    }

    /// Write an object under the given key.
    pub async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), S3Error> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| S3Error::Operation(e.to_string()))?;

        tracing::debug!(key, bucket = %self.bucket, "Stored gallery object");
        Ok(())
    }

    /// Delete the object under the given key.
    pub async fn delete_object(&self, key: &str) -> Result<(), S3Error> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| S3Error::Operation(e.to_string()))?;

        tracing::debug!(key, bucket = %self.bucket, "Deleted gallery object");
        Ok(())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_32_hex_chars_and_unique() {
        let a = S3Store::generate_key();
        let b = S3Store::generate_key();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn public_url_follows_bucket_addressing() {
        let config = S3Config {
            region: "us-east-1".to_string(),
            access_key: "k".to_string(),
            secret_key: "s".to_string(),
            bucket: "folio-gallery".to_string(),
        };
        let store = S3Store::new(&config);
        assert_eq!(
            store.public_url("abc123"),
            "https://folio-gallery.s3.amazonaws.com/abc123"
        );
    }
}
