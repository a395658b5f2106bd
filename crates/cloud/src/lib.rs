//! Blob storage for demo gallery images.

pub mod s3;

pub use s3::{S3Config, S3Store};
