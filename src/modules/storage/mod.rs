//! Storage module for report photo proofs
//!
//! Provides a MinIO/S3-compatible storage client for photo uploads
//! with public read access.

mod minio_client;

pub use minio_client::MinIOClient;
