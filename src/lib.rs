//! Thin helper layer over S3: authenticate, fetch an object's bytes, upload
//! an object's bytes, list buckets.

pub mod adapters;
pub mod client;
pub mod model;
