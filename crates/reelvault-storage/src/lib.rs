//! Storage backends for reelvault assets.
//!
//! Thumbnails live on the local filesystem behind [`LocalStorage`]; video
//! objects go to an S3-compatible object store behind the [`ObjectStore`]
//! trait. Key generation and the upload content-type allow-list live in
//! [`keys`].

pub mod keys;
pub mod local;
pub mod memory;
pub mod s3;
pub mod traits;

pub use keys::{extension_for, new_asset_id, new_asset_key};
pub use local::LocalStorage;
pub use memory::InMemoryObjectStore;
pub use s3::S3ObjectStore;
pub use traits::{ObjectStore, StorageError, StorageResult};
