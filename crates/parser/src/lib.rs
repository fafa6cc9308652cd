//! SDK model loading for botodocs
//!
//! This crate reads the JSON data files that drive the Python AWS SDK and
//! turns them into the common model (`ServiceDefinition`).
//!
//! ## Data sources
//!
//! - botocore `service-2.json`: metadata, operations and shapes
//! - botocore `paginators-1.json` and `waiters-2.json`
//! - boto3 `resources-1.json`: the resource layer (actions, collections,
//!   sub-resources, resource waiters)
//!
//! [`BotocoreLoader`] discovers services on disk and implements
//! [`ServiceCatalog`](botodocs_common::ServiceCatalog).

pub mod boto3;
pub mod botocore;
mod loader;

pub use botocore::ServiceParser;
pub use loader::{
    latest_version_dir, model_file, BotocoreLoader, GZIP_SUFFIX, PAGINATORS_FILE, RESOURCES_FILE,
    SERVICE_FILE, WAITERS_FILE,
};
