//! boto3 resource model parser
//!
//! boto3 layers resources (`boto3.resource('s3').Bucket('name')`) on top of
//! the botocore client, described by `data/<service>/<api-version>/resources-1.json`.

mod converter;
mod types;

pub use converter::{convert_resources, SERVICE_RESOURCE_NAME};
pub use types::*;
