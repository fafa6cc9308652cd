//! Source of service definitions

use crate::{Result, ServiceDefinition};

/// Anything that can enumerate and load SDK services
///
/// The parser implements this over botocore/boto3 data directories; the
/// generator only depends on the trait.
pub trait ServiceCatalog {
    /// Client names of every available service, sorted
    fn service_names(&self) -> Result<Vec<String>>;

    /// Load one service with its paginators, waiters and resource model
    fn load_service(&self, name: &str) -> Result<ServiceDefinition>;
}
