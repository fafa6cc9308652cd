//! Common types and utilities for botodocs
//!
//! This crate contains the error type, the typed SDK metadata model, the
//! site configuration and the naming helpers shared by the parser, the
//! generator and the CLI.

mod catalog;
pub mod naming;
mod resource;
mod service;
mod shape;
mod site_config;

pub use catalog::ServiceCatalog;
pub use resource::{
    ActionModel, CollectionModel, Identifier, RequestModel, RequestParam, ResourceModel,
    ResourceWaiter, ResponseResource, ServiceResourceModel, SubResourceModel,
};
pub use service::{
    OperationModel, PaginatorModel, ServiceDefinition, ServiceMetadata, ServiceModel, WaiterModel,
};
pub use shape::{
    Member, PrimitiveType, Shape, ShapeGraph, ShapeGraphBuilder, ShapeId, ShapeKind,
};
pub use site_config::SiteConfig;

use thiserror::Error;

/// Errors that can occur while loading models or generating docs
#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for botodocs operations
pub type Result<T> = std::result::Result<T, DocgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocgenError::Parse("unknown shape type 'union'".to_string());
        assert_eq!(err.to_string(), "Parse error: unknown shape type 'union'");
    }
}
