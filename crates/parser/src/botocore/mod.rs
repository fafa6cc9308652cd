//! botocore data file parser
//!
//! Parses botocore's JSON service models into the common `ServiceModel`.
//!
//! Models ship in botocore's `data/` directory:
//! `data/<service>/<api-version>/service-2.json`, next to the optional
//! `paginators-1.json` and `waiters-2.json`.
//!
//! ## Usage
//! ```rust,ignore
//! use botodocs_parser::botocore::ServiceParser;
//!
//! let parser = ServiceParser::from_file("data/sqs/2012-11-05/service-2.json", "sqs")?;
//! let service = parser.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::ServiceParser;
pub use types::*;
