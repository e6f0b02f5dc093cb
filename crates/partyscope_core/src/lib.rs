//! PARTYSCOPE Core Types
//!
//! This crate contains pure types and logic with no I/O: the error taxonomy,
//! the normalized outcome envelope, and the search parameter validator.
//! Nothing in here touches the network.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod outcome;
pub mod params;

// Re-exports
pub use error::{ErrorKind, ToolError, ToolResult};
pub use outcome::Outcome;
pub use params::{SearchParams, SearchQuery, SearchScope};
