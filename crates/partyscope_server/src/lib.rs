//! PARTYSCOPE Server
//!
//! HTTP surface for tool discovery and invocation. The envelope, not the
//! HTTP status code, carries per-invocation success or failure.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;

pub use api::{ApiServer, router};
