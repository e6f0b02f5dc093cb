//! PARTYSCOPE Remote Query Executor
//!
//! Builds outbound requests against the remote sanctioned-party lookup API,
//! issues them (one attempt, fixed timeout, fresh connection per call), and
//! classifies every result into the error taxonomy defined in
//! `partyscope_core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod envelope;

pub use client::PartyClient;
pub use config::ApiConfig;
pub use envelope::RemoteEnvelope;
