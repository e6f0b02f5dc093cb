//! Tool trait

use async_trait::async_trait;
use partyscope_core::Outcome;
use serde_json::Value;

/// A callable operation exposed to the tool-invocation framework.
///
/// `invoke` is infallible by construction: validation failures, transport
/// faults, remote business errors, and unexpected faults all come back as
/// the error variant of [`Outcome`]. A normal return value always reaches
/// the caller; a panic or error value never does.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Machine name of the tool (lowercase with underscores).
    fn name(&self) -> &str;

    /// One-line description published to callers.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's argument object.
    fn input_schema(&self) -> Value;

    /// Executes the tool with a JSON argument object.
    async fn invoke(&self, args: Value) -> Outcome;
}
