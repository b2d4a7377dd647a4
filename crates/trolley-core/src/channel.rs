//! Host channel trait.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;

use crate::error::Result;

/// The host-managed state-exchange surface the engine runs against.
///
/// The host owns three documents: the pending tool invocation's input
/// (display only), the tool output carrying the external delta payload, and
/// the persisted widget state holding the cart. Reads return the current
/// document, `None` when the host has nothing yet; the write replaces the
/// persisted state atomically with the full next document.
///
/// `subscribe` yields a revision counter that is bumped on any document
/// change, the engine's own writes included. Delivery is latest-value-only;
/// a notification superseded before processing is simply skipped.
#[async_trait]
pub trait WidgetStateChannel: Send + Sync {
    /// Reads the pending tool invocation input.
    async fn read_tool_input(&self) -> Option<Value>;

    /// Reads the tool output carrying the delta payload.
    async fn read_tool_output(&self) -> Option<Value>;

    /// Reads the persisted widget state.
    async fn read_widget_state(&self) -> Option<Value>;

    /// Replaces the persisted widget state with the full next document.
    async fn write_widget_state(&self, state: Value) -> Result<()>;

    /// Subscribes to change notifications (monotonic revision counter).
    fn subscribe(&self) -> watch::Receiver<u64>;
}
