//! Cart use case implementation.
//!
//! This module provides the `CartUseCase` which drives the two producers of
//! the persisted cart — external delta reconciliation and user-initiated
//! quantity adjustment — against a host channel, and keeps the
//! change-detection guard that stops the engine from re-processing its own
//! write echoes.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};
use trolley_core::channel::WidgetStateChannel;
use trolley_core::error::Result;
use trolley_core::fingerprint::Fingerprint;
use trolley_core::{Cart, adjust, reconcile};

use crate::view::WidgetView;

/// Use case for the cart widget's persisted state.
///
/// # Responsibilities
///
/// - Reconciling externally delivered delta payloads into the persisted
///   cart, exactly once per distinct payload
/// - Applying user quantity commands as one read-compute-write transaction
/// - Exposing read-only views of the host documents for display
///
/// # Concurrency
///
/// The persisted cart is a single slot with last-write-wins semantics.
/// Both producers run their whole read-compute-write cycle under one lock,
/// so a future concurrent caller cannot interleave and lose an update; the
/// same lock protects the last-processed-delta fingerprint.
pub struct CartUseCase {
    /// Host channel for document reads/writes and change notifications
    channel: Arc<dyn WidgetStateChannel>,
    /// Fingerprint of the last processed delta payload; also serves as the
    /// single-writer transaction lock for both producers
    last_delta: Mutex<Fingerprint>,
}

impl CartUseCase {
    /// Creates a new `CartUseCase` over the given host channel.
    ///
    /// No payload counts as processed yet, so the first real delta always
    /// reconciles.
    pub fn new(channel: Arc<dyn WidgetStateChannel>) -> Self {
        Self {
            channel,
            last_delta: Mutex::new(Fingerprint::Absent),
        }
    }

    /// Handles a host change notification.
    ///
    /// Reads the current tool output, and if its fingerprint differs from
    /// the last processed one, merges its items into the current persisted
    /// cart and writes the result through. A repeated payload — typically
    /// the echo of this engine's own write — performs no merge and issues
    /// no write.
    ///
    /// Returns `true` when a merge was applied.
    pub async fn sync_from_host(&self) -> Result<bool> {
        let mut last_delta = self.last_delta.lock().await;

        let payload = self.channel.read_tool_output().await;
        let fingerprint = Fingerprint::of(payload.as_ref());
        if *last_delta == fingerprint {
            debug!("delta payload unchanged, skipping reconcile");
            return Ok(false);
        }
        if fingerprint == Fingerprint::Unserializable {
            warn!("delta payload is unserializable, reconciling with empty item set");
        }
        *last_delta = fingerprint;

        let incoming = payload
            .as_ref()
            .map(Cart::delta_items)
            .unwrap_or_default();
        let base = Cart::from_value(self.channel.read_widget_state().await.as_ref());
        let next = reconcile(&base, &incoming);
        self.channel
            .write_widget_state(serde_json::to_value(&next)?)
            .await?;

        info!(
            incoming = incoming.len(),
            items = next.items.len(),
            "reconciled external delta into cart"
        );
        Ok(true)
    }

    /// Applies a signed quantity delta to the named item and writes the
    /// result through, as one read-compute-write transaction.
    ///
    /// No-ops (empty name, zero delta, unknown item) leave the persisted
    /// state untouched and issue no write. Returns `true` when a write was
    /// issued.
    pub async fn adjust_quantity(&self, name: &str, delta: i64) -> Result<bool> {
        let _transaction = self.last_delta.lock().await;

        let base = Cart::from_value(self.channel.read_widget_state().await.as_ref());
        let next = adjust(&base, name, delta);
        if next == base {
            debug!(name, delta, "quantity adjustment is a no-op");
            return Ok(false);
        }
        self.channel
            .write_widget_state(serde_json::to_value(&next)?)
            .await?;

        info!(name, delta, items = next.items.len(), "adjusted item quantity");
        Ok(true)
    }

    /// User command: increase the named item's quantity by one.
    pub async fn increment(&self, name: &str) -> Result<bool> {
        self.adjust_quantity(name, 1).await
    }

    /// User command: decrease the named item's quantity by one, removing
    /// the item when it reaches zero.
    pub async fn decrement(&self, name: &str) -> Result<bool> {
        self.adjust_quantity(name, -1).await
    }

    /// Returns the current persisted cart (empty when the host has none).
    pub async fn cart(&self) -> Cart {
        Cart::from_value(self.channel.read_widget_state().await.as_ref())
    }

    /// Builds a read-only snapshot of the host documents for display.
    pub async fn debug_view(&self) -> WidgetView {
        WidgetView::render(
            self.channel.read_tool_input().await.as_ref(),
            self.channel.read_tool_output().await.as_ref(),
            self.channel.read_widget_state().await.as_ref(),
        )
    }

    /// Runs the notification loop until the channel closes.
    ///
    /// Each host notification triggers one `sync_from_host` pass; `watch`
    /// semantics collapse notifications that arrive while a pass is in
    /// flight, so only the latest documents are processed. A failed pass is
    /// logged and the loop continues with the cart in its last-known-good
    /// shape.
    pub async fn run(&self, mut notifications: watch::Receiver<u64>) {
        while notifications.changed().await.is_ok() {
            if let Err(error) = self.sync_from_host().await {
                warn!(%error, "host sync failed, keeping last-known-good cart");
            }
        }
    }
}
