//! In-memory host channel implementation.
//!
//! This module provides an in-process stand-in for the host's
//! state-exchange surface. It holds the three host documents behind a
//! mutex, bumps a `watch`-based revision counter on every change (host-side
//! setters and engine writes alike), and counts persisted-state writes so
//! tests can assert that the change-detection guard suppressed redundant
//! work.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{Mutex, watch};
use trolley_core::channel::WidgetStateChannel;
use trolley_core::error::Result;

/// The three documents the host exposes to the widget.
#[derive(Debug, Default)]
struct HostDocuments {
    tool_input: Option<Value>,
    tool_output: Option<Value>,
    widget_state: Option<Value>,
}

/// In-memory implementation of [`WidgetStateChannel`].
///
/// Notification semantics match the host surface the engine is written
/// against: every document change bumps one shared revision counter, so a
/// subscriber cannot tell an external delta from the echo of its own write.
/// Distinguishing those is the engine's job.
#[derive(Clone)]
pub struct InMemoryWidgetChannel {
    /// Host documents behind a mutex for thread-safe access.
    documents: Arc<Mutex<HostDocuments>>,
    /// Revision notifier; receivers see only the latest value.
    revision: watch::Sender<u64>,
    /// Number of widget-state writes accepted, for test assertions.
    writes: Arc<AtomicU64>,
}

impl InMemoryWidgetChannel {
    /// Creates a channel with no documents yet.
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            documents: Arc::new(Mutex::new(HostDocuments::default())),
            revision,
            writes: Arc::new(AtomicU64::new(0)),
        }
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Host-side setter: replaces the tool input document.
    pub async fn set_tool_input(&self, input: Value) {
        self.documents.lock().await.tool_input = Some(input);
        self.bump_revision();
    }

    /// Host-side setter: replaces the tool output (delta payload) document.
    pub async fn set_tool_output(&self, output: Value) {
        self.documents.lock().await.tool_output = Some(output);
        self.bump_revision();
    }

    /// Number of widget-state writes this channel has accepted.
    pub fn widget_state_writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryWidgetChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WidgetStateChannel for InMemoryWidgetChannel {
    async fn read_tool_input(&self) -> Option<Value> {
        self.documents.lock().await.tool_input.clone()
    }

    async fn read_tool_output(&self) -> Option<Value> {
        self.documents.lock().await.tool_output.clone()
    }

    async fn read_widget_state(&self) -> Option<Value> {
        self.documents.lock().await.widget_state.clone()
    }

    async fn write_widget_state(&self, state: Value) -> Result<()> {
        tracing::debug!("persisting widget state");
        self.documents.lock().await.widget_state = Some(state);
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.bump_revision();
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
