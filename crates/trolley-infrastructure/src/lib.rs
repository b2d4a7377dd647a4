//! Infrastructure layer for Trolley.
//!
//! This crate provides concrete implementations of the host-channel trait
//! defined in `trolley-core`. In production the host side of the channel is
//! whatever embeds the widget; the in-memory implementation here carries the
//! same notification semantics for tests and in-process demos.

pub mod memory_channel;

pub use memory_channel::InMemoryWidgetChannel;
