//! Application layer for Trolley.
//!
//! This crate provides the use case that coordinates the pure cart
//! transitions in `trolley-core` with the host channel: the
//! notification-driven reconcile path, the user-driven adjust path, and the
//! debug view consumed by the presentation layer.

pub mod cart_usecase;
pub mod view;

pub use cart_usecase::CartUseCase;
pub use view::WidgetView;
