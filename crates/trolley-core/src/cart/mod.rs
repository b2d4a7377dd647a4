//! Cart domain module.
//!
//! This module contains the cart domain models and the two pure state
//! transitions the engine is built from.
//!
//! # Module Structure
//!
//! - `model`: Core cart domain models (`Cart`, `CartItem`) and lenient
//!   extraction from host-managed JSON documents
//! - `reconcile`: Union merge of a base cart with externally delivered
//!   delta items
//! - `adjust`: User-driven quantity adjustment

pub mod adjust;
pub mod model;
pub mod reconcile;

// Re-export public API
pub use adjust::adjust;
pub use model::{Cart, CartItem};
pub use reconcile::reconcile;
