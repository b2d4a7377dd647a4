pub mod cart;
pub mod channel;
pub mod error;
pub mod fingerprint;

// Re-export common error type
pub use error::TrolleyError;

pub use cart::adjust::adjust;
pub use cart::model::{Cart, CartItem};
pub use cart::reconcile::reconcile;
pub use channel::WidgetStateChannel;
pub use fingerprint::Fingerprint;
