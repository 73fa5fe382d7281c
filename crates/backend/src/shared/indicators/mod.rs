pub mod aggregate;
pub mod causal;
pub mod classifier;
pub mod delta;
pub mod metadata;
pub mod reference;

pub use aggregate::aggregate;
pub use causal::derive_chain;
pub use classifier::classify;
pub use delta::{delta_for, percent_delta};
pub use reference::resolve_reference;
