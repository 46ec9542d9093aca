//! Platform abstraction traits
//!
//! - [`SharedState`]: synchronized access to state shared between tasks
//!
//! # Features
//!
//! - **`embassy`**: Enables `EmbassyState<T>` (critical-section mutex)
//! - `MockState<T>` is always available for host testing

pub mod sync;

pub use sync::{MockState, SharedState};

#[cfg(feature = "embassy")]
pub use sync::EmbassyState;
