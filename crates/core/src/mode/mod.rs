//! Navigator mode building blocks
//!
//! - [`ModeLifecycle`]: activation tracking shared by every mode
//! - [`check_setpoint_reached`]: reached-check evaluator
//! - [`loiter`]: loiter sub-mode state machine

pub mod loiter;
mod reached;
mod state;

pub use reached::{check_setpoint_reached, ReachedCheck};
pub use state::{LifecycleStep, ModeLifecycle, ModeState};
