//! Core infrastructure
//!
//! Logging macros, single-slot mailboxes and the shared-state abstraction
//! used to hand data between the navigator and other tasks.

pub mod logging;
pub mod mailbox;
pub mod traits;
