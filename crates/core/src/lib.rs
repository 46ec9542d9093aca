//! follow_nav_core - Pure no_std navigator logic for subject-following flight
//!
//! This crate contains the platform-agnostic half of the navigator: the
//! types exchanged with neighbouring subsystems and the decision logic of
//! the loiter mode, written so it can be tested on host without any
//! feature flags or executor.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Values in, values out**: every decision takes a telemetry snapshot
//!   and returns the effects to apply, nothing is cached behind pointers
//!
//! # Modules
//!
//! - [`navigation`]: Geodetic positions, geodesy helpers, setpoint triplet
//! - [`telemetry`]: Per-tick telemetry snapshot
//! - [`command`]: Vehicle and remote command decoding
//! - [`commander`]: Requests sent to the arming/flight-mode authority
//! - [`parameters`]: Parameter store and navigator/loiter parameter blocks
//! - [`mode`]: Mode lifecycle, reached-check evaluator, loiter sub-modes

#![no_std]

pub mod command;
pub mod commander;
pub mod mode;
pub mod navigation;
pub mod parameters;
pub mod telemetry;
