#![cfg_attr(not(test), no_std)]

//! follow_nav - Subject-following navigator for a multicopter autopilot
//!
//! Turns vehicle telemetry and remote-control commands from the followed
//! subject into a single position/attitude setpoint, and sequences the
//! vehicle through takeoff, loitering around the subject and landing.
//!
//! The decision logic lives in the `follow_nav_core` crate. This crate adds
//! logging, the shared mailboxes that connect the navigator to the link and
//! commander tasks, and the mode driver that publishes the results.

// Logging macros and shared-state plumbing
pub mod core;

// Navigator modes and their collaborators
pub mod navigator;
