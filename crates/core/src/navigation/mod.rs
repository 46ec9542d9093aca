//! Navigation types and utilities
//!
//! Geodetic positions, the geodesy helpers operating on them, and the
//! setpoint triplet published to the position controller.

pub mod geo;
mod setpoint;
mod types;

pub use setpoint::{PositionSetpoint, SetpointKind, SetpointTriplet};
pub use types::{Distance, GeoPosition};
