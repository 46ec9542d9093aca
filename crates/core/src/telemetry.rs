//! Telemetry snapshot
//!
//! A point-in-time copy of the estimator outputs the navigator works from.
//! The provider hands out a fresh value each tick; the navigator never
//! holds references into live estimator state.

use crate::navigation::GeoPosition;

/// Vehicle, subject and ground-contact state for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TelemetrySnapshot {
    /// Filtered vehicle position
    pub vehicle: GeoPosition,
    /// Position of the tracked subject (the operator's beacon)
    pub subject: GeoPosition,
    /// Land detector reports ground contact
    pub landed: bool,
}

impl TelemetrySnapshot {
    /// Snapshot of a vehicle in the air
    pub fn airborne(vehicle: GeoPosition, subject: GeoPosition) -> Self {
        Self {
            vehicle,
            subject,
            landed: false,
        }
    }

    /// Snapshot of a vehicle on the ground
    pub fn on_ground(vehicle: GeoPosition, subject: GeoPosition) -> Self {
        Self {
            vehicle,
            subject,
            landed: true,
        }
    }
}
