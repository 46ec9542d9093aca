//! Camera pointing and altitude floor

use libm::atan2f;

use crate::navigation::geo;
use crate::navigation::PositionSetpoint;
use crate::telemetry::TelemetrySnapshot;

/// Minimum horizontal distance (m) to the subject for yaw to be updated
pub const CAMERA_YAW_MIN_DISTANCE: f32 = 5.0;

/// Camera pitch for looking straight down (rad)
pub const LOOK_DOWN_PITCH: f32 = -core::f32::consts::FRAC_PI_2;

/// Aim yaw and camera pitch from the vehicle at the subject
pub fn point_camera_at_subject(
    setpoint: &PositionSetpoint,
    snapshot: &TelemetrySnapshot,
) -> PositionSetpoint {
    let mut sp = *setpoint;
    let offset = geo::vector_to(&snapshot.subject, &snapshot.vehicle);
    let horizontal = offset.norm();

    if horizontal > CAMERA_YAW_MIN_DISTANCE {
        sp.yaw = Some(geo::wrap_pi(atan2f(-offset.y, -offset.x)));
    }

    sp.camera_pitch = atan2f(snapshot.subject.alt - snapshot.vehicle.alt, horizontal);
    sp
}

/// Raise the setpoint to `floor` if it sits below it
pub fn clamp_altitude(setpoint: &PositionSetpoint, floor: f32) -> PositionSetpoint {
    let mut sp = *setpoint;
    if sp.alt < floor {
        sp.alt = floor;
    }
    sp
}
