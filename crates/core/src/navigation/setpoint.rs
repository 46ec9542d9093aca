//! Position setpoint triplet
//!
//! The setpoint handed to the position controller is a triplet of
//! previous/current/next slots. Navigator modes that do not sequence legs
//! only ever use `current`; [`SetpointTriplet::activate_current`] enforces
//! that by invalidating the other two slots on every write.

use super::types::GeoPosition;

/// What the position controller should do with a setpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SetpointKind {
    /// Hold whatever the controller is doing; always counts as reached
    #[default]
    Idle,
    /// Fly to and hold a position
    Position,
    /// Climb from the ground to the setpoint altitude
    Takeoff,
    /// Descend until ground contact
    Land,
}

/// One setpoint slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSetpoint {
    /// Slot carries a usable setpoint
    pub valid: bool,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Altitude in meters (AMSL)
    pub alt: f32,
    /// Heading in radians, `None` lets the controller keep its own
    pub yaw: Option<f32>,
    /// Gimbal pitch in radians (negative = down)
    pub camera_pitch: f32,
    /// Setpoint type
    pub kind: SetpointKind,
}

impl Default for PositionSetpoint {
    fn default() -> Self {
        Self {
            valid: false,
            lat: 0.0,
            lon: 0.0,
            alt: 0.0,
            yaw: None,
            camera_pitch: 0.0,
            kind: SetpointKind::Idle,
        }
    }
}

impl PositionSetpoint {
    /// Geodetic position of the setpoint
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.lat, self.lon, self.alt)
    }

    /// Move the setpoint to `pos` including altitude
    pub fn set_position(&mut self, pos: &GeoPosition) {
        self.lat = pos.lat;
        self.lon = pos.lon;
        self.alt = pos.alt;
    }

    /// Move the setpoint laterally, keeping its altitude
    pub fn set_lateral(&mut self, pos: &GeoPosition) {
        self.lat = pos.lat;
        self.lon = pos.lon;
    }

    /// Every numeric field is finite (yaw may be unspecified)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.alt.is_finite()
            && self.camera_pitch.is_finite()
            && self.yaw.map_or(true, f32::is_finite)
    }
}

/// Previous/current/next setpoint slots
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SetpointTriplet {
    pub previous: PositionSetpoint,
    pub current: PositionSetpoint,
    pub next: PositionSetpoint,
}

impl SetpointTriplet {
    /// Replace the current slot and make it the only valid one
    pub fn activate_current(&mut self, setpoint: PositionSetpoint) {
        self.previous.valid = false;
        self.current = PositionSetpoint {
            valid: true,
            ..setpoint
        };
        self.next.valid = false;
    }

    /// Drop the current setpoint back to an invalid idle slot
    pub fn invalidate_current(&mut self) {
        self.previous.valid = false;
        self.current.valid = false;
        self.current.kind = SetpointKind::Idle;
        self.next.valid = false;
    }

    /// Neither the previous nor the next slot is valid
    pub fn only_current_valid(&self) -> bool {
        !self.previous.valid && !self.next.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setpoint_default_is_invalid_idle() {
        let sp = PositionSetpoint::default();
        assert!(!sp.valid);
        assert_eq!(sp.kind, SetpointKind::Idle);
        assert!(sp.yaw.is_none());
    }

    #[test]
    fn test_set_lateral_keeps_altitude() {
        let mut sp = PositionSetpoint {
            alt: 30.0,
            ..Default::default()
        };
        sp.set_lateral(&GeoPosition::new(1.0, 2.0, 99.0));
        assert!((sp.lat - 1.0).abs() < 1e-9);
        assert!((sp.lon - 2.0).abs() < 1e-9);
        assert!((sp.alt - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_activate_current_invalidates_neighbours() {
        let mut triplet = SetpointTriplet::default();
        triplet.previous.valid = true;
        triplet.next.valid = true;

        triplet.activate_current(PositionSetpoint {
            kind: SetpointKind::Position,
            ..Default::default()
        });

        assert!(triplet.current.valid);
        assert_eq!(triplet.current.kind, SetpointKind::Position);
        assert!(triplet.only_current_valid());
    }

    #[test]
    fn test_invalidate_current() {
        let mut triplet = SetpointTriplet::default();
        triplet.activate_current(PositionSetpoint {
            kind: SetpointKind::Land,
            ..Default::default()
        });
        triplet.invalidate_current();
        assert!(!triplet.current.valid);
        assert_eq!(triplet.current.kind, SetpointKind::Idle);
    }

    #[test]
    fn test_is_finite() {
        let mut sp = PositionSetpoint::default();
        assert!(sp.is_finite());
        sp.yaw = Some(f32::NAN);
        assert!(!sp.is_finite());
        sp.yaw = None;
        sp.lat = f64::NAN;
        assert!(!sp.is_finite());
    }
}
