//! Reached-check evaluator
//!
//! Decides whether the vehicle has satisfied the current setpoint. Takeoff
//! and land completion are also phase changes the commander must hear
//! about, so those checks hand back the request to send alongside the
//! answer. All comparisons are inclusive.

use libm::fabsf;

use crate::commander::{CommanderRequest, VehicleState};
use crate::navigation::geo;
use crate::navigation::{PositionSetpoint, SetpointKind};
use crate::parameters::NavigatorParams;
use crate::telemetry::TelemetrySnapshot;

/// Outcome of a reached-check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReachedCheck {
    /// Setpoint satisfied
    pub reached: bool,
    /// Phase change to report when `reached`
    pub request: Option<CommanderRequest>,
}

impl ReachedCheck {
    const NOT_REACHED: Self = Self {
        reached: false,
        request: None,
    };

    const REACHED: Self = Self {
        reached: true,
        request: None,
    };

    fn reached_with(state: VehicleState) -> Self {
        Self {
            reached: true,
            request: Some(CommanderRequest::VehicleStateChange(state)),
        }
    }
}

/// Evaluate whether `setpoint` has been reached
pub fn check_setpoint_reached(
    setpoint: &PositionSetpoint,
    snapshot: &TelemetrySnapshot,
    params: &NavigatorParams,
) -> ReachedCheck {
    match setpoint.kind {
        SetpointKind::Idle => ReachedCheck::REACHED,
        SetpointKind::Land => {
            if snapshot.landed {
                ReachedCheck::reached_with(VehicleState::Landed)
            } else {
                ReachedCheck::NOT_REACHED
            }
        }
        SetpointKind::Takeoff => {
            let alt_error = fabsf(setpoint.alt - snapshot.vehicle.alt);
            if alt_error <= params.takeoff_acceptance_radius {
                ReachedCheck::reached_with(VehicleState::InAir)
            } else {
                ReachedCheck::NOT_REACHED
            }
        }
        SetpointKind::Position => {
            let d = geo::distance(&snapshot.vehicle, &setpoint.position());
            if d.total <= params.acceptance_radius {
                ReachedCheck::REACHED
            } else {
                ReachedCheck::NOT_REACHED
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::GeoPosition;
    use nalgebra::Vector2;

    const HOME: GeoPosition = GeoPosition::new(56.9496, 24.1052, 100.0);
    const SUBJECT: GeoPosition = GeoPosition::new(56.9497, 24.1052, 100.0);

    fn setpoint(kind: SetpointKind, pos: GeoPosition) -> PositionSetpoint {
        let mut sp = PositionSetpoint {
            valid: true,
            kind,
            ..Default::default()
        };
        sp.set_position(&pos);
        sp
    }

    fn airborne_at(pos: GeoPosition) -> TelemetrySnapshot {
        TelemetrySnapshot::airborne(pos, SUBJECT)
    }

    #[test]
    fn test_idle_always_reached() {
        let sp = setpoint(SetpointKind::Idle, HOME.with_alt(500.0));
        let check = check_setpoint_reached(&sp, &airborne_at(HOME), &NavigatorParams::default());
        assert!(check.reached);
        assert!(check.request.is_none());
    }

    #[test]
    fn test_land_requires_ground_contact() {
        let sp = setpoint(SetpointKind::Land, HOME);
        let params = NavigatorParams::default();

        let check = check_setpoint_reached(&sp, &airborne_at(HOME), &params);
        assert_eq!(check, ReachedCheck::NOT_REACHED);

        let landed = TelemetrySnapshot::on_ground(HOME, SUBJECT);
        let check = check_setpoint_reached(&sp, &landed, &params);
        assert!(check.reached);
        assert_eq!(
            check.request,
            Some(CommanderRequest::VehicleStateChange(VehicleState::Landed))
        );
    }

    #[test]
    fn test_takeoff_within_acceptance() {
        let sp = setpoint(SetpointKind::Takeoff, HOME.with_alt(110.0));
        let params = NavigatorParams::default();

        let check = check_setpoint_reached(&sp, &airborne_at(HOME.with_alt(105.0)), &params);
        assert!(!check.reached);

        let check = check_setpoint_reached(&sp, &airborne_at(HOME.with_alt(109.5)), &params);
        assert!(check.reached);
        assert_eq!(
            check.request,
            Some(CommanderRequest::VehicleStateChange(VehicleState::InAir))
        );
    }

    #[test]
    fn test_takeoff_boundary_is_inclusive() {
        let params = NavigatorParams {
            takeoff_acceptance_radius: 2.0,
            ..Default::default()
        };
        let sp = setpoint(SetpointKind::Takeoff, HOME.with_alt(110.0));
        let check = check_setpoint_reached(&sp, &airborne_at(HOME.with_alt(108.0)), &params);
        assert!(check.reached);
    }

    #[test]
    fn test_position_within_radius() {
        let sp = setpoint(SetpointKind::Position, HOME);
        let params = NavigatorParams::default();

        let near = geo::add_vector(&HOME, &Vector2::new(1.0, 1.0));
        let check = check_setpoint_reached(&sp, &airborne_at(near), &params);
        assert!(check.reached);
        assert!(check.request.is_none());

        let far = geo::add_vector(&HOME, &Vector2::new(10.0, 0.0));
        assert!(!check_setpoint_reached(&sp, &airborne_at(far), &params).reached);
    }

    #[test]
    fn test_position_counts_altitude() {
        let sp = setpoint(SetpointKind::Position, HOME);
        let params = NavigatorParams::default();
        let above = HOME.with_alt(HOME.alt + 3.0);
        assert!(!check_setpoint_reached(&sp, &airborne_at(above), &params).reached);
    }

    #[test]
    fn test_position_boundary_is_inclusive() {
        // Pure vertical offset keeps the distance exact in f32
        let params = NavigatorParams {
            acceptance_radius: 2.0,
            ..Default::default()
        };
        let sp = setpoint(SetpointKind::Position, HOME);
        let at_radius = HOME.with_alt(HOME.alt + 2.0);
        assert!(check_setpoint_reached(&sp, &airborne_at(at_radius), &params).reached);
    }

    #[test]
    fn test_position_reached_is_idempotent() {
        let sp = setpoint(SetpointKind::Position, HOME);
        let params = NavigatorParams::default();
        let snapshot = airborne_at(HOME);
        let first = check_setpoint_reached(&sp, &snapshot, &params);
        let second = check_setpoint_reached(&sp, &snapshot, &params);
        assert_eq!(first, second);
    }
}
