//! Loiter sub-mode transitions
//!
//! Pure functions from (sub-mode, event, inputs) to the next sub-mode plus
//! the setpoint write and commander request to carry out. The caller owns
//! the setpoint triplet and the commander channel and applies the result.

use nalgebra::{Rotation3, Vector2, Vector3};

use super::camera::LOOK_DOWN_PITCH;
use super::error::GeometryError;
use super::sub_mode::LoiterSubMode;
use crate::command::{Command, RemoteCommand, CUSTOM_SUB_MODE_AUTO_RTL};
use crate::commander::{CommanderRequest, MainState, VehicleState};
use crate::navigation::geo;
use crate::navigation::{PositionSetpoint, SetpointKind};
use crate::parameters::{LoiterParams, NavigatorParams};
use crate::telemetry::TelemetrySnapshot;

/// Smallest horizontal subject-to-vehicle distance (m) that still defines
/// an orbit
pub const MIN_ORBIT_RADIUS: f32 = 0.1;

/// Everything a transition reads
#[derive(Clone, Copy, Debug)]
pub struct LoiterInputs<'a> {
    pub snapshot: &'a TelemetrySnapshot,
    /// Current setpoint before the transition
    pub setpoint: &'a PositionSetpoint,
    pub nav: &'a NavigatorParams,
    pub loiter: &'a LoiterParams,
}

/// Outcome of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Sub-mode after the transition
    pub next: LoiterSubMode,
    /// New current setpoint, if it changes
    pub setpoint: Option<PositionSetpoint>,
    /// Request for the commander
    pub request: Option<CommanderRequest>,
}

impl Transition {
    /// Stay in `sub_mode` without side effects
    pub fn stay(sub_mode: LoiterSubMode) -> Self {
        Self {
            next: sub_mode,
            setpoint: None,
            request: None,
        }
    }

    fn with_setpoint(mut self, setpoint: PositionSetpoint) -> Self {
        self.setpoint = Some(setpoint);
        self
    }

    fn with_request(mut self, request: CommanderRequest) -> Self {
        self.request = Some(request);
        self
    }

    /// Whether the sub-mode changes
    pub fn changes_sub_mode(&self, from: LoiterSubMode) -> bool {
        self.next != from
    }
}

/// Enter `sub_mode`, running its entry action
pub fn enter(sub_mode: LoiterSubMode, inputs: &LoiterInputs<'_>) -> Transition {
    let vehicle = &inputs.snapshot.vehicle;
    let mut sp = *inputs.setpoint;
    let transition = Transition::stay(sub_mode);

    match sub_mode {
        LoiterSubMode::Landed => transition,
        LoiterSubMode::TakingOff => {
            sp.set_position(&vehicle.with_alt(vehicle.alt + inputs.nav.takeoff_alt));
            sp.yaw = None;
            sp.kind = SetpointKind::Takeoff;
            transition
                .with_setpoint(sp)
                .with_request(CommanderRequest::VehicleStateChange(VehicleState::TakingOff))
        }
        LoiterSubMode::AimAndShoot => {
            sp.set_position(vehicle);
            sp.kind = SetpointKind::Position;
            transition.with_setpoint(sp)
        }
        LoiterSubMode::LookDown => {
            sp.camera_pitch = LOOK_DOWN_PITCH;
            transition.with_setpoint(sp)
        }
        LoiterSubMode::ComeToMe => {
            sp.set_lateral(&inputs.snapshot.subject);
            sp.kind = SetpointKind::Position;
            transition.with_setpoint(sp)
        }
        LoiterSubMode::Landing => {
            sp.set_position(vehicle);
            sp.yaw = None;
            sp.kind = SetpointKind::Land;
            transition
                .with_setpoint(sp)
                .with_request(CommanderRequest::VehicleStateChange(VehicleState::Landing))
        }
    }
}

/// Initial sub-mode on mode activation
pub fn on_activation(inputs: &LoiterInputs<'_>) -> Transition {
    if inputs.snapshot.landed {
        enter(LoiterSubMode::Landed, inputs)
    } else {
        enter(LoiterSubMode::AimAndShoot, inputs)
    }
}

/// Current setpoint reached while in `sub_mode`
///
/// Returns `None` for sub-modes that do not wait on their setpoint.
pub fn on_setpoint_reached(
    sub_mode: LoiterSubMode,
    inputs: &LoiterInputs<'_>,
) -> Option<Transition> {
    match sub_mode {
        LoiterSubMode::TakingOff | LoiterSubMode::ComeToMe => {
            Some(enter(LoiterSubMode::AimAndShoot, inputs))
        }
        LoiterSubMode::Landing => {
            Some(enter(LoiterSubMode::Landed, inputs).with_request(CommanderRequest::Disarm))
        }
        _ => None,
    }
}

/// Handle one command in `sub_mode`
///
/// `Ok(None)` means the command does not apply to this sub-mode.
pub fn on_command(
    sub_mode: LoiterSubMode,
    command: Command,
    inputs: &LoiterInputs<'_>,
) -> Result<Option<Transition>, GeometryError> {
    match sub_mode {
        LoiterSubMode::Landed => Ok(landed_command(command, inputs)),
        LoiterSubMode::AimAndShoot => aim_and_shoot_command(command, inputs),
        LoiterSubMode::LookDown | LoiterSubMode::ComeToMe | LoiterSubMode::Landing => {
            Ok(match command {
                Command::Remote(RemoteCommand::PlayPause) => {
                    Some(enter(LoiterSubMode::AimAndShoot, inputs))
                }
                _ => None,
            })
        }
        LoiterSubMode::TakingOff => Ok(None),
    }
}

fn landed_command(command: Command, inputs: &LoiterInputs<'_>) -> Option<Transition> {
    match command {
        Command::Remote(RemoteCommand::Takeoff) => Some(enter(LoiterSubMode::TakingOff, inputs)),
        Command::Remote(RemoteCommand::LandDisarm) => {
            Some(Transition::stay(LoiterSubMode::Landed).with_request(CommanderRequest::Disarm))
        }
        _ => None,
    }
}

fn aim_and_shoot_command(
    command: Command,
    inputs: &LoiterInputs<'_>,
) -> Result<Option<Transition>, GeometryError> {
    let stay = Transition::stay(LoiterSubMode::AimAndShoot);

    let button = match command {
        Command::SetMode { custom_sub_mode } if custom_sub_mode == CUSTOM_SUB_MODE_AUTO_RTL => {
            return Ok(Some(
                stay.with_request(CommanderRequest::MainStateChange(MainState::AutoRtl)),
            ));
        }
        Command::SetMode { .. } => return Ok(None),
        Command::Remote(button) => button,
    };

    let snapshot = inputs.snapshot;
    let step = inputs.loiter.step_len;
    let mut sp = *inputs.setpoint;
    sp.kind = SetpointKind::Position;

    let transition = match button {
        RemoteCommand::LandDisarm => enter(LoiterSubMode::Landing, inputs),
        RemoteCommand::Up | RemoteCommand::Down => {
            let delta = if button == RemoteCommand::Up { step } else { -step };
            sp.set_position(&snapshot.vehicle.with_alt(snapshot.vehicle.alt + delta));
            stay.with_setpoint(sp)
        }
        RemoteCommand::Left | RemoteCommand::Right => {
            let offset = orbit_offset(snapshot)?;
            let radius = offset.xy().norm();
            let alpha = step / radius;
            let yaw = if button == RemoteCommand::Left { -alpha } else { alpha };

            let rotated = Rotation3::from_euler_angles(0.0, 0.0, yaw) * offset;
            sp.set_lateral(&geo::add_vector(&snapshot.subject, &rotated.xy()));
            stay.with_setpoint(sp)
        }
        RemoteCommand::Closer | RemoteCommand::Further => {
            let offset = orbit_offset(snapshot)?.xy();
            let alpha = geo::bearing(&offset);
            let delta = Vector2::new(libm::cosf(alpha), libm::sinf(alpha)) * step;
            let moved = if button == RemoteCommand::Closer {
                offset - delta
            } else {
                offset + delta
            };

            sp.set_lateral(&geo::add_vector(&snapshot.subject, &moved));
            stay.with_setpoint(sp)
        }
        RemoteCommand::ComeToMe => enter(LoiterSubMode::ComeToMe, inputs),
        RemoteCommand::LookDown => enter(LoiterSubMode::LookDown, inputs),
        RemoteCommand::PlayPause => {
            stay.with_request(CommanderRequest::MainStateChange(MainState::AutoAbsFollow))
        }
        RemoteCommand::Takeoff => return Ok(None),
    };

    Ok(Some(transition))
}

/// Subject-to-vehicle offset (north, east, subject alt - vehicle alt)
fn orbit_offset(snapshot: &TelemetrySnapshot) -> Result<Vector3<f32>, GeometryError> {
    let lateral = geo::vector_to(&snapshot.subject, &snapshot.vehicle);
    let radius = lateral.norm();
    if radius.is_nan() || radius < MIN_ORBIT_RADIUS {
        return Err(GeometryError::DegenerateRadius(radius));
    }

    Ok(Vector3::new(
        lateral.x,
        lateral.y,
        snapshot.subject.alt - snapshot.vehicle.alt,
    ))
}
