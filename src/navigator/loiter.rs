//! Loiter mode
//!
//! Keeps the vehicle near the subject, camera on the subject, and lets the
//! subject nudge it around with the remote: up/down, orbit left/right,
//! closer/further, come-to-me, look-down, takeoff and land.
//!
//! Decisions are made by the pure transition functions in
//! `follow_nav_core::mode::loiter`; this type owns the setpoint triplet,
//! caches the last telemetry snapshot and applies transitions.
//!
//! Steady-state step order:
//!
//! 1. Reached-check in sub-modes that wait on their setpoint
//! 2. Altitude floor in aim-and-shoot
//! 3. At most one command
//! 4. Camera pointing in aim-and-shoot and come-to-me
//! 5. Publish

use follow_nav_core::command::{Command, VehicleCommand};
use follow_nav_core::commander::CommanderRequest;
use follow_nav_core::mode::check_setpoint_reached;
use follow_nav_core::mode::loiter::{
    clamp_altitude, point_camera_at_subject, transition, GeometryError, LoiterInputs,
    LoiterSubMode, Transition,
};
use follow_nav_core::navigation::{PositionSetpoint, SetpointTriplet};
use follow_nav_core::parameters::{LoiterParams, NavigatorParams, ParameterStore};
use follow_nav_core::telemetry::TelemetrySnapshot;

use super::io::NavigatorIo;
use super::mode::NavigatorMode;

/// Subject-following loiter mode
#[derive(Debug, Clone)]
pub struct LoiterMode {
    sub_mode: LoiterSubMode,
    triplet: SetpointTriplet,
    /// Last snapshot received, reused while no new one arrives
    snapshot: Option<TelemetrySnapshot>,
    nav: NavigatorParams,
    loiter: LoiterParams,
    /// Activation happened before any telemetry was available
    entry_pending: bool,
}

impl LoiterMode {
    /// Create loiter mode with parameters loaded from `store`
    pub fn new(store: &ParameterStore) -> Self {
        Self {
            sub_mode: LoiterSubMode::default(),
            triplet: SetpointTriplet::default(),
            snapshot: None,
            nav: NavigatorParams::from_store(store),
            loiter: LoiterParams::from_store(store),
            entry_pending: false,
        }
    }

    pub fn sub_mode(&self) -> LoiterSubMode {
        self.sub_mode
    }

    pub fn triplet(&self) -> &SetpointTriplet {
        &self.triplet
    }

    pub fn loiter_params(&self) -> &LoiterParams {
        &self.loiter
    }

    fn refresh_telemetry(&mut self, io: &mut NavigatorIo<'_>) -> Option<TelemetrySnapshot> {
        if let Some(snapshot) = io.telemetry.poll() {
            self.snapshot = Some(snapshot);
        }
        self.snapshot
    }

    fn inputs<'a>(&'a self, snapshot: &'a TelemetrySnapshot) -> LoiterInputs<'a> {
        LoiterInputs {
            snapshot,
            setpoint: &self.triplet.current,
            nav: &self.nav,
            loiter: &self.loiter,
        }
    }

    /// Pick the ground or air branch from fresh telemetry
    ///
    /// Stays pending if the entry setpoint cannot be built.
    fn enter_initial(&mut self, io: &mut NavigatorIo<'_>, snapshot: &TelemetrySnapshot) {
        self.entry_pending = true;
        let transition = transition::on_activation(&self.inputs(snapshot));
        let changes = transition.changes_sub_mode(self.sub_mode);
        if !self.apply(io, transition) {
            return;
        }

        self.entry_pending = false;
        if !changes {
            crate::log_info!("Loiter sub mode set to {}", self.sub_mode.label());
        }
    }

    /// Apply a transition, returning whether it was taken
    ///
    /// A transition whose setpoint is not finite is dropped as a whole and
    /// the current setpoint stays in place.
    fn apply(&mut self, io: &mut NavigatorIo<'_>, transition: Transition) -> bool {
        if let Some(setpoint) = transition.setpoint {
            if !setpoint.is_finite() {
                crate::log_warn!(
                    "Loiter: non-finite setpoint, {} transition dropped",
                    transition.next.label()
                );
                return false;
            }
            self.triplet.activate_current(setpoint);
        }

        if let Some(request) = transition.request {
            send_request(io, request);
        }

        if transition.changes_sub_mode(self.sub_mode) {
            self.sub_mode = transition.next;
            crate::log_info!("Loiter sub mode set to {}", self.sub_mode.label());
        }
        true
    }

    /// Edit the current setpoint in place unless the edit is not finite
    fn refine_current(&mut self, setpoint: PositionSetpoint) {
        if setpoint.is_finite() {
            self.triplet.current = setpoint;
        } else {
            crate::log_warn!("Loiter: non-finite setpoint edit dropped");
        }
    }

    fn check_reached(&mut self, io: &mut NavigatorIo<'_>, snapshot: &TelemetrySnapshot) {
        let check = check_setpoint_reached(&self.triplet.current, snapshot, &self.nav);
        if !check.reached {
            return;
        }

        if let Some(request) = check.request {
            send_request(io, request);
        }

        let transition = transition::on_setpoint_reached(self.sub_mode, &self.inputs(snapshot));
        if let Some(transition) = transition {
            self.apply(io, transition);
        }
    }

    fn enforce_min_altitude(&mut self, snapshot: &TelemetrySnapshot) {
        if self.sub_mode == LoiterSubMode::AimAndShoot {
            let floor = snapshot.subject.alt + self.loiter.min_alt;
            self.refine_current(clamp_altitude(&self.triplet.current, floor));
        }
    }

    fn handle_command(
        &mut self,
        io: &mut NavigatorIo<'_>,
        snapshot: &TelemetrySnapshot,
        raw: VehicleCommand,
    ) {
        let command = match raw.decode() {
            Ok(command) => command,
            Err(_e) => {
                crate::log_debug!(
                    "Loiter: ignoring command {} (param1 {})",
                    raw.command,
                    raw.param1
                );
                return;
            }
        };

        let result = transition::on_command(self.sub_mode, command, &self.inputs(snapshot));
        match result {
            Ok(Some(transition)) => {
                self.apply(io, transition);
            }
            Ok(None) => match command {
                Command::Remote(_button) => crate::log_debug!(
                    "Loiter: {} not handled in {}",
                    _button.label(),
                    self.sub_mode.label()
                ),
                Command::SetMode { custom_sub_mode: _sub_mode } => crate::log_debug!(
                    "Loiter: set mode {} not handled in {}",
                    _sub_mode,
                    self.sub_mode.label()
                ),
            },
            Err(GeometryError::DegenerateRadius(_radius)) => {
                crate::log_warn!(
                    "Loiter: command rejected, subject only {} m away",
                    _radius
                );
            }
        }
    }
}

fn send_request(io: &mut NavigatorIo<'_>, request: CommanderRequest) {
    match request {
        CommanderRequest::Disarm => crate::log_info!("Loiter: requesting disarm"),
        CommanderRequest::MainStateChange(_state) => {
            crate::log_info!("Loiter: requesting main state {}", _state.label())
        }
        CommanderRequest::VehicleStateChange(_state) => {
            crate::log_info!("Loiter: vehicle state {}", _state.label())
        }
    }
    io.commander.request(request);
}

impl NavigatorMode for LoiterMode {
    fn name(&self) -> &'static str {
        "Loiter"
    }

    fn update_parameters(&mut self, store: &ParameterStore) {
        self.nav = NavigatorParams::from_store(store);
        self.loiter = LoiterParams::from_store(store);
    }

    fn on_inactive(&mut self, _io: &mut NavigatorIo<'_>) {}

    fn on_activation(&mut self, io: &mut NavigatorIo<'_>) {
        match self.refresh_telemetry(io) {
            Some(snapshot) => {
                self.enter_initial(io, &snapshot);
                if !self.entry_pending {
                    io.setpoints.publish(&self.triplet);
                }
            }
            None => {
                self.entry_pending = true;
                crate::log_warn!("Loiter: activated without telemetry, waiting");
            }
        }
    }

    fn on_active(&mut self, io: &mut NavigatorIo<'_>) {
        let Some(snapshot) = self.refresh_telemetry(io) else {
            crate::log_warn!("Loiter: no telemetry, step skipped");
            return;
        };

        if self.entry_pending {
            self.enter_initial(io, &snapshot);
            if !self.entry_pending {
                io.setpoints.publish(&self.triplet);
            }
            return;
        }

        if self.sub_mode.waits_for_setpoint() {
            self.check_reached(io, &snapshot);
        }

        self.enforce_min_altitude(&snapshot);

        if let Some(raw) = io.commands.try_take() {
            self.handle_command(io, &snapshot, raw);
            self.enforce_min_altitude(&snapshot);
        }

        if self.sub_mode.tracks_subject() {
            self.refine_current(point_camera_at_subject(&self.triplet.current, &snapshot));
        }

        io.setpoints.publish(&self.triplet);
    }

    fn triplet_mut(&mut self) -> &mut SetpointTriplet {
        &mut self.triplet
    }
}
