//! Navigator mode trait and lifecycle driver
//!
//! A navigator mode is ticked at the navigator rate whether it is selected
//! or not. [`ModeRunner`] turns the per-tick "selected" flag into
//! activation, steady-state and inactive callbacks.

use follow_nav_core::mode::{LifecycleStep, ModeLifecycle, ModeState};
use follow_nav_core::navigation::SetpointTriplet;
use follow_nav_core::parameters::ParameterStore;

use super::io::{MissionResult, NavigatorIo};

/// Navigator mode
///
/// # Lifecycle
///
/// 1. `on_activation()` - first tick after the mode is selected
/// 2. `on_active()` - every following tick while selected
/// 3. `on_inactive()` - every tick while not selected
///
/// Parameters are reloaded through `update_parameters()` on activation and
/// whenever the store reports a change.
pub trait NavigatorMode {
    /// Mode name for logging
    fn name(&self) -> &'static str;

    /// Reload tuning parameters
    fn update_parameters(&mut self, store: &ParameterStore);

    fn on_inactive(&mut self, io: &mut NavigatorIo<'_>);

    fn on_activation(&mut self, io: &mut NavigatorIo<'_>);

    fn on_active(&mut self, io: &mut NavigatorIo<'_>);

    /// Setpoint triplet owned by this mode
    fn triplet_mut(&mut self) -> &mut SetpointTriplet;
}

/// Drives one mode through its lifecycle
#[derive(Debug, Default)]
pub struct ModeRunner {
    lifecycle: ModeLifecycle,
}

impl ModeRunner {
    pub const fn new() -> Self {
        Self {
            lifecycle: ModeLifecycle::new(),
        }
    }

    pub fn state(&self) -> ModeState {
        self.lifecycle.state()
    }

    /// Run one navigator tick for `mode`
    ///
    /// Returns the lifecycle state after the tick.
    pub fn tick<M: NavigatorMode + ?Sized>(
        &mut self,
        mode: &mut M,
        io: &mut NavigatorIo<'_>,
        store: &ParameterStore,
        is_active: bool,
        params_changed: bool,
    ) -> ModeState {
        if params_changed {
            crate::log_debug!("{}: parameters changed, reloading", mode.name());
            mode.update_parameters(store);
        }

        match self.lifecycle.advance(is_active) {
            LifecycleStep::Activate => {
                crate::log_info!("{}: activating", mode.name());

                io.mission_result.publish(&MissionResult {
                    stay_in_failsafe: false,
                });
                mode.triplet_mut().invalidate_current();
                mode.update_parameters(store);
                mode.on_activation(io);

                self.lifecycle.activation_complete();
            }
            LifecycleStep::Run => mode.on_active(io),
            LifecycleStep::Idle => mode.on_inactive(io),
        }

        self.lifecycle.state()
    }
}
