//! Mode lifecycle state
//!
//! Every navigator mode is driven through the same three states. The
//! tracker decides, from the per-tick "is this mode selected" flag, which
//! lifecycle callback runs this tick.

/// Lifecycle state of a navigator mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeState {
    /// Mode not selected
    #[default]
    Inactive,
    /// First tick of an activation episode, activation callback running
    Activating,
    /// Steady state
    Active,
}

/// Callback to run this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStep {
    /// Run the activation routine
    Activate,
    /// Run the steady-state step
    Run,
    /// Run the inactive routine
    Idle,
}

/// Tracks activation episodes
///
/// `Active` is only reachable through `Activating` inside the same episode:
/// any inactive tick re-arms the first-run flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeLifecycle {
    state: ModeState,
    first_run: bool,
}

impl Default for ModeLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeLifecycle {
    pub const fn new() -> Self {
        Self {
            state: ModeState::Inactive,
            first_run: true,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ModeState {
        self.state
    }

    /// Advance by one tick and return the callback to run
    pub fn advance(&mut self, is_active: bool) -> LifecycleStep {
        if !is_active {
            self.first_run = true;
            self.state = ModeState::Inactive;
            return LifecycleStep::Idle;
        }

        if self.first_run {
            self.first_run = false;
            self.state = ModeState::Activating;
            LifecycleStep::Activate
        } else {
            self.state = ModeState::Active;
            LifecycleStep::Run
        }
    }

    /// Activation routine finished
    pub fn activation_complete(&mut self) {
        if self.state == ModeState::Activating {
            self.state = ModeState::Active;
        }
    }
}
