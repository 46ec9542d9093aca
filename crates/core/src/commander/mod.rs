//! Commander Requests
//!
//! The navigator does not own arming state or the top-level flight mode.
//! It asks the commander (the arming/flight-mode authority) to change them
//! through a single outbound request slot. The commander applies or rejects
//! each request on its own schedule; the navigator never waits for an
//! answer and never re-sends on its own.

use core::fmt;

/// Top-level flight modes the navigator may ask for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainState {
    /// Return to launch
    AutoRtl,
    /// Follow the subject at a fixed absolute offset
    AutoAbsFollow,
}

/// Flight phase the commander reports to the rest of the system
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleState {
    TakingOff,
    InAir,
    Landing,
    Landed,
}

/// Request to the commander
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommanderRequest {
    /// Disarm the motors
    Disarm,
    /// Switch the top-level flight mode
    MainStateChange(MainState),
    /// Report a flight phase change
    VehicleStateChange(VehicleState),
}

impl MainState {
    pub fn label(self) -> &'static str {
        match self {
            MainState::AutoRtl => "AUTO_RTL",
            MainState::AutoAbsFollow => "AUTO_ABS_FOLLOW",
        }
    }
}

impl VehicleState {
    pub fn label(self) -> &'static str {
        match self {
            VehicleState::TakingOff => "taking-off",
            VehicleState::InAir => "in-air",
            VehicleState::Landing => "landing",
            VehicleState::Landed => "landed",
        }
    }
}

impl fmt::Display for CommanderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommanderRequest::Disarm => write!(f, "disarm"),
            CommanderRequest::MainStateChange(state) => {
                write!(f, "main state -> {}", state.label())
            }
            CommanderRequest::VehicleStateChange(state) => {
                write!(f, "vehicle state -> {}", state.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn test_request_display() {
        assert_eq!(CommanderRequest::Disarm.to_string(), "disarm");
        assert_eq!(
            CommanderRequest::MainStateChange(MainState::AutoRtl).to_string(),
            "main state -> AUTO_RTL"
        );
        assert_eq!(
            CommanderRequest::VehicleStateChange(VehicleState::InAir).to_string(),
            "vehicle state -> in-air"
        );
    }

    #[test]
    fn test_request_equality() {
        assert_eq!(CommanderRequest::Disarm, CommanderRequest::Disarm);
        assert_ne!(
            CommanderRequest::VehicleStateChange(VehicleState::Landed),
            CommanderRequest::VehicleStateChange(VehicleState::Landing)
        );
    }
}
