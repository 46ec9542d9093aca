//! Loiter sub-modes

/// Nested state of the loiter mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoiterSubMode {
    /// On the ground, waiting for takeoff
    #[default]
    Landed,
    /// Climbing to takeoff altitude
    TakingOff,
    /// Holding position and keeping the camera on the subject
    AimAndShoot,
    /// Holding position with the camera pointing straight down
    LookDown,
    /// Flying to the subject's horizontal position
    ComeToMe,
    /// Descending until ground contact
    Landing,
}

impl LoiterSubMode {
    /// Human readable name for logging
    pub fn label(self) -> &'static str {
        match self {
            Self::Landed => "Landed",
            Self::TakingOff => "Taking-off",
            Self::AimAndShoot => "Aim-and-shoot",
            Self::LookDown => "Look down",
            Self::ComeToMe => "Come-to-me",
            Self::Landing => "Landing",
        }
    }

    /// Sub-modes that end when the current setpoint is reached
    pub fn waits_for_setpoint(self) -> bool {
        matches!(self, Self::TakingOff | Self::Landing | Self::ComeToMe)
    }

    /// Sub-modes that keep the camera aimed at the subject
    pub fn tracks_subject(self) -> bool {
        matches!(self, Self::AimAndShoot | Self::ComeToMe)
    }
}
