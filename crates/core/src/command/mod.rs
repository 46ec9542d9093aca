//! Vehicle Command Decoding
//!
//! Commands reach the navigator as MAVLink-style `COMMAND_LONG` records: a
//! command id plus float parameters. Two ids matter to the navigator:
//!
//! - `NAV_REMOTE_CMD` (vendor range): a button press on the subject's
//!   remote, with the button code in `param1`
//! - `DO_SET_MODE`: a flight mode request, with the custom sub-mode in
//!   `param2`
//!
//! Anything else decodes to [`CommandError::UnknownCommand`] and is ignored
//! by the modes.

mod error;

pub use error::CommandError;

/// MAV_CMD_DO_SET_MODE command ID
pub const VEHICLE_CMD_DO_SET_MODE: u16 = 176;

/// Remote button press command ID (MAVLink user command range)
pub const VEHICLE_CMD_NAV_REMOTE_CMD: u16 = 31010;

/// Custom AUTO sub-mode number for return-to-launch
pub const CUSTOM_SUB_MODE_AUTO_RTL: u8 = 5;

/// Raw command as delivered by the link layer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VehicleCommand {
    /// Command ID
    pub command: u16,
    /// PARAM1 (remote button code for `NAV_REMOTE_CMD`)
    pub param1: f32,
    /// PARAM2 (custom sub-mode for `DO_SET_MODE`)
    pub param2: f32,
    /// PARAM3
    pub param3: f32,
    /// PARAM4
    pub param4: f32,
}

impl VehicleCommand {
    /// Build a remote button command
    pub fn remote(button: RemoteCommand) -> Self {
        Self {
            command: VEHICLE_CMD_NAV_REMOTE_CMD,
            param1: button as u8 as f32,
            ..Default::default()
        }
    }

    /// Build a set-mode command requesting a custom AUTO sub-mode
    pub fn set_mode(custom_sub_mode: u8) -> Self {
        Self {
            command: VEHICLE_CMD_DO_SET_MODE,
            param2: custom_sub_mode as f32,
            ..Default::default()
        }
    }

    /// Decode into a navigator command
    pub fn decode(&self) -> Result<Command, CommandError> {
        match self.command {
            VEHICLE_CMD_NAV_REMOTE_CMD => {
                RemoteCommand::try_from(self.param1 as i32).map(Command::Remote)
            }
            VEHICLE_CMD_DO_SET_MODE => Ok(Command::SetMode {
                custom_sub_mode: self.param2 as u8,
            }),
            other => Err(CommandError::UnknownCommand(other)),
        }
    }
}

/// Buttons on the subject's remote
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RemoteCommand {
    PlayPause = 0,
    Takeoff = 1,
    LandDisarm = 2,
    Up = 3,
    Down = 4,
    Left = 5,
    Right = 6,
    Closer = 7,
    Further = 8,
    ComeToMe = 9,
    LookDown = 10,
}

impl RemoteCommand {
    /// Button name for logging
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayPause => "play-pause",
            Self::Takeoff => "takeoff",
            Self::LandDisarm => "land-disarm",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Closer => "closer",
            Self::Further => "further",
            Self::ComeToMe => "come-to-me",
            Self::LookDown => "look-down",
        }
    }
}

impl TryFrom<i32> for RemoteCommand {
    type Error = CommandError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::PlayPause,
            1 => Self::Takeoff,
            2 => Self::LandDisarm,
            3 => Self::Up,
            4 => Self::Down,
            5 => Self::Left,
            6 => Self::Right,
            7 => Self::Closer,
            8 => Self::Further,
            9 => Self::ComeToMe,
            10 => Self::LookDown,
            _ => return Err(CommandError::UnknownRemoteCommand(code)),
        })
    }
}

/// Decoded navigator command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Remote button press
    Remote(RemoteCommand),
    /// Flight mode request
    SetMode { custom_sub_mode: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_remote_command() {
        let cmd = VehicleCommand::remote(RemoteCommand::ComeToMe);
        assert_eq!(cmd.command, VEHICLE_CMD_NAV_REMOTE_CMD);
        assert_eq!(cmd.decode(), Ok(Command::Remote(RemoteCommand::ComeToMe)));
    }

    #[test]
    fn test_decode_every_button() {
        for code in 0..=10 {
            let button = RemoteCommand::try_from(code).unwrap();
            assert_eq!(button as i32, code);
            let decoded = VehicleCommand::remote(button).decode();
            assert_eq!(decoded, Ok(Command::Remote(button)));
        }
    }

    #[test]
    fn test_decode_unknown_button() {
        let cmd = VehicleCommand {
            command: VEHICLE_CMD_NAV_REMOTE_CMD,
            param1: 42.0,
            ..Default::default()
        };
        assert_eq!(cmd.decode(), Err(CommandError::UnknownRemoteCommand(42)));
    }

    #[test]
    fn test_decode_set_mode() {
        let cmd = VehicleCommand::set_mode(CUSTOM_SUB_MODE_AUTO_RTL);
        assert_eq!(
            cmd.decode(),
            Ok(Command::SetMode {
                custom_sub_mode: CUSTOM_SUB_MODE_AUTO_RTL
            })
        );
    }

    #[test]
    fn test_decode_unknown_command() {
        let cmd = VehicleCommand {
            command: 16, // MAV_CMD_NAV_WAYPOINT
            ..Default::default()
        };
        assert_eq!(cmd.decode(), Err(CommandError::UnknownCommand(16)));
    }

    #[test]
    fn test_remote_command_label() {
        assert_eq!(RemoteCommand::LandDisarm.label(), "land-disarm");
        assert_eq!(RemoteCommand::LookDown.label(), "look-down");
    }
}
