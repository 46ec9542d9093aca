//! Command decoding error types

/// Errors from decoding a vehicle command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Command ID is not handled by the navigator
    UnknownCommand(u16),
    /// Remote button code outside the known set
    UnknownRemoteCommand(i32),
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::UnknownCommand(id) => write!(f, "unknown command {}", id),
            CommandError::UnknownRemoteCommand(code) => {
                write!(f, "unknown remote command {}", code)
            }
        }
    }
}
