//! Navigator
//!
//! Collaborator traits, the mode lifecycle driver and the loiter mode.

pub mod io;
pub mod loiter;
pub mod mode;

pub use io::{
    CommandSource, CommanderChannel, MissionResult, MissionResultPublisher, NavigatorIo,
    SetpointPublisher, TelemetryProvider,
};
pub use loiter::LoiterMode;
pub use mode::{ModeRunner, NavigatorMode};
