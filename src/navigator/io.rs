//! Navigator collaborators
//!
//! Everything the navigator reads or emits goes through one of these
//! traits. Each is implemented for [`Mailbox`], and the inbound ones also for
//! a reference to any [`SharedState`] wrapping a mailbox, so the same mode
//! code runs against host mocks and embassy-shared slots.

use follow_nav_core::command::VehicleCommand;
use follow_nav_core::commander::CommanderRequest;
use follow_nav_core::navigation::SetpointTriplet;
use follow_nav_core::telemetry::TelemetrySnapshot;

use crate::core::mailbox::Mailbox;
use crate::core::traits::SharedState;

/// Source of per-tick telemetry snapshots
pub trait TelemetryProvider {
    /// New snapshot since the last poll, if any
    fn poll(&mut self) -> Option<TelemetrySnapshot>;
}

/// Non-blocking source of operator commands
pub trait CommandSource {
    fn try_take(&mut self) -> Option<VehicleCommand>;
}

/// Outbound channel to the commander
pub trait CommanderChannel {
    fn request(&mut self, request: CommanderRequest);
}

/// Consumer of the published setpoint triplet
pub trait SetpointPublisher {
    fn publish(&mut self, triplet: &SetpointTriplet);
}

/// Consumer of mission results
pub trait MissionResultPublisher {
    fn publish(&mut self, result: &MissionResult);
}

/// Mission result reported on mode activation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MissionResult {
    /// Keep the vehicle in failsafe once the current action finishes
    pub stay_in_failsafe: bool,
}

/// Collaborators handed to a mode for one tick
pub struct NavigatorIo<'a> {
    pub telemetry: &'a mut dyn TelemetryProvider,
    pub commands: &'a mut dyn CommandSource,
    pub commander: &'a mut dyn CommanderChannel,
    pub setpoints: &'a mut dyn SetpointPublisher,
    pub mission_result: &'a mut dyn MissionResultPublisher,
}

impl TelemetryProvider for Mailbox<TelemetrySnapshot> {
    fn poll(&mut self) -> Option<TelemetrySnapshot> {
        self.take()
    }
}

impl CommandSource for Mailbox<VehicleCommand> {
    fn try_take(&mut self) -> Option<VehicleCommand> {
        self.take()
    }
}

impl CommanderChannel for Mailbox<CommanderRequest> {
    fn request(&mut self, request: CommanderRequest) {
        if self.post(request).is_some() {
            crate::log_debug!("Commander request replaced before delivery");
        }
    }
}

impl SetpointPublisher for Mailbox<SetpointTriplet> {
    fn publish(&mut self, triplet: &SetpointTriplet) {
        self.post(*triplet);
    }
}

impl MissionResultPublisher for Mailbox<MissionResult> {
    fn publish(&mut self, result: &MissionResult) {
        self.post(*result);
    }
}

impl<S> TelemetryProvider for &S
where
    S: SharedState<Mailbox<TelemetrySnapshot>>,
{
    fn poll(&mut self) -> Option<TelemetrySnapshot> {
        (**self).with_mut(|mailbox| mailbox.poll())
    }
}

impl<S> CommandSource for &S
where
    S: SharedState<Mailbox<VehicleCommand>>,
{
    fn try_take(&mut self) -> Option<VehicleCommand> {
        (**self).with_mut(|mailbox| mailbox.try_take())
    }
}

impl<S> CommanderChannel for &S
where
    S: SharedState<Mailbox<CommanderRequest>>,
{
    fn request(&mut self, request: CommanderRequest) {
        (**self).with_mut(|mailbox| mailbox.request(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockState;
    use follow_nav_core::command::RemoteCommand;
    use follow_nav_core::commander::MainState;

    #[test]
    fn test_command_mailbox_take_once() {
        let mut commands = Mailbox::<VehicleCommand>::new();
        commands.post(VehicleCommand::remote(RemoteCommand::Up));

        let source: &mut dyn CommandSource = &mut commands;
        assert_eq!(
            source.try_take(),
            Some(VehicleCommand::remote(RemoteCommand::Up))
        );
        assert_eq!(source.try_take(), None);
    }

    #[test]
    fn test_commander_mailbox_last_write_wins() {
        let mut commander = Mailbox::<CommanderRequest>::new();
        commander.request(CommanderRequest::MainStateChange(MainState::AutoRtl));
        commander.request(CommanderRequest::Disarm);
        assert_eq!(commander.take(), Some(CommanderRequest::Disarm));
    }

    #[test]
    fn test_shared_command_source() {
        let shared = MockState::new(Mailbox::<VehicleCommand>::new());
        shared.with_mut(|mailbox| mailbox.post(VehicleCommand::remote(RemoteCommand::Takeoff)));

        let mut source = &shared;
        assert_eq!(
            source.try_take(),
            Some(VehicleCommand::remote(RemoteCommand::Takeoff))
        );
        assert!(!shared.with(|mailbox| mailbox.is_pending()));
    }

    #[test]
    fn test_shared_commander_channel() {
        let shared = MockState::new(Mailbox::<CommanderRequest>::new());
        let mut channel = &shared;
        channel.request(CommanderRequest::Disarm);
        assert_eq!(
            shared.with(|mailbox| mailbox.peek().copied()),
            Some(CommanderRequest::Disarm)
        );
    }

    #[test]
    fn test_telemetry_mailbox_poll_consumes() {
        let mut telemetry = Mailbox::<TelemetrySnapshot>::new();
        telemetry.post(TelemetrySnapshot::default());
        assert!(telemetry.poll().is_some());
        assert!(telemetry.poll().is_none());
    }
}
