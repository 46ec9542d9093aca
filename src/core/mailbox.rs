//! Single-slot mailbox
//!
//! Topics between the navigator and its neighbours carry only the latest
//! value: a new post replaces whatever the reader has not picked up yet.

/// One-slot, last-write-wins message holder
#[derive(Debug, Clone, PartialEq)]
pub struct Mailbox<T> {
    slot: Option<T>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    /// Empty mailbox
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Post a value, returning the undelivered one it replaced
    pub fn post(&mut self, value: T) -> Option<T> {
        self.slot.replace(value)
    }

    /// Take the pending value, leaving the mailbox empty
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Look at the pending value without consuming it
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}
