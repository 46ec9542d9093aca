//! Shared state between tasks
//!
//! The command link, the commander and the navigator run as separate tasks
//! on the target. Anything they exchange (usually a [`Mailbox`]) sits behind
//! [`SharedState`], so a multi-field value is always read and written as a
//! whole.
//!
//! [`Mailbox`]: crate::core::mailbox::Mailbox

/// Platform-agnostic synchronized state access.
///
/// - `EmbassyState<T>` on the target, backed by a critical-section mutex
/// - `MockState<T>` for host tests, backed by a `RefCell`
///
/// # Example
///
/// ```ignore
/// use follow_nav::core::mailbox::Mailbox;
/// use follow_nav_core::commander::CommanderRequest;
///
/// fn request_disarm<S: SharedState<Mailbox<CommanderRequest>>>(slot: &S) {
///     slot.with_mut(|mailbox| mailbox.post(CommanderRequest::Disarm));
/// }
/// ```
pub trait SharedState<T> {
    /// Access state immutably
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Critical-section protected state for embassy targets
///
/// Usable from async tasks and interrupt handlers alike. `new` is const so
/// mailboxes can live in statics.
#[cfg(feature = "embassy")]
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> EmbassyState<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

/// Single-threaded shared state for host tests
///
/// # Panics
///
/// Panics on overlapping `with_mut`/`with` borrows, which means the test
/// itself is wrong.
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}
