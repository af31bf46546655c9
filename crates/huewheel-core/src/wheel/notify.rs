//! Color-change fan-out.
//!
//! The wheel keeps only weak handles to its listeners: dropping the last
//! `Arc` of a listener unsubscribes it implicitly, and the registry prunes
//! the dead handle on the next notification.
//!
//! Delivery is synchronous on the mutating thread, so listeners need not be
//! `Send` or `Sync`. A listener may capture `Rc<RefCell<_>>` host state.

use std::sync::Weak;

use parking_lot::Mutex;
use serde::Serialize;

use crate::color::{Argb, Hsba};

/// Fired after every change to the selected color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorChangeEvent {
    /// The new color, packed.
    pub color: Argb,
    /// The new color in HSB form.
    pub hsba: Hsba,
}

/// Receives [`ColorChangeEvent`]s.
///
/// Called synchronously on the thread that mutated the wheel.
pub trait ColorChangeListener {
    fn color_changed(&self, event: &ColorChangeEvent);
}

impl<F> ColorChangeListener for F
where
    F: Fn(&ColorChangeEvent),
{
    fn color_changed(&self, event: &ColorChangeEvent) {
        self(event)
    }
}

/// Type-erased subscriber handle, as stored by the registry.
pub type ListenerHandle = Weak<dyn ColorChangeListener>;

/// Whether two weak handles point at the same listener, ignoring vtables.
fn same_listener<L: ?Sized>(stored: &ListenerHandle, other: &Weak<L>) -> bool {
    std::ptr::addr_eq(stored.as_ptr(), other.as_ptr())
}

/// Insertion-ordered set of listeners.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    listeners: Vec<ListenerHandle>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener at the end of the notification order.
    ///
    /// Returns `false` (and changes nothing) if it is already subscribed or
    /// has already been dropped.
    pub fn subscribe<L: ColorChangeListener + 'static>(&mut self, listener: Weak<L>) -> bool {
        if listener.strong_count() == 0 || self.contains(&listener) {
            return false;
        }
        let handle: ListenerHandle = listener;
        self.listeners.push(handle);
        tracing::trace!("color listener subscribed ({} total)", self.listeners.len());
        true
    }

    /// Remove a listener. Unknown handles are ignored.
    pub fn unsubscribe<L: ColorChangeListener + 'static>(&mut self, listener: &Weak<L>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same_listener(l, listener));
        let removed = self.listeners.len() != before;
        if removed {
            tracing::trace!("color listener unsubscribed ({} left)", self.listeners.len());
        }
        removed
    }

    pub fn contains<L: ?Sized>(&self, listener: &Weak<L>) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    /// Number of registered handles, including any not yet pruned.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every live listener in subscription order.
    pub fn notify(&mut self, event: &ColorChangeEvent) {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.strong_count() > 0);
        if self.listeners.len() != before {
            tracing::trace!("pruned {} dropped color listeners", before - self.listeners.len());
        }

        tracing::trace!("notifying {} color listeners: {}", self.listeners.len(), event.color);
        for listener in &self.listeners {
            if let Some(listener) = listener.upgrade() {
                listener.color_changed(event);
            }
        }
    }
}

/// A listener that remembers the most recent event, for hosts that poll.
///
/// `Send + Sync`: the host may hand a clone of its `Arc` to another thread
/// (a render loop, say) and poll from there.
#[derive(Debug, Default)]
pub struct LatestColor {
    inner: Mutex<Latest>,
}

#[derive(Debug, Default)]
struct Latest {
    event: Option<ColorChangeEvent>,
    count: usize,
}

impl LatestColor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last event received, if any.
    pub fn latest(&self) -> Option<ColorChangeEvent> {
        self.inner.lock().event
    }

    /// The last event received, clearing it.
    pub fn take(&self) -> Option<ColorChangeEvent> {
        self.inner.lock().event.take()
    }

    /// Total events received.
    pub fn count(&self) -> usize {
        self.inner.lock().count
    }
}

impl ColorChangeListener for LatestColor {
    fn color_changed(&self, event: &ColorChangeEvent) {
        let mut inner = self.inner.lock();
        inner.event = Some(*event);
        inner.count += 1;
    }
}
