//! Key press and release events.
//!
//! A window surface produces [`InputEvent`]s; the frame loop buffers them in
//! an [`InputQueue`] and dispatches them, in arrival order, to an
//! [`EventHandler`] at the start of each frame.

use std::collections::{HashSet, VecDeque};

use tracing::info;

/// A single key transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputEvent {
    /// Key identifier as reported by the window layer (e.g. `"W"`, `"Escape"`).
    pub key: String,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}

impl InputEvent {
    #[must_use]
    pub fn new(key: impl Into<String>, pressed: bool) -> Self {
        Self {
            key: key.into(),
            pressed,
        }
    }

    #[must_use]
    pub fn press(key: impl Into<String>) -> Self {
        Self::new(key, true)
    }

    #[must_use]
    pub fn release(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }
}

/// Something that reacts to input events.
pub trait EventHandler {
    fn handle(&mut self, event: &InputEvent);
}

impl<F: FnMut(&InputEvent)> EventHandler for F {
    fn handle(&mut self, event: &InputEvent) {
        self(event);
    }
}

/// Handler that logs every transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle(&mut self, event: &InputEvent) {
        if event.pressed {
            info!(key = %event.key, "key pressed");
        } else {
            info!(key = %event.key, "key released");
        }
    }
}

/// Tracks which keys are currently held down.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl EventHandler for KeyState {
    fn handle(&mut self, event: &InputEvent) {
        if event.pressed {
            self.held.insert(event.key.clone());
        } else {
            self.held.remove(&event.key);
        }
    }
}

/// FIFO buffer of events waiting to be dispatched.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deliver every pending event to `handler` in arrival order and empty the
    /// queue. Returns the number of events delivered.
    pub fn dispatch(&mut self, handler: &mut dyn EventHandler) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.pending.pop_front() {
            handler.handle(&event);
            delivered += 1;
        }
        delivered
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}
