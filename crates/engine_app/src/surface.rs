//! Window surface abstraction.
//!
//! Opening a real window and GL context is outside this workspace. The frame
//! loop only needs a surface that reports when it should close, yields input
//! events, and swaps buffers; [`HeadlessSurface`] provides that without a
//! display.

use std::collections::VecDeque;

use engine_system::InputEvent;

/// What the frame loop needs from a window.
pub trait Surface {
    fn should_close(&self) -> bool;

    /// Collect the input events that arrived since the last poll.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn swap_buffers(&mut self);
}

/// A surface with no display behind it.
#[derive(Debug)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    title: String,
    /// Close after this many presented frames (0 = never).
    close_after: u64,
    presented: u64,
    pending: VecDeque<InputEvent>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            close_after: 0,
            presented: 0,
            pending: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn close_after(mut self, frames: u64) -> Self {
        self.close_after = frames;
        self
    }

    /// Queue an event to be returned by the next [`Surface::poll_events`].
    pub fn inject(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Surface for HeadlessSurface {
    fn should_close(&self) -> bool {
        self.close_after > 0 && self.presented >= self.close_after
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }

    fn swap_buffers(&mut self) {
        self.presented += 1;
    }
}
