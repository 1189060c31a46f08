//! Per-frame execution context provided to systems.

/// Frame metadata handed to every [`System::run`](crate::System::run) call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemContext {
    /// The current frame number, starting at 1.
    pub frame: u64,
    /// Time step for this frame, in seconds.
    pub dt: f32,
}

impl SystemContext {
    /// Create a new context for a frame.
    #[must_use]
    pub fn new(frame: u64, dt: f32) -> Self {
        Self { frame, dt }
    }

    /// Context for a fixed rate of `hz` frames per second.
    #[must_use]
    pub fn at_rate(frame: u64, hz: f32) -> Self {
        Self::new(frame, 1.0 / hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = SystemContext::new(1, 0.016);
        assert_eq!(ctx.frame, 1);
        assert!((ctx.dt - 0.016).abs() < f32::EPSILON);
    }

    #[test]
    fn test_at_rate() {
        let ctx = SystemContext::at_rate(3, 60.0);
        assert_eq!(ctx.frame, 3);
        assert!((ctx.dt - 1.0 / 60.0).abs() < f32::EPSILON);
    }
}
