// Smooth scrolling for the content host

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Emitted when a scroll reaches its destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCompleted {
    pub offset: f32,
}

/// Ease-out animation between two vertical offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt` seconds. Returns the offset for this frame and whether
    /// the animation has finished.
    pub fn step(&mut self, dt: f32) -> (f32, bool) {
        self.elapsed += dt.max(0.0);
        if self.duration <= 0.0 {
            return (self.to, true);
        }

        let t = (self.elapsed / self.duration).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        if t >= 1.0 {
            (self.to, true)
        } else {
            (self.from + (self.to - self.from) * eased, false)
        }
    }
}
