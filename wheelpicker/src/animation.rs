use std::time::{Duration, Instant};

/// Easing function for the settle animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Eases a visual offset from a starting displacement back to rest (zero).
///
/// Logically the settle is a sequence of discrete frame reads, not a
/// blocking wait: each frame samples [`offset_at`] with the current time.
/// A gesture that interrupts the settle reads the same interpolated value
/// and carries on from it, so cancellation never jumps.
///
/// [`offset_at`]: SettleAnimation::offset_at
#[derive(Debug, Clone, Copy)]
pub struct SettleAnimation {
    from: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl SettleAnimation {
    pub fn new(from: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            start,
            duration,
            easing,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated offset at `now`, in the same row units as `from`.
    pub fn offset_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from * (1.0 - eased)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
