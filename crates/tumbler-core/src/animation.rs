//! Fixed-duration eased animation primitives.

use crate::Color;

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in and out (slow start, fast middle, slow end)
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Trait for types that can be interpolated.
pub trait Interpolate: Copy {
    /// Interpolate between two values at normalized time `t`.
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        if t >= 1.0 {
            *to
        } else {
            from + (to - from) * t
        }
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        from.lerp(to, t)
    }
}

/// A fixed-duration eased animation between two values.
///
/// Once elapsed time reaches the duration, `value()` returns the end value
/// verbatim: a finished tween has no residual float drift.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Interpolate> {
    /// Start value
    pub from: T,
    /// End value
    pub to: T,
    /// Total duration in seconds
    pub duration: f32,
    /// Elapsed time in seconds
    pub elapsed: f32,
    /// Easing function
    pub easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    /// Create a new tween.
    #[must_use]
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set easing function.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the elapsed clock.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        T::interpolate(&self.from, &self.to, self.easing.apply(t))
    }

    /// Value at an arbitrary elapsed time, without mutating the clock.
    #[must_use]
    pub fn value_at(&self, elapsed: f32) -> T {
        let mut probe = *self;
        probe.elapsed = elapsed.clamp(0.0, self.duration);
        probe.value()
    }

    /// Whether the tween has run its full duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
