use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8Premul, Vec2},
    foundation::error::{ExplainerError, ExplainerResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t` (0 = `a`, 1 = `b`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8Premul {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// When a transition starts, how long it runs, and its curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Offset from scene entry before the transition starts.
    pub delay_ms: u64,
    /// Length of the transition; zero jumps straight to the target.
    pub duration_ms: u64,
    /// Curve applied to progress.
    #[serde(default)]
    pub ease: Ease,
}

impl Timing {
    /// Undelayed transition with the default curve.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            delay_ms: 0,
            duration_ms,
            ease: Ease::default(),
        }
    }

    /// Push the start back by `by_ms`.
    pub fn delayed(self, by_ms: u64) -> Self {
        Self {
            delay_ms: self.delay_ms.saturating_add(by_ms),
            ..self
        }
    }

    /// Replace the curve.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Elapsed time at which the transition has reached its target.
    pub fn end_ms(self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Whether the transition has completed at `elapsed_ms`.
    pub fn is_finished(self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.end_ms()
    }

    /// Eased progress in `[0, 1]` at `elapsed_ms` since scene entry.
    pub fn progress(self, elapsed_ms: u64) -> f64 {
        if elapsed_ms < self.delay_ms {
            return 0.0;
        }
        if self.is_finished(elapsed_ms) {
            return 1.0;
        }
        let t = ((elapsed_ms - self.delay_ms) as f64) / (self.duration_ms as f64);
        self.ease.apply(t)
    }
}

/// A one-shot transition between two values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T> {
    /// Value held until the delay elapses.
    pub from: T,
    /// Value held once the transition finishes.
    pub to: T,
    /// Start, length and curve.
    pub timing: Timing,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Value at `elapsed_ms` since scene entry.
    pub fn sample(&self, elapsed_ms: u64) -> T {
        if self.timing.is_finished(elapsed_ms) {
            return self.to.clone();
        }
        if elapsed_ms < self.timing.delay_ms {
            return self.from.clone();
        }
        T::lerp(&self.from, &self.to, self.timing.progress(elapsed_ms))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a free-running cycle wraps.
pub enum LoopMode {
    /// Jump back to `from` at the end of every period.
    Repeat,
    /// Travel to `to` over the first half of the period and back over the second.
    PingPong,
}

/// Free-running scalar cycle with no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cycle {
    /// Value at phase 0.
    pub from: f64,
    /// Value at the turning point.
    pub to: f64,
    /// Length of one cycle.
    pub period_ms: u64,
    /// Wrap behaviour.
    pub mode: LoopMode,
    /// Curve applied within each leg.
    #[serde(default = "linear")]
    pub ease: Ease,
}

fn linear() -> Ease {
    Ease::Linear
}

impl Cycle {
    /// Reject cycles that cannot advance.
    pub fn validate(&self) -> ExplainerResult<()> {
        if self.period_ms == 0 {
            return Err(ExplainerError::animation("loop period must be > 0"));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ExplainerError::animation("loop endpoints must be finite"));
        }
        Ok(())
    }

    /// Value at `elapsed_ms` since the cycle started.
    pub fn sample(&self, elapsed_ms: u64) -> ExplainerResult<f64> {
        if self.period_ms == 0 {
            return Err(ExplainerError::animation("loop period must be > 0"));
        }
        let phase = ((elapsed_ms % self.period_ms) as f64) / (self.period_ms as f64);
        let t = match self.mode {
            LoopMode::Repeat => phase,
            LoopMode::PingPong => {
                let p = phase * 2.0;
                if p <= 1.0 { p } else { 2.0 - p }
            }
        };
        Ok(f64::lerp(&self.from, &self.to, self.ease.apply(t)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
