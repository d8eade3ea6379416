//! Fade animation for the scrollbar overlay.
//!
//! [`ValueAnimator`] interpolates a single value over time and reports how it
//! ended through [`AnimationOutcome`]. [`FadeAnimator`] wraps it with the
//! Out / FadingIn / In / FadingOut phase machine that drives opacity.
//!
//! Time is always passed in by the caller so the host's clock (or a test
//! clock) is the only source of truth.

use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

/// Interpolation curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Slow start and end, fast middle (cosine curve)
    #[default]
    AccelerateDecelerate,
    EaseOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationOutcome {
    /// Ran to its end; carries the final value
    Completed(f32),
    /// Stopped early; a new directive always follows
    Cancelled,
}

/// Interpolates one value from `from` to `to` over a duration.
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    easing: Easing,
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Option<Instant>,
    value: f32,
}

impl ValueAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            from: 0.0,
            to: 0.0,
            duration: Duration::ZERO,
            started_at: None,
            value: 0.0,
        }
    }

    /// Current interpolated value. Kept after cancellation.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Target of the current (or last) run.
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start a new run. Any run in progress is replaced without an outcome,
    /// so callers cancel first when they need one.
    pub fn start(&mut self, from: f32, to: f32, duration: Duration, now: Instant) {
        self.from = from;
        self.to = to;
        self.duration = duration;
        self.value = from;
        self.started_at = Some(now);
    }

    /// Stop the current run, keeping the value where it is.
    pub fn cancel(&mut self) -> Option<AnimationOutcome> {
        self.started_at.take().map(|_| AnimationOutcome::Cancelled)
    }

    /// Stop the current run and jump to `value`.
    pub fn reset(&mut self, value: f32) -> Option<AnimationOutcome> {
        let cancelled = self.cancel();
        self.value = value;
        cancelled
    }

    /// Advance to `now`. Returns `Completed` on the tick that reaches the end.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationOutcome> {
        let started = self.started_at?;
        let elapsed = now.saturating_duration_since(started);
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if fraction >= 1.0 {
            self.value = self.to;
            self.started_at = None;
            return Some(AnimationOutcome::Completed(self.to));
        }

        self.value = self.from + (self.to - self.from) * self.easing.apply(fraction);
        None
    }
}

/// Fade phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    /// Fully transparent, nothing drawn
    #[default]
    Out,
    FadingIn,
    /// Fully opaque
    In,
    FadingOut,
}

/// Phase the fade settled in after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeSettled {
    Out,
    In,
}

/// Phase machine driving the overlay opacity.
#[derive(Debug, Clone)]
pub struct FadeAnimator {
    phase: AnimationPhase,
    animator: ValueAnimator,
    show_duration: Duration,
}

impl FadeAnimator {
    pub fn new(easing: Easing, show_duration: Duration) -> Self {
        Self {
            phase: AnimationPhase::Out,
            animator: ValueAnimator::new(easing),
            show_duration,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Raw interpolated value of the underlying animator.
    pub fn value(&self) -> f32 {
        self.animator.value()
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    pub fn animator(&self) -> &ValueAnimator {
        &self.animator
    }

    /// Opacity in `[0, 1]`, derived from phase and interpolated value only.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            AnimationPhase::Out => 0.0,
            _ => self.animator.value().clamp(0.0, 1.0),
        }
    }

    /// Paint alpha for the current opacity.
    pub fn alpha(&self, max_alpha: u8) -> u8 {
        (f32::from(max_alpha) * self.opacity()) as u8
    }

    /// Fade towards fully visible.
    ///
    /// Restarts from the current value when fading out so there is no jump.
    /// Returns the outcome of the run it cancelled, if any.
    pub fn show(&mut self, now: Instant) -> Option<AnimationOutcome> {
        match self.phase {
            AnimationPhase::FadingOut => {
                let cancelled = self.animator.cancel();
                self.start_towards(1.0, self.show_duration, now);
                self.phase = AnimationPhase::FadingIn;
                cancelled
            }
            AnimationPhase::Out => {
                self.start_towards(1.0, self.show_duration, now);
                self.phase = AnimationPhase::FadingIn;
                None
            }
            AnimationPhase::FadingIn | AnimationPhase::In => None,
        }
    }

    /// Fade towards transparent over `duration`.
    pub fn hide(&mut self, duration: Duration, now: Instant) -> Option<AnimationOutcome> {
        match self.phase {
            AnimationPhase::FadingIn => {
                let cancelled = self.animator.cancel();
                self.start_towards(0.0, duration, now);
                self.phase = AnimationPhase::FadingOut;
                cancelled
            }
            AnimationPhase::In => {
                self.start_towards(0.0, duration, now);
                self.phase = AnimationPhase::FadingOut;
                None
            }
            AnimationPhase::Out | AnimationPhase::FadingOut => None,
        }
    }

    pub fn tick(&mut self, now: Instant) -> Option<AnimationOutcome> {
        self.animator.tick(now)
    }

    /// Resolve the phase after a run ended. Cancelled runs leave it untouched.
    pub fn settle(&mut self, outcome: AnimationOutcome) -> Option<FadeSettled> {
        match outcome {
            AnimationOutcome::Cancelled => None,
            AnimationOutcome::Completed(value) if value <= 0.0 => {
                self.phase = AnimationPhase::Out;
                Some(FadeSettled::Out)
            }
            AnimationOutcome::Completed(_) => {
                self.phase = AnimationPhase::In;
                Some(FadeSettled::In)
            }
        }
    }

    /// Jump straight to `Out` at value 0, dropping any run in progress.
    pub fn snap_out(&mut self) -> Option<AnimationOutcome> {
        self.phase = AnimationPhase::Out;
        self.animator.reset(0.0)
    }

    fn start_towards(&mut self, target: f32, duration: Duration, now: Instant) {
        let from = self.animator.value();
        self.animator.start(from, target, duration, now);
    }
}
