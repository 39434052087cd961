//! Eased scalar animation
//!
//! An [`EasedAnimation`] moves one `f32` between two fixed endpoints over
//! wall-clock time. It does not schedule itself: its owner calls
//! [`EasedAnimation::update`] once per frame and receives the new value
//! through a callback.
//!
//! The easing function is evaluated from the *current* value towards the
//! target on every update, so a leg that is reversed half way continues from
//! where it is rather than jumping back to an endpoint.

use std::fmt;
use std::rc::Rc;

use carousel_core::{Clock, SystemClock};

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MILLIS: f32 = 500.0;

/// Easing signature: `(elapsed, base, delta, duration) -> value`.
pub type EasingFn = fn(t: f32, b: f32, c: f32, d: f32) -> f32;

/// Exponential ease-in-out: slow start, fast middle, slow end.
pub fn ease_in_out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return (c / 2.0) * 2f32.powf(10.0 * (t - 1.0)) + b;
    }
    let t = t - 1.0;
    (c / 2.0) * (-(2f32.powf(-10.0 * t)) + 2.0) + b
}

/// Exponential ease-out normalised so that `t == d` lands exactly on `b + c`.
pub fn ease_out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    c * (1.0 - 2f32.powf(-10.0 * t / d)) * (1024.0 / 1023.0) + b
}

pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    c * (t / d) + b
}

/// Easing curve used by an [`EasedAnimation`].
#[derive(Clone, Copy)]
pub enum Easing {
    /// Exponential ease-in-out, the default.
    EaseInOutExpo,
    /// Normalised exponential ease-out.
    EaseOutExpo,
    /// Constant rate.
    Linear,
    /// Caller-supplied curve.
    Custom(EasingFn),
}

impl Easing {
    pub fn evaluate(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Easing::EaseInOutExpo => ease_in_out_expo(t, b, c, d),
            Easing::EaseOutExpo => ease_out_expo(t, b, c, d),
            Easing::Linear => linear(t, b, c, d),
            Easing::Custom(f) => f(t, b, c, d),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOutExpo
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::EaseInOutExpo => f.write_str("EaseInOutExpo"),
            Easing::EaseOutExpo => f.write_str("EaseOutExpo"),
            Easing::Linear => f.write_str("Linear"),
            Easing::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Tween configuration combining duration and easing.
#[derive(Debug, Clone, Copy)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: f32,
    /// Easing function to apply.
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_millis: f32, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn with_duration(mut self, duration_millis: f32) -> Self {
        self.duration_millis = duration_millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MILLIS, Easing::EaseInOutExpo)
    }
}

/// Which endpoint an animation is heading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards `end_value`.
    #[default]
    Forward,
    /// Towards `start_value`.
    Backward,
}

impl Direction {
    fn origin_and_target(self, start: f32, end: f32) -> (f32, f32) {
        match self {
            Direction::Forward => (start, end),
            Direction::Backward => (end, start),
        }
    }
}

/// Scalar animation between two fixed endpoints.
pub struct EasedAnimation {
    start_value: f32,
    end_value: f32,
    current_value: f32,
    direction: Direction,
    spec: TweenSpec,
    running: bool,
    start_time: f64,
    clock: Rc<dyn Clock>,
}

impl EasedAnimation {
    /// Animation with the default 500 ms exponential ease-in-out, on the system clock.
    pub fn new(start_value: f32, end_value: f32) -> Self {
        Self::with_clock(
            start_value,
            end_value,
            TweenSpec::default(),
            Rc::new(SystemClock::new()),
        )
    }

    pub fn with_clock(
        start_value: f32,
        end_value: f32,
        spec: TweenSpec,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let start_time = clock.now_millis() + spec.duration_millis as f64;
        Self {
            start_value,
            end_value,
            current_value: start_value,
            direction: Direction::Forward,
            spec,
            running: false,
            start_time,
            clock,
        }
    }

    /// Advances the animation and hands the new value to `apply`.
    ///
    /// Once the elapsed time exceeds the duration the animation stops without
    /// applying the final evaluation, so the value stays where the previous
    /// update left it.
    pub fn update(&mut self, apply: impl FnOnce(f32)) -> &mut Self {
        if !self.running {
            return self;
        }
        let elapsed = self.clock.elapsed_millis(self.start_time) as f32;
        let (_, target) = self
            .direction
            .origin_and_target(self.start_value, self.end_value);
        let delta = target - self.current_value;
        let value = self.spec.easing.evaluate(
            elapsed,
            self.current_value,
            delta,
            self.spec.duration_millis,
        );
        if elapsed > self.spec.duration_millis {
            self.running = false;
            log::trace!(
                "{:?} leg {} -> {} finished at {}",
                self.direction,
                self.start_value,
                self.end_value,
                self.current_value
            );
            return self;
        }
        self.current_value = value;
        apply(self.current_value);
        self
    }

    pub fn forwards(&mut self) -> &mut Self {
        self.direction = Direction::Forward;
        self
    }

    pub fn backwards(&mut self) -> &mut Self {
        self.direction = Direction::Backward;
        self
    }

    /// Restarts the clock for the current leg.
    ///
    /// An idle animation also jumps to the origin endpoint of its direction;
    /// a running one keeps its current value.
    pub fn start(&mut self) -> &mut Self {
        self.start_time = self.clock.now_millis();
        if self.running {
            return self;
        }
        self.running = true;
        let (origin, _) = self
            .direction
            .origin_and_target(self.start_value, self.end_value);
        self.current_value = origin;
        self
    }

    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    pub fn end_value(&self) -> f32 {
        self.end_value
    }

    pub fn spec(&self) -> TweenSpec {
        self.spec
    }
}

impl fmt::Debug for EasedAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasedAnimation")
            .field("start_value", &self.start_value)
            .field("end_value", &self.end_value)
            .field("current_value", &self.current_value)
            .field("direction", &self.direction)
            .field("spec", &self.spec)
            .field("running", &self.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
