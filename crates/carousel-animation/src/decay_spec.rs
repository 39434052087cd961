//! Decay animation specification for drag momentum.
//!
//! A decay animation has no fixed target: it starts from a velocity and
//! loses a fixed fraction of it every frame until it falls under a stop
//! threshold. Offsets and velocities are in input units per frame.

/// Outcome of one decay tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayStep {
    /// Amount to add to the offset this frame.
    pub advance: f32,
    /// Velocity carried into the next frame.
    pub velocity: f32,
    /// Whether another tick should be scheduled.
    pub should_continue: bool,
}

/// Trait for decay animation specifications.
pub trait FloatDecayAnimationSpec {
    /// Velocity at or below which the decay stops.
    fn abs_velocity_threshold(&self) -> f32;

    /// Computes one frame of decay from the current velocity.
    fn step(&self, velocity: f32) -> DecayStep;

    /// Number of ticks a decay started at `initial_velocity` runs for.
    ///
    /// The first tick always runs, so this is at least one.
    fn tick_count(&self, initial_velocity: f32) -> u32 {
        let mut velocity = initial_velocity;
        let mut ticks = 0;
        loop {
            ticks += 1;
            let step = self.step(velocity);
            velocity = step.velocity;
            if !step.should_continue {
                return ticks;
            }
        }
    }

    /// Total offset travelled by a decay started at `initial_velocity`.
    fn total_distance(&self, initial_velocity: f32) -> f32 {
        let mut velocity = initial_velocity;
        let mut distance = 0.0;
        loop {
            let step = self.step(velocity);
            distance += step.advance;
            velocity = step.velocity;
            if !step.should_continue {
                return distance;
            }
        }
    }
}

/// Multiplicative per-frame decay.
///
/// Each tick advances the offset by `velocity * velocity_multiplier`, then
/// scales the velocity by `friction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricDecaySpec {
    pub friction: f32,
    pub velocity_multiplier: f32,
    pub stop_threshold: f32,
}

impl GeometricDecaySpec {
    pub const DEFAULT_FRICTION: f32 = 0.95;
    pub const DEFAULT_VELOCITY_MULTIPLIER: f32 = 2.0;
    pub const DEFAULT_STOP_THRESHOLD: f32 = 0.5;

    pub fn new(friction: f32, velocity_multiplier: f32, stop_threshold: f32) -> Self {
        Self {
            friction,
            velocity_multiplier,
            stop_threshold,
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_stop_threshold(mut self, stop_threshold: f32) -> Self {
        self.stop_threshold = stop_threshold;
        self
    }

    /// Closed-form tick estimate `ceil(ln(threshold / v0) / ln(friction))`.
    ///
    /// Returns `None` when the decay would never stop (friction not in
    /// `(0, 1)`) and `Some(1)` when the velocity is already at rest.
    pub fn estimated_ticks(&self, initial_velocity: f32) -> Option<u32> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return None;
        }
        let speed = initial_velocity.abs() as f64;
        let threshold = self.stop_threshold as f64;
        if speed <= threshold || threshold <= 0.0 {
            return if threshold <= 0.0 && speed > 0.0 {
                None
            } else {
                Some(1)
            };
        }
        let ticks = ((threshold / speed).ln() / (self.friction as f64).ln()).ceil();
        Some(ticks as u32)
    }
}

impl Default for GeometricDecaySpec {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_FRICTION,
            Self::DEFAULT_VELOCITY_MULTIPLIER,
            Self::DEFAULT_STOP_THRESHOLD,
        )
    }
}

impl FloatDecayAnimationSpec for GeometricDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        self.stop_threshold
    }

    fn step(&self, velocity: f32) -> DecayStep {
        let advance = velocity * self.velocity_multiplier;
        let velocity = velocity * self.friction;
        DecayStep {
            advance,
            velocity,
            should_continue: velocity.abs() > self.stop_threshold,
        }
    }
}
