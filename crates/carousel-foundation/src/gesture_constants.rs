//! Shared gesture constants for drag and wheel handling.
//!
//! Offsets and velocities are in host input units (page pixels) per frame,
//! not per second: the decay runs once per frame callback.

/// Fraction of the velocity kept after each decay tick.
pub const DECAY_FRICTION: f32 = 0.95;

/// Factor applied to the velocity when it is added to the offset.
pub const DECAY_VELOCITY_MULTIPLIER: f32 = 2.0;

/// Velocity at or below which a decaying axis comes to rest.
pub const DECAY_STOP_THRESHOLD: f32 = 0.5;

/// Ring rotation, in radians, applied per wheel notch.
pub const WHEEL_ROTATION_STEP: f32 = 0.01;
