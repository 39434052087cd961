//! Animation system for the carousel
//!
//! This crate provides the eased scalar animation used for hover and spin
//! feedback, the easing curves it can run with, and the geometric decay
//! spec that drives drag momentum.

pub mod animation;
pub mod decay_spec;

// Re-export animation system
pub use animation::*;
pub use decay_spec::{DecayStep, FloatDecayAnimationSpec, GeometricDecaySpec};

pub mod prelude {
    pub use crate::animation::{Direction, EasedAnimation, Easing, EasingFn, TweenSpec};
    pub use crate::decay_spec::{FloatDecayAnimationSpec, GeometricDecaySpec};
}
