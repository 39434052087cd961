//! Pure math/data for placing carousel panels in 3D
//!
//! This crate contains vector, rotation and transform primitives, the
//! anchor-rotation placement helper, and color definitions used throughout
//! the carousel engine.

mod anchor;
mod color;
mod geometry;
mod rotation;
mod transform;

pub use anchor::*;
pub use color::*;
pub use geometry::*;
pub use rotation::*;
pub use transform::*;

pub mod prelude {
    pub use crate::anchor::{rotate_around_anchor, AnchorSpace};
    pub use crate::color::Color;
    pub use crate::geometry::{Axis3, Point, Size, Vec3};
    pub use crate::rotation::{Euler, Quaternion};
    pub use crate::transform::Transform3D;
}
