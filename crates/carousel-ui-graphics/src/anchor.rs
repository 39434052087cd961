//! Rotation of an object about an arbitrary anchor point.
//!
//! The position orbits the anchor and the object's own orientation turns by
//! the same amount, so a panel placed this way keeps facing away from the
//! anchor instead of just sliding around it.

use crate::geometry::{Axis3, Vec3};
use crate::transform::Transform3D;

/// Coordinate frame the anchor is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AnchorSpace {
    /// Anchor shares the object's own (parent-relative) frame.
    #[default]
    Local,
    /// Anchor lives in the frame described by `parent`'s world transform.
    World(Transform3D),
}

/// Rotates `transform` by `angle_degrees` about `axis` around `anchor`.
///
/// The position is offset by `+anchor`, rotated, offset back by `-anchor`,
/// and the orientation is then rotated by the same axis-angle delta.
pub fn rotate_around_anchor(
    transform: &mut Transform3D,
    axis: Axis3,
    angle_degrees: f32,
    anchor: Vec3,
    space: AnchorSpace,
) {
    let radians = angle_degrees.to_radians();
    let unit = axis.unit();

    let mut position = match space {
        AnchorSpace::Local => transform.position,
        AnchorSpace::World(parent) => parent.local_to_world(transform.position),
    };
    position += anchor;
    position = apply_axis_angle(position, unit, radians);
    position -= anchor;
    transform.position = match space {
        AnchorSpace::Local => position,
        AnchorSpace::World(parent) => parent.world_to_local(position),
    };

    transform.rotate_on_axis(unit, radians);
}

/// Rotates a vector by `radians` about a unit `axis`.
pub fn apply_axis_angle(v: Vec3, axis: Vec3, radians: f32) -> Vec3 {
    crate::rotation::Quaternion::from_axis_angle(axis, radians).rotate(v)
}
