//! Position, orientation and scale of a scene object.

use crate::geometry::Vec3;
use crate::rotation::{Euler, Quaternion};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: Vec3,
}

impl Transform3D {
    pub const IDENTITY: Transform3D = Transform3D {
        position: Vec3::ZERO,
        rotation: Euler::new(0.0, 0.0, 0.0),
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn quaternion(&self) -> Quaternion {
        self.rotation.to_quaternion()
    }

    /// Rotates the object's own orientation about a local axis.
    pub fn rotate_on_axis(&mut self, axis: Vec3, radians: f32) {
        let delta = Quaternion::from_axis_angle(axis.normalize(), radians);
        self.rotation = Euler::from_quaternion(self.quaternion() * delta);
    }

    /// Direction the object's local +Z axis points to in parent space.
    pub fn facing(&self) -> Vec3 {
        self.quaternion().rotate(Vec3::Z)
    }

    /// Maps a point from this transform's local space into its parent space.
    pub fn local_to_world(&self, point: Vec3) -> Vec3 {
        self.position + self.quaternion().rotate(point.component_mul(self.scale))
    }

    /// Inverse of [`Transform3D::local_to_world`].
    pub fn world_to_local(&self, point: Vec3) -> Vec3 {
        self.quaternion()
            .conjugate()
            .rotate(point - self.position)
            .component_div(self.scale)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
