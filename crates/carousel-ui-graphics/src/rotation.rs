//! Orientation types: unit quaternions and XYZ Euler angles.

use crate::geometry::Vec3;
use std::ops::Mul;

/// Unit quaternion `(x, y, z, w)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `radians` about `axis`, which must be a unit vector.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    pub fn from_euler(euler: Euler) -> Self {
        let (s1, c1) = (euler.x * 0.5).sin_cos();
        let (s2, c2) = (euler.y * 0.5).sin_cos();
        let (s3, c3) = (euler.z * 0.5).sin_cos();
        Self::new(
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn rotate(self, v: Vec3) -> Vec3 {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v) * 2.0;
        v + t * self.w + q.cross(t)
    }

    /// `true` when both quaternions describe the same orientation.
    pub fn same_orientation(self, rhs: Quaternion, epsilon: f32) -> bool {
        let dot = self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w;
        (dot.abs() - 1.0).abs() <= epsilon
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

/// Euler angles in radians, applied in XYZ order.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_quaternion(q: Quaternion) -> Self {
        let m11 = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
        let m12 = 2.0 * (q.x * q.y - q.w * q.z);
        let m13 = 2.0 * (q.x * q.z + q.w * q.y);
        let m22 = 1.0 - 2.0 * (q.x * q.x + q.z * q.z);
        let m23 = 2.0 * (q.y * q.z - q.w * q.x);
        let m32 = 2.0 * (q.y * q.z + q.w * q.x);
        let m33 = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);

        let y = m13.clamp(-1.0, 1.0).asin();
        if m13.abs() < 0.999_999_9 {
            Self::new((-m23).atan2(m33), y, (-m12).atan2(m11))
        } else {
            // Gimbal lock: fold the whole roll into x.
            Self::new(m32.atan2(m22), y, 0.0)
        }
    }

    pub fn to_quaternion(self) -> Quaternion {
        Quaternion::from_euler(self)
    }
}
