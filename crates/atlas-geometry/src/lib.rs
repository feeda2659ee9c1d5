#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of 2D geometry primitives for map coordinate work."]
#![doc = ""]
#![doc = "This crate provides a plain 2D vector, rotations about the origin or an"]
#![doc = "arbitrary axis point, and the linear range rescaling used by grid addressing."]

use core::f64::consts::PI;
use core::fmt;
use core::ops::{Add, Sub};
use libm::{cos, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod range;
pub use range::{rescale, unrescale};

/// A 2‑D vector `(x, y)` in whatever unit the caller works in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// Construct a new vector.
    ///
    /// # Arguments
    ///
    /// * `x`: Horizontal component.
    /// * `y`: Vertical component.
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Rotates this vector counter‑clockwise about the origin.
    ///
    /// An angle of exactly zero returns `self` untouched, so repeated
    /// zero rotations never accumulate rounding error.
    ///
    /// # Arguments
    ///
    /// * `degrees`: Rotation angle in degrees.
    ///
    /// # Returns
    ///
    /// The rotated vector.
    pub fn rotate(self, degrees: f64) -> Self {
        if degrees == 0.0 {
            return self;
        }

        let (sin_a, cos_a) = sin_cos_degrees(degrees);
        Vec2 {
            x: self.x * cos_a - self.y * sin_a,
            y: self.x * sin_a + self.y * cos_a,
        }
    }

    /// Rotates this vector counter‑clockwise about `axis`.
    ///
    /// The vector is translated so that `axis` sits at the origin, rotated,
    /// then translated back. Unlike [`Vec2::rotate`] there is no zero-angle
    /// shortcut.
    ///
    /// # Arguments
    ///
    /// * `axis`: The point to rotate about.
    /// * `degrees`: Rotation angle in degrees.
    ///
    /// # Returns
    ///
    /// The rotated vector.
    pub fn rotate_about(self, axis: Vec2, degrees: f64) -> Self {
        let (sin_a, cos_a) = sin_cos_degrees(degrees);
        let local = self - axis;

        Vec2 {
            x: local.x * cos_a - local.y * sin_a,
            y: local.x * sin_a + local.y * cos_a,
        } + axis
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Rotates `vec` about the origin by `degrees`.
///
/// Free-function form of [`Vec2::rotate`]; a zero angle is an exact identity.
pub fn rotate_around_origin(vec: Vec2, degrees: f64) -> Vec2 {
    vec.rotate(degrees)
}

/// Rotates `vec` about `axis` by `degrees`.
///
/// Free-function form of [`Vec2::rotate_about`].
pub fn rotate_around_point(vec: Vec2, axis: Vec2, degrees: f64) -> Vec2 {
    vec.rotate_about(axis, degrees)
}

fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let radians = degrees * (PI / 180.0);
    (sin(radians), cos(radians))
}
