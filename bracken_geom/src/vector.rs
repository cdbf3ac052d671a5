// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-dimensional vectors with cartesian and polar access.

use core::f64::consts::PI;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used by [`Vector2`]'s approximate equality.
///
/// Two vectors compare equal when each component differs by strictly less
/// than this value. The slack absorbs the rounding that polar round trips
/// and chained rotations accumulate.
pub const EPSILON: f64 = 1e-10;

/// A 2D vector with `f64` components.
///
/// A `Vector2` can be read and written in cartesian form (the public `x` and
/// `y` fields) or in polar form ([`angle`][Self::angle] and
/// [`magnitude`][Self::magnitude] with their setters). Transform methods come
/// in pure/in-place pairs: `rotate` returns a new vector, `rotate_mut`
/// modifies the receiver.
///
/// Equality is approximate: components are compared within [`EPSILON`], so
/// vectors produced by trigonometry compare equal to their exact
/// counterparts. A vector also compares against `(f64, f64)` tuples and
/// `[f64; 2]` arrays, and is indexable with `0` for x and `1` for y.
///
/// # Example
///
/// ```rust
/// use core::f64::consts::PI;
/// use bracken_geom::Vector2;
///
/// let v = Vector2::from_angle(PI / 2.0, 3.0);
/// assert_eq!(v, Vector2::new(0.0, 3.0));
/// assert_eq!(v.rotate(-PI / 2.0), [3.0, 0.0]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// A unit vector along the positive x axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };

    /// A unit vector along the positive y axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a vector from cartesian components.
    #[inline(always)]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from an angle in radians and a magnitude.
    ///
    /// Angles follow `atan2` conventions: zero points along the positive x
    /// axis and positive angles turn towards positive y.
    ///
    /// ```rust
    /// use core::f64::consts::PI;
    /// use bracken_geom::Vector2;
    ///
    /// assert_eq!(Vector2::from_angle(PI, 2.0), Vector2::new(-2.0, 0.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_angle(radians: f64, magnitude: f64) -> Self {
        Self {
            x: libm::cos(radians) * magnitude,
            y: libm::sin(radians) * magnitude,
        }
    }

    /// Creates a vector from an angle in degrees and a magnitude.
    #[inline]
    #[must_use]
    pub fn from_angle_deg(degrees: f64, magnitude: f64) -> Self {
        Self::from_angle(to_radians(degrees), magnitude)
    }

    /// The length of this vector.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    /// The squared length of this vector.
    ///
    /// Cheaper than [`magnitude`][Self::magnitude] when only comparisons are
    /// needed.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// The direction of this vector in radians.
    ///
    /// The zero vector reads as `0.0`, following `atan2`.
    #[inline]
    #[must_use]
    pub fn angle(&self) -> f64 {
        libm::atan2(self.y, self.x)
    }

    /// The direction of this vector in degrees.
    #[inline]
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        to_degrees(self.angle())
    }

    /// Points this vector in a new direction, in radians, keeping its
    /// magnitude.
    ///
    /// The zero vector has no direction to change, so it stays zero.
    #[inline]
    pub fn set_angle(&mut self, radians: f64) {
        *self = Self::from_angle(radians, self.magnitude());
    }

    /// Points this vector in a new direction, in degrees, keeping its
    /// magnitude.
    #[inline]
    pub fn set_angle_deg(&mut self, degrees: f64) {
        self.set_angle(to_radians(degrees));
    }

    /// Scales this vector to a new magnitude, keeping its direction.
    ///
    /// The zero vector reads an angle of `0.0`, so setting its magnitude
    /// produces a vector along the positive x axis.
    #[inline]
    pub fn set_magnitude(&mut self, magnitude: f64) {
        *self = Self::from_angle(self.angle(), magnitude);
    }

    /// The dot product of two vectors.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The unsigned angle between two vectors, in radians.
    ///
    /// The cosine fed to `acos` is clamped into `[-1, 1]`, so nearly
    /// (anti)parallel vectors cannot produce NaN through rounding overshoot.
    ///
    /// # Panics
    ///
    /// Panics if either vector has zero magnitude.
    #[must_use]
    pub fn angle_with(&self, other: Self) -> f64 {
        let denom = self.magnitude() * other.magnitude();
        assert!(
            denom != 0.0,
            "angle_with is undefined for zero-length vectors"
        );
        libm::acos((self.dot(other) / denom).clamp(-1.0, 1.0))
    }

    /// The counter-clockwise perpendicular of this vector.
    ///
    /// Maps `(x, y)` to `(-y, x)`, a quarter turn towards positive angles.
    #[inline]
    #[must_use]
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// This vector with both components negated.
    #[inline]
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Negates both components in place.
    #[inline]
    pub fn reverse_mut(&mut self) {
        *self = self.reverse();
    }

    /// This vector scaled to magnitude one.
    ///
    /// ```rust
    /// use bracken_geom::Vector2;
    ///
    /// let u = Vector2::new(3.0, 4.0).unit();
    /// assert!((u.magnitude() - 1.0).abs() < 1e-12);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if this vector has zero magnitude.
    #[must_use]
    pub fn unit(&self) -> Self {
        let m = self.magnitude();
        assert!(m != 0.0, "cannot normalize a zero-length vector");
        Self::new(self.x / m, self.y / m)
    }

    /// Scales this vector to magnitude one in place.
    ///
    /// # Panics
    ///
    /// Panics if this vector has zero magnitude.
    #[inline]
    pub fn unit_mut(&mut self) {
        *self = self.unit();
    }

    /// This vector rotated counter-clockwise by an angle in radians.
    ///
    /// ```rust
    /// use core::f64::consts::PI;
    /// use bracken_geom::Vector2;
    ///
    /// let v = Vector2::new(1.0, 0.0).rotate(PI / 2.0);
    /// assert_eq!(v, Vector2::new(0.0, 1.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn rotate(&self, radians: f64) -> Self {
        let s = libm::sin(radians);
        let c = libm::cos(radians);
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotates this vector counter-clockwise in place, in radians.
    #[inline]
    pub fn rotate_mut(&mut self, radians: f64) {
        *self = self.rotate(radians);
    }

    /// This vector rotated counter-clockwise by an angle in degrees.
    #[inline]
    #[must_use]
    pub fn rotate_deg(&self, degrees: f64) -> Self {
        self.rotate(to_radians(degrees))
    }

    /// Rotates this vector counter-clockwise in place, in degrees.
    #[inline]
    pub fn rotate_deg_mut(&mut self, degrees: f64) {
        *self = self.rotate_deg(degrees);
    }

    /// This vector with its components scaled independently.
    #[inline]
    #[must_use]
    pub fn stretch(&self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Scales the components independently in place.
    #[inline]
    pub fn stretch_mut(&mut self, sx: f64, sy: f64) {
        *self = self.stretch(sx, sy);
    }

    /// The projection of this vector onto another.
    ///
    /// The result is the component of `self` parallel to `onto`, as a vector
    /// along `onto`.
    ///
    /// # Panics
    ///
    /// Panics if `onto` has zero magnitude.
    #[must_use]
    pub fn project_onto(&self, onto: Self) -> Self {
        let denom = onto.magnitude_squared();
        assert!(denom != 0.0, "cannot project onto a zero-length vector");
        onto * (self.dot(onto) / denom)
    }

    /// Projects this vector onto another in place.
    ///
    /// # Panics
    ///
    /// Panics if `onto` has zero magnitude.
    #[inline]
    pub fn project_onto_mut(&mut self, onto: Self) {
        *self = self.project_onto(onto);
    }

    /// The components as a two-element array, `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl PartialEq for Vector2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        libm::fabs(self.x - other.x) < EPSILON && libm::fabs(self.y - other.y) < EPSILON
    }
}

impl PartialEq<(f64, f64)> for Vector2 {
    #[inline]
    fn eq(&self, other: &(f64, f64)) -> bool {
        *self == Self::new(other.0, other.1)
    }
}

impl PartialEq<[f64; 2]> for Vector2 {
    #[inline]
    fn eq(&self, other: &[f64; 2]) -> bool {
        *self == Self::new(other[0], other[1])
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;

    /// Indexes the components in `x`, `y` order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not `0` or `1`.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("vector component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("vector component index out of range: {index}"),
        }
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    #[inline]
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

#[inline(always)]
fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[inline(always)]
fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}
