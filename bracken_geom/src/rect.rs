// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangles with overlap queries and layout operations.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::anchor::AxisAnchor;
use crate::{Anchor, Vector2};

/// An axis-aligned rectangle stored as origin and extent.
///
/// The fields are public and unconstrained; a rect is *normal* when both
/// `w >= 0` and `h >= 0`. Operations that compare regions
/// ([`overlaps`][Self::overlaps], [`contains`][Self::contains],
/// [`contains_point`][Self::contains_point], [`clip`][Self::clip],
/// [`clamp`][Self::clamp], [`union`][Self::union]) normalize working copies
/// internally and never mutate their inputs, so rects with negative extents
/// behave as their normalized equivalents there. Everything else assumes a
/// normal rect; call [`normalize`][Self::normalize] first when in doubt.
///
/// Borders are inclusive: a point on any edge is inside, and two rects
/// sharing an edge overlap.
///
/// Unlike [`Vector2`], equality is exact. Rect coordinates are usually
/// assigned, not accumulated through trigonometry.
///
/// # Example
///
/// ```rust
/// use bracken_geom::Rect;
///
/// let screen = Rect::new(0.0, 0.0, 640.0, 480.0);
/// let sprite = Rect::new(-8.0, 100.0, 16.0, 16.0);
/// assert!(screen.overlaps(sprite));
/// assert_eq!(sprite.clamp(screen), Rect::new(0.0, 100.0, 16.0, 16.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Origin x (left edge when normal).
    pub x: f64,
    /// Origin y (top edge when normal).
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Creates a rect from origin and extent.
    #[inline(always)]
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// This rect with negative extents folded back across the origin.
    ///
    /// The result covers the same region with `w >= 0` and `h >= 0`.
    /// Normalizing a normal rect is a no-op.
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut r = *self;
        r.normalize_mut();
        r
    }

    /// Folds negative extents back across the origin, in place.
    #[inline]
    pub fn normalize_mut(&mut self) {
        if self.w < 0.0 {
            self.x += self.w;
            self.w = -self.w;
        }
        if self.h < 0.0 {
            self.y += self.h;
            self.h = -self.h;
        }
    }

    /// The origin as a vector, `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The extent as a vector, `(w, h)`.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vector2 {
        Vector2::new(self.w, self.h)
    }

    /// The covered area, `w * h`.
    ///
    /// Negative for rects with exactly one negative extent.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Whether this rect covers no area. Assumes no NaN.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Edge and point accessors.
///
/// Getters read the stored fields directly (`right` is `x + w` even when `w`
/// is negative). Setters translate the rect so the named feature lands on
/// the given value; they never change the extent.
impl Rect {
    /// The x coordinate of the left edge.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Moves the left edge to `v`, keeping the extent.
    #[inline]
    pub fn set_left(&mut self, v: f64) {
        self.x = v;
    }

    /// The y coordinate of the top edge.
    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Moves the top edge to `v`, keeping the extent.
    #[inline]
    pub fn set_top(&mut self, v: f64) {
        self.y = v;
    }

    /// The x coordinate of the right edge, `x + w`.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Moves the right edge to `v`, keeping the extent.
    #[inline]
    pub fn set_right(&mut self, v: f64) {
        self.x = v - self.w;
    }

    /// The y coordinate of the bottom edge, `y + h`.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Moves the bottom edge to `v`, keeping the extent.
    #[inline]
    pub fn set_bottom(&mut self, v: f64) {
        self.y = v - self.h;
    }

    /// The x coordinate of the center.
    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Moves the center to `v` on the x axis, keeping the extent.
    #[inline]
    pub fn set_center_x(&mut self, v: f64) {
        self.x = v - self.w / 2.0;
    }

    /// The y coordinate of the center.
    #[inline]
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Moves the center to `v` on the y axis, keeping the extent.
    #[inline]
    pub fn set_center_y(&mut self, v: f64) {
        self.y = v - self.h / 2.0;
    }

    /// The center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.center_x(), self.center_y())
    }

    /// Moves the center to `p`, keeping the extent.
    #[inline]
    pub fn set_center(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_center_x(p.x);
        self.set_center_y(p.y);
    }

    /// The top-left corner.
    #[inline]
    #[must_use]
    pub fn top_left(&self) -> Vector2 {
        Vector2::new(self.left(), self.top())
    }

    /// Moves the top-left corner to `p`, keeping the extent.
    #[inline]
    pub fn set_top_left(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_left(p.x);
        self.set_top(p.y);
    }

    /// The top-right corner.
    #[inline]
    #[must_use]
    pub fn top_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.top())
    }

    /// Moves the top-right corner to `p`, keeping the extent.
    #[inline]
    pub fn set_top_right(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_right(p.x);
        self.set_top(p.y);
    }

    /// The bottom-left corner.
    #[inline]
    #[must_use]
    pub fn bottom_left(&self) -> Vector2 {
        Vector2::new(self.left(), self.bottom())
    }

    /// Moves the bottom-left corner to `p`, keeping the extent.
    #[inline]
    pub fn set_bottom_left(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_left(p.x);
        self.set_bottom(p.y);
    }

    /// The bottom-right corner.
    #[inline]
    #[must_use]
    pub fn bottom_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.bottom())
    }

    /// Moves the bottom-right corner to `p`, keeping the extent.
    #[inline]
    pub fn set_bottom_right(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_right(p.x);
        self.set_bottom(p.y);
    }

    /// The midpoint of the left edge.
    #[inline]
    #[must_use]
    pub fn mid_left(&self) -> Vector2 {
        Vector2::new(self.left(), self.center_y())
    }

    /// Moves the left edge midpoint to `p`, keeping the extent.
    #[inline]
    pub fn set_mid_left(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_left(p.x);
        self.set_center_y(p.y);
    }

    /// The midpoint of the right edge.
    #[inline]
    #[must_use]
    pub fn mid_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.center_y())
    }

    /// Moves the right edge midpoint to `p`, keeping the extent.
    #[inline]
    pub fn set_mid_right(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_right(p.x);
        self.set_center_y(p.y);
    }

    /// The midpoint of the top edge.
    #[inline]
    #[must_use]
    pub fn mid_top(&self) -> Vector2 {
        Vector2::new(self.center_x(), self.top())
    }

    /// Moves the top edge midpoint to `p`, keeping the extent.
    #[inline]
    pub fn set_mid_top(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_center_x(p.x);
        self.set_top(p.y);
    }

    /// The midpoint of the bottom edge.
    #[inline]
    #[must_use]
    pub fn mid_bottom(&self) -> Vector2 {
        Vector2::new(self.center_x(), self.bottom())
    }

    /// Moves the bottom edge midpoint to `p`, keeping the extent.
    #[inline]
    pub fn set_mid_bottom(&mut self, p: impl Into<Vector2>) {
        let p = p.into();
        self.set_center_x(p.x);
        self.set_bottom(p.y);
    }
}

/// Region queries and combining operations.
impl Rect {
    /// Whether this rect contains the point.
    ///
    /// The borders are part of the rect, so a point on any edge is inside.
    ///
    /// ```rust
    /// use bracken_geom::Rect;
    ///
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.contains_point(10.0, 0.0));
    /// assert!(!r.contains_point(10.1, 0.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let r = self.normalize();
        r.x <= x && x <= r.right() && r.y <= y && y <= r.bottom()
    }

    /// Whether this rect overlaps another in any way.
    ///
    /// The edge of a rect is considered part of itself, meaning that two
    /// rects that share an edge overlap. The test is symmetric.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: impl Into<Self>) -> bool {
        let a = self.normalize();
        let b = other.into().normalize();
        a.x <= b.right() && b.x <= a.right() && a.y <= b.bottom() && b.y <= a.bottom()
    }

    /// Whether this rect entirely contains another.
    ///
    /// Coinciding borders count as contained, and every rect contains
    /// itself.
    #[inline]
    #[must_use]
    pub fn contains(&self, other: impl Into<Self>) -> bool {
        let a = self.normalize();
        let b = other.into().normalize();
        a.x <= b.x && b.right() <= a.right() && a.y <= b.y && b.bottom() <= a.bottom()
    }

    /// The intersection of this rect with another.
    ///
    /// When the rects do not touch at all, the result has zero width and
    /// height and keeps the normalized receiver's origin. Rects that only
    /// share an edge intersect in a zero-area sliver along that edge.
    #[must_use]
    pub fn clip(&self, other: impl Into<Self>) -> Self {
        let a = self.normalize();
        let b = other.into().normalize();
        let x0 = a.x.max(b.x);
        let y0 = a.y.max(b.y);
        let x1 = a.right().min(b.right());
        let y1 = a.bottom().min(b.bottom());
        if x1 < x0 || y1 < y0 {
            Self::new(a.x, a.y, 0.0, 0.0)
        } else {
            Self::new(x0, y0, x1 - x0, y1 - y0)
        }
    }

    /// Replaces this rect with its intersection with another.
    #[inline]
    pub fn clip_mut(&mut self, other: impl Into<Self>) {
        *self = self.clip(other);
    }

    /// This rect translated to lie inside another.
    ///
    /// Each axis resolves independently: when this rect is wider (or taller)
    /// than `other` it is centered on that axis; when it protrudes on one
    /// side, that edge snaps flush; otherwise the axis is left alone. The
    /// result is normalized.
    ///
    /// ```rust
    /// use bracken_geom::Rect;
    ///
    /// let r = Rect::new(0.0, 42.0, 10.0, 15.0);
    /// let bounds = Rect::new(70.0, 40.0, 20.0, 30.0);
    /// assert_eq!(r.clamp(bounds), Rect::new(70.0, 42.0, 10.0, 15.0));
    /// ```
    #[must_use]
    pub fn clamp(&self, other: impl Into<Self>) -> Self {
        let mut r = self.normalize();
        let o = other.into().normalize();
        if r.w >= o.w {
            r.set_center_x(o.center_x());
        } else if r.x < o.x {
            r.x = o.x;
        } else if r.right() > o.right() {
            r.set_right(o.right());
        }
        if r.h >= o.h {
            r.set_center_y(o.center_y());
        } else if r.y < o.y {
            r.y = o.y;
        } else if r.bottom() > o.bottom() {
            r.set_bottom(o.bottom());
        }
        r
    }

    /// Translates this rect to lie inside another, in place.
    #[inline]
    pub fn clamp_mut(&mut self, other: impl Into<Self>) {
        *self = self.clamp(other);
    }

    /// The smallest rect enclosing this rect and another.
    ///
    /// ```rust
    /// use bracken_geom::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect::new(20.0, 20.0, 5.0, 5.0);
    /// assert_eq!(a.union(b), Rect::new(0.0, 0.0, 25.0, 25.0));
    /// ```
    #[must_use]
    pub fn union(&self, other: impl Into<Self>) -> Self {
        let a = self.normalize();
        let b = other.into().normalize();
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        let x1 = a.right().max(b.right());
        let y1 = a.bottom().max(b.bottom());
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Replaces this rect with the union, in place.
    #[inline]
    pub fn union_mut(&mut self, other: impl Into<Self>) {
        *self = self.union(other);
    }

    /// The smallest rect enclosing this rect and every rect in `rects`.
    #[must_use]
    pub fn union_all<I>(&self, rects: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        rects
            .into_iter()
            .fold(self.normalize(), |acc, r| acc.union(r))
    }

    /// This rect grown by `dw` and `dh` about its center.
    ///
    /// The center stays fixed; each extent changes by the full delta, half
    /// on each side. Negative deltas shrink, and shrinking past zero yields
    /// a non-normal rect.
    #[inline]
    #[must_use]
    pub fn inflate(&self, dw: f64, dh: f64) -> Self {
        Self::new(self.x - dw / 2.0, self.y - dh / 2.0, self.w + dw, self.h + dh)
    }

    /// Grows this rect about its center, in place.
    #[inline]
    pub fn inflate_mut(&mut self, dw: f64, dh: f64) {
        *self = self.inflate(dw, dh);
    }

    /// This rect translated by an offset.
    #[inline]
    #[must_use]
    pub fn translate(&self, by: impl Into<Vector2>) -> Self {
        let by = by.into();
        Self::new(self.x + by.x, self.y + by.y, self.w, self.h)
    }

    /// Translates this rect, in place.
    #[inline]
    pub fn translate_mut(&mut self, by: impl Into<Vector2>) {
        *self = self.translate(by);
    }

    /// This rect translated so each anchor's feature lands on its target.
    ///
    /// Anchors apply in iteration order, so a later anchor sees the effect
    /// of earlier ones (and wins when they constrain the same axis). The
    /// extent never changes.
    ///
    /// ```rust
    /// use bracken_geom::{Anchor, Rect};
    ///
    /// let r = Rect::new(0.0, 0.0, 10.0, 4.0);
    /// let aligned = r.align([Anchor::Center(50.0, 50.0)]);
    /// assert_eq!(aligned, Rect::new(45.0, 48.0, 10.0, 4.0));
    /// ```
    #[must_use]
    pub fn align(&self, anchors: impl IntoIterator<Item = Anchor>) -> Self {
        let mut r = *self;
        r.align_mut(anchors);
        r
    }

    /// Translates so each anchor's feature lands on its target, in place.
    pub fn align_mut(&mut self, anchors: impl IntoIterator<Item = Anchor>) {
        for anchor in anchors {
            let (ax, ay) = anchor.split();
            if let Some(ax) = ax {
                align_axis(&mut self.x, self.w, ax);
            }
            if let Some(ay) = ay {
                align_axis(&mut self.y, self.h, ay);
            }
        }
    }

    /// This rect resized so each anchor's edge lands on its target.
    ///
    /// Moving an edge pins the opposite edge in place. Center anchors have
    /// no opposite edge and translate instead, exactly as in
    /// [`align`][Self::align]. Anchors apply in iteration order. Dragging an
    /// edge past its opposite produces a non-normal rect.
    ///
    /// ```rust
    /// use bracken_geom::{Anchor, Rect};
    ///
    /// let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    /// let stretched = r.stretch_to([Anchor::Left(0.0)]);
    /// assert_eq!(stretched, Rect::new(0.0, 10.0, 30.0, 20.0));
    /// ```
    #[must_use]
    pub fn stretch_to(&self, anchors: impl IntoIterator<Item = Anchor>) -> Self {
        let mut r = *self;
        r.stretch_to_mut(anchors);
        r
    }

    /// Resizes so each anchor's edge lands on its target, in place.
    pub fn stretch_to_mut(&mut self, anchors: impl IntoIterator<Item = Anchor>) {
        for anchor in anchors {
            let (ax, ay) = anchor.split();
            if let Some(ax) = ax {
                stretch_axis(&mut self.x, &mut self.w, ax);
            }
            if let Some(ay) = ay {
                stretch_axis(&mut self.y, &mut self.h, ay);
            }
        }
    }
}

/// Queries over collections of rect-like values.
impl Rect {
    /// The position of the first rect in `rects` overlapping this one.
    #[must_use]
    pub fn find_overlap<I>(&self, rects: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        rects.into_iter().position(|r| self.overlaps(r))
    }

    /// The positions of every rect in `rects` overlapping this one.
    #[must_use]
    pub fn find_overlaps<I>(&self, rects: I) -> Vec<usize>
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        rects
            .into_iter()
            .enumerate()
            .filter_map(|(i, r)| self.overlaps(r).then_some(i))
            .collect()
    }

    /// The first `(key, value)` entry whose value overlaps this rect.
    ///
    /// Entries are tested in iteration order; for unordered sources the
    /// "first" match is whichever the iterator yields first.
    #[must_use]
    pub fn find_overlap_in<K, V, I>(&self, entries: I) -> Option<(K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
        V: Clone + Into<Self>,
    {
        entries
            .into_iter()
            .find(|(_, v)| self.overlaps(v.clone()))
    }

    /// Every `(key, value)` entry whose value overlaps this rect.
    #[must_use]
    pub fn find_overlaps_in<K, V, I>(&self, entries: I) -> Vec<(K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
        V: Clone + Into<Self>,
    {
        entries
            .into_iter()
            .filter(|(_, v)| self.overlaps(v.clone()))
            .collect()
    }
}

impl PartialEq<[f64; 4]> for Rect {
    #[inline]
    fn eq(&self, other: &[f64; 4]) -> bool {
        *self == Self::from(*other)
    }
}

impl Index<usize> for Rect {
    type Output = f64;

    /// Indexes the fields in `x`, `y`, `w`, `h` order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 4 or greater.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.w,
            3 => &self.h,
            _ => panic!("rect component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Rect {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.w,
            3 => &mut self.h,
            _ => panic!("rect component index out of range: {index}"),
        }
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    #[inline]
    fn from((x, y, w, h): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, w, h)
    }
}

impl From<[f64; 4]> for Rect {
    #[inline]
    fn from([x, y, w, h]: [f64; 4]) -> Self {
        Self::new(x, y, w, h)
    }
}

impl From<((f64, f64), (f64, f64))> for Rect {
    #[inline]
    fn from(((x, y), (w, h)): ((f64, f64), (f64, f64))) -> Self {
        Self::new(x, y, w, h)
    }
}

impl From<(Vector2, Vector2)> for Rect {
    /// Builds a rect from origin and extent vectors.
    #[inline]
    fn from((pos, size): (Vector2, Vector2)) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }
}

impl From<Rect> for [f64; 4] {
    #[inline]
    fn from(r: Rect) -> Self {
        [r.x, r.y, r.w, r.h]
    }
}

impl From<Rect> for (f64, f64, f64, f64) {
    #[inline]
    fn from(r: Rect) -> Self {
        (r.x, r.y, r.w, r.h)
    }
}

/// Error produced when coercing a slice of the wrong length into a [`Rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectFromSliceError {
    /// The length of the offending slice.
    pub len: usize,
}

impl fmt::Display for RectFromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected 4 rect components (x, y, w, h), got {}",
            self.len
        )
    }
}

impl core::error::Error for RectFromSliceError {}

impl TryFrom<&[f64]> for Rect {
    type Error = RectFromSliceError;

    /// Coerces a 4-element slice into a rect.
    fn try_from(v: &[f64]) -> Result<Self, Self::Error> {
        match v {
            [x, y, w, h] => Ok(Self::new(*x, *y, *w, *h)),
            _ => Err(RectFromSliceError { len: v.len() }),
        }
    }
}

fn align_axis(pos: &mut f64, extent: f64, anchor: AxisAnchor) {
    match anchor {
        AxisAnchor::Min(v) => *pos = v,
        AxisAnchor::Max(v) => *pos = v - extent,
        AxisAnchor::Mid(v) => *pos = v - extent / 2.0,
    }
}

fn stretch_axis(pos: &mut f64, extent: &mut f64, anchor: AxisAnchor) {
    match anchor {
        AxisAnchor::Min(v) => {
            let far = *pos + *extent;
            *pos = v;
            *extent = far - v;
        }
        AxisAnchor::Max(v) => *extent = v - *pos,
        AxisAnchor::Mid(v) => *pos = v - *extent / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn normalize_folds_negative_extents() {
        let r = Rect::new(10.0, 10.0, -4.0, -6.0);
        let n = r.normalize();
        assert_eq!(n, Rect::new(6.0, 4.0, 4.0, 6.0));
        assert_eq!(n.normalize(), n);
    }

    #[test]
    fn accessors_read_and_translate() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(r.right(), 10.0);
        assert_eq!(r.center(), Vector2::new(5.0, 2.0));
        assert_eq!(r.mid_bottom(), Vector2::new(5.0, 4.0));

        r.set_bottom_right((20.0, 20.0));
        assert_eq!(r, Rect::new(10.0, 16.0, 10.0, 4.0));
        r.set_center((0.0, 0.0));
        assert_eq!(r, Rect::new(-5.0, -2.0, 10.0, 4.0));
        // Setters never resize.
        assert_eq!(r.size(), Vector2::new(10.0, 4.0));
    }

    #[test]
    fn contains_point_includes_borders() {
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(20.0, 20.0));
        assert!(r.contains_point(10.0, 20.0));
        assert!(!r.contains_point(21.0, 21.0));
        assert!(!r.contains_point(10.0, 20.5));

        // A non-normal rect tests as its normalized region.
        let backwards = Rect::new(10.0, 10.0, -10.0, -10.0);
        assert!(backwards.contains_point(5.0, 5.0));
    }

    #[test]
    fn overlaps_is_symmetric_and_edge_inclusive() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(20.0, 0.0, 5.0, 5.0);
        let c = Rect::new(20.1, 0.0, 5.0, 5.0);
        assert!(a.overlaps(b));
        assert!(b.overlaps(a));
        assert!(!a.overlaps(c));

        // Tuples and arrays coerce.
        assert!(a.overlaps([5.0, 5.0, 1.0, 1.0]));
        assert!(a.overlaps((9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn contains_allows_border_coincidence() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(outer.contains(Rect::new(2.0, 0.0, 8.0, 10.0)));
        assert!(!outer.contains(Rect::new(2.0, 0.0, 9.0, 10.0)));
        // Containment implies overlap.
        assert!(outer.overlaps(Rect::new(2.0, 0.0, 8.0, 10.0)));
    }

    #[test]
    fn clip_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.clip(Rect::new(5.0, 5.0, 10.0, 10.0)), Rect::new(5.0, 5.0, 5.0, 5.0));
        // Edge touch leaves a zero-area sliver on the shared edge.
        assert_eq!(a.clip(Rect::new(10.0, 2.0, 5.0, 5.0)), Rect::new(10.0, 2.0, 0.0, 5.0));
    }

    #[test]
    fn clip_miss_keeps_origin_with_zero_size() {
        let a = Rect::new(3.0, 4.0, 10.0, 10.0);
        let clipped = a.clip(Rect::new(100.0, 100.0, 5.0, 5.0));
        assert_eq!(clipped, Rect::new(3.0, 4.0, 0.0, 0.0));
        assert!(clipped.is_empty());
    }

    #[test]
    fn clamp_snaps_protruding_edges() {
        let r = Rect::new(0.0, 42.0, 10.0, 15.0);
        let bounds = Rect::new(70.0, 40.0, 20.0, 30.0);
        assert_eq!(r.clamp(bounds), Rect::new(70.0, 42.0, 10.0, 15.0));

        // Protruding past the far edge snaps that edge flush.
        let far = Rect::new(95.0, 50.0, 10.0, 10.0);
        assert_eq!(far.clamp(bounds), Rect::new(80.0, 50.0, 10.0, 10.0));
    }

    #[test]
    fn clamp_centers_oversized_axes() {
        let wide = Rect::new(0.0, 0.0, 100.0, 10.0);
        let bounds = Rect::new(10.0, 20.0, 20.0, 30.0);
        let clamped = wide.clamp(bounds);
        // Wider than the bounds: centered on x. Fits on y: snapped to the top.
        assert_eq!(clamped, Rect::new(-30.0, 20.0, 100.0, 10.0));
        assert_eq!(clamped.center_x(), bounds.center_x());
    }

    #[test]
    fn clamp_leaves_fitting_rect_alone() {
        let r = Rect::new(75.0, 45.0, 5.0, 5.0);
        let bounds = Rect::new(70.0, 40.0, 20.0, 30.0);
        assert_eq!(r.clamp(bounds), r);
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(20.0, 40.0, 10.0, 30.0);
        let b = Rect::new(70.0, 40.0, 20.0, 30.0);
        let u = a.union(b);
        assert_eq!(u, Rect::new(20.0, 40.0, 70.0, 30.0));
        assert_eq!(u.right(), 90.0);
        assert_eq!(u.bottom(), 70.0);
        assert_eq!(b.union(a), u);
        assert!(u.contains(a));
        assert!(u.contains(b));
    }

    #[test]
    fn union_all_folds() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let out = a.union_all([
            Rect::new(5.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 5.0, 1.0, 2.0),
        ]);
        assert_eq!(out, Rect::new(0.0, 0.0, 6.0, 7.0));
        // Empty iterator: just the normalized receiver.
        let none: [Rect; 0] = [];
        assert_eq!(a.union_all(none), a);
    }

    #[test]
    fn inflate_keeps_center() {
        let r = Rect::new(10.0, 10.0, 4.0, 4.0);
        let grown = r.inflate(2.0, 6.0);
        assert_eq!(grown, Rect::new(9.0, 7.0, 6.0, 10.0));
        assert_eq!(grown.center(), r.center());
        // Deflating past zero inverts; normalize recovers the region.
        let inverted = r.inflate(-6.0, 0.0);
        assert!(inverted.w < 0.0);
        assert_eq!(inverted.normalize().center(), r.center());
    }

    #[test]
    fn align_applies_anchors_in_order() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(r.align([Anchor::Right(20.0)]), Rect::new(10.0, 0.0, 10.0, 4.0));
        assert_eq!(
            r.align([Anchor::MidTop(50.0, 8.0)]),
            Rect::new(45.0, 8.0, 10.0, 4.0)
        );
        // The later anchor wins on the shared axis.
        assert_eq!(
            r.align([Anchor::Left(100.0), Anchor::CenterX(0.0)]),
            Rect::new(-5.0, 0.0, 10.0, 4.0)
        );
    }

    #[test]
    fn stretch_to_pins_the_opposite_edge() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(r.stretch_to([Anchor::Left(0.0)]), Rect::new(0.0, 10.0, 30.0, 20.0));
        assert_eq!(r.stretch_to([Anchor::Bottom(50.0)]), Rect::new(10.0, 10.0, 20.0, 40.0));
        assert_eq!(
            r.stretch_to([Anchor::BottomRight(40.0, 40.0)]),
            Rect::new(10.0, 10.0, 30.0, 30.0)
        );
        // Center anchors translate rather than resize.
        assert_eq!(
            r.stretch_to([Anchor::Center(0.0, 0.0)]),
            Rect::new(-10.0, -10.0, 20.0, 20.0)
        );
        // Dragging an edge past its opposite inverts the extent.
        let crossed = r.stretch_to([Anchor::Right(5.0)]);
        assert_eq!(crossed.w, -5.0);
    }

    #[test]
    fn find_overlap_scans_in_order() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let rects = [
            Rect::new(100.0, 100.0, 5.0, 5.0),
            Rect::new(5.0, 5.0, 5.0, 5.0),
            Rect::new(-5.0, -5.0, 6.0, 6.0),
        ];
        assert_eq!(r.find_overlap(rects), Some(1));
        assert_eq!(r.find_overlaps(rects), vec![1, 2]);
        assert_eq!(r.find_overlap([Rect::new(100.0, 0.0, 1.0, 1.0)]), None);
    }

    #[test]
    fn find_overlap_in_keyed_entries() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let entries = [
            ("wall", Rect::new(50.0, 0.0, 10.0, 10.0)),
            ("door", Rect::new(8.0, 8.0, 4.0, 4.0)),
            ("rug", Rect::new(2.0, 2.0, 2.0, 2.0)),
        ];
        assert_eq!(r.find_overlap_in(entries), Some(("door", entries[1].1)));
        let all = r.find_overlaps_in(entries);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, "door");
        assert_eq!(all[1].0, "rug");
    }

    #[test]
    fn indexing_and_conversions() {
        let mut r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([r[0], r[1], r[2], r[3]], [1.0, 2.0, 3.0, 4.0]);
        r[2] = 30.0;
        assert_eq!(r, [1.0, 2.0, 30.0, 4.0]);

        assert_eq!(Rect::from(((1.0, 2.0), (3.0, 4.0))), Rect::new(1.0, 2.0, 3.0, 4.0));
        let from_vecs = Rect::from((Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)));
        assert_eq!(from_vecs, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range() {
        let _ = Rect::default()[4];
    }

    #[test]
    fn try_from_slice() {
        let r = Rect::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap();
        assert_eq!(r, Rect::new(1.0, 2.0, 3.0, 4.0));

        let err = Rect::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert_eq!(err, RectFromSliceError { len: 2 });
        assert_eq!(
            alloc::format!("{err}"),
            "expected 4 rect components (x, y, w, h), got 2"
        );
    }

    #[test]
    fn degenerate_rects_participate_in_queries() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let r = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(r.overlaps(point));
        assert!(r.contains(point));
        assert!(point.is_empty());
    }
}
