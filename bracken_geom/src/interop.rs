// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from the kurbo geometry types.
//!
//! Kurbo stores rectangles as min/max corners; Bracken stores origin and
//! extent. Converting a [`Rect`] to [`kurbo::Rect`] normalizes first, so the
//! kurbo side always sees `x0 <= x1` and `y0 <= y1`.

use crate::{Rect, Vector2};

impl From<kurbo::Point> for Vector2 {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for kurbo::Point {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Vec2> for Vector2 {
    #[inline]
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for kurbo::Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Rect> for Rect {
    #[inline]
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1 - r.x0, r.y1 - r.y0)
    }
}

impl From<Rect> for kurbo::Rect {
    #[inline]
    fn from(r: Rect) -> Self {
        let n = r.normalize();
        Self::new(n.x, n.y, n.right(), n.bottom())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Rect, Vector2};

    #[test]
    fn vectors_round_trip() {
        let v = Vector2::new(1.5, -2.5);
        let p: kurbo::Point = v.into();
        assert_eq!(Vector2::from(p), v);
        let k: kurbo::Vec2 = v.into();
        assert_eq!(Vector2::from(k), v);
    }

    #[test]
    fn rects_normalize_on_the_way_out() {
        let r = Rect::new(10.0, 10.0, -4.0, 6.0);
        let k: kurbo::Rect = r.into();
        assert_eq!((k.x0, k.y0, k.x1, k.y1), (6.0, 10.0, 10.0, 16.0));
        assert_eq!(Rect::from(k), r.normalize());
    }
}
