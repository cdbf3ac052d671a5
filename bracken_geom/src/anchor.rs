// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named rectangle anchors for alignment and stretching.

use crate::Vector2;

/// A named feature of a [`Rect`][crate::Rect] paired with a target position.
///
/// Anchors drive [`Rect::align`][crate::Rect::align] (translate so the
/// feature lands on the target) and [`Rect::stretch_to`][crate::Rect::stretch_to]
/// (resize so the feature lands on the target while its opposite edge stays
/// put). Scalar variants constrain one axis; point variants constrain both
/// and behave exactly like their two scalar components.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// The left edge's x coordinate.
    Left(f64),
    /// The top edge's y coordinate.
    Top(f64),
    /// The right edge's x coordinate.
    Right(f64),
    /// The bottom edge's y coordinate.
    Bottom(f64),
    /// The center's x coordinate.
    CenterX(f64),
    /// The center's y coordinate.
    CenterY(f64),
    /// The center point.
    Center(f64, f64),
    /// The top-left corner.
    TopLeft(f64, f64),
    /// The top-right corner.
    TopRight(f64, f64),
    /// The bottom-left corner.
    BottomLeft(f64, f64),
    /// The bottom-right corner.
    BottomRight(f64, f64),
    /// The midpoint of the left edge.
    MidLeft(f64, f64),
    /// The midpoint of the right edge.
    MidRight(f64, f64),
    /// The midpoint of the top edge.
    MidTop(f64, f64),
    /// The midpoint of the bottom edge.
    MidBottom(f64, f64),
}

impl Anchor {
    /// The center point as an anchor.
    #[inline]
    #[must_use]
    pub fn center(point: impl Into<Vector2>) -> Self {
        let p = point.into();
        Self::Center(p.x, p.y)
    }

    /// Splits this anchor into its per-axis scalar components.
    ///
    /// Scalar variants yield themselves on one side and `None` on the other.
    pub(crate) fn split(self) -> (Option<AxisAnchor>, Option<AxisAnchor>) {
        match self {
            Self::Left(x) => (Some(AxisAnchor::Min(x)), None),
            Self::Right(x) => (Some(AxisAnchor::Max(x)), None),
            Self::CenterX(x) => (Some(AxisAnchor::Mid(x)), None),
            Self::Top(y) => (None, Some(AxisAnchor::Min(y))),
            Self::Bottom(y) => (None, Some(AxisAnchor::Max(y))),
            Self::CenterY(y) => (None, Some(AxisAnchor::Mid(y))),
            Self::Center(x, y) => (Some(AxisAnchor::Mid(x)), Some(AxisAnchor::Mid(y))),
            Self::TopLeft(x, y) => (Some(AxisAnchor::Min(x)), Some(AxisAnchor::Min(y))),
            Self::TopRight(x, y) => (Some(AxisAnchor::Max(x)), Some(AxisAnchor::Min(y))),
            Self::BottomLeft(x, y) => (Some(AxisAnchor::Min(x)), Some(AxisAnchor::Max(y))),
            Self::BottomRight(x, y) => (Some(AxisAnchor::Max(x)), Some(AxisAnchor::Max(y))),
            Self::MidLeft(x, y) => (Some(AxisAnchor::Min(x)), Some(AxisAnchor::Mid(y))),
            Self::MidRight(x, y) => (Some(AxisAnchor::Max(x)), Some(AxisAnchor::Mid(y))),
            Self::MidTop(x, y) => (Some(AxisAnchor::Mid(x)), Some(AxisAnchor::Min(y))),
            Self::MidBottom(x, y) => (Some(AxisAnchor::Mid(x)), Some(AxisAnchor::Max(y))),
        }
    }
}

/// A single-axis anchor: the low edge, the high edge, or the midpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum AxisAnchor {
    /// The low edge (left or top).
    Min(f64),
    /// The high edge (right or bottom).
    Max(f64),
    /// The axis midpoint.
    Mid(f64),
}
