// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_geom --heading-base-level=0

//! Bracken Geom: vectors, rectangles, and anchors for 2D screen-space work.
//!
//! Bracken Geom is the geometry vocabulary shared by the Bracken crates.
//!
//! - [`Vector2`]: a 2D vector readable and writable in cartesian or polar
//!   form, with approximate equality tuned for chained trigonometry.
//! - [`Rect`]: an axis-aligned rectangle stored as origin plus extent, with
//!   inclusive borders, overlap and containment queries, clipping, clamping,
//!   unions, and inflation.
//! - [`Anchor`]: named rect features driving [`Rect::align`] (translate a
//!   feature onto a target) and [`Rect::stretch_to`] (resize an edge onto a
//!   target).
//!
//! Everything is `f64` and headless. Only the collection queries allocate.
//!
//! ## Features
//!
//! - `std` *(default)*: compile with the standard library. The crate itself
//!   is `no_std` + `alloc`; this only switches dependency modes.
//! - `kurbo`: conversions to and from the kurbo geometry types.
//!
//! # Example
//!
//! ```rust
//! use bracken_geom::{Anchor, Rect, Vector2};
//!
//! // Place a sprite by its center, then keep it on screen.
//! let screen = Rect::new(0.0, 0.0, 640.0, 480.0);
//! let mut sprite = Rect::new(0.0, 0.0, 32.0, 32.0);
//! sprite.align_mut([Anchor::Center(700.0, 240.0)]);
//! assert!(!screen.contains(sprite));
//! sprite.clamp_mut(screen);
//! assert_eq!(sprite.top_right(), Vector2::new(640.0, 224.0));
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in vector and rect coordinates; comparisons
//! and queries are unspecified when one sneaks in.

#![no_std]

extern crate alloc;

mod anchor;
#[cfg(feature = "kurbo")]
mod interop;
mod rect;
mod vector;

pub use anchor::Anchor;
pub use rect::{Rect, RectFromSliceError};
pub use vector::{EPSILON, Vector2};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_placement_flow() {
        let screen = Rect::new(0.0, 0.0, 640.0, 480.0);
        let mut sprite = Rect::new(0.0, 0.0, 32.0, 32.0);
        sprite.align_mut([Anchor::Center(700.0, 240.0)]);
        sprite.clamp_mut(screen);
        assert!(screen.contains(sprite));
        assert_eq!(sprite, Rect::new(608.0, 224.0, 32.0, 32.0));
    }

    #[test]
    fn polar_velocity_integration() {
        let mut pos = Vector2::ZERO;
        let vel = Vector2::from_angle_deg(45.0, core::f64::consts::SQRT_2);
        pos += vel;
        pos += vel.rotate_deg(90.0);
        assert_eq!(pos, Vector2::new(0.0, 2.0));
    }
}
