// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_events --heading-base-level=0

//! Bracken Events: the input vocabulary shared by the Bracken crates.
//!
//! This crate defines what an input event *is*, with no opinion about where
//! it comes from or who handles it.
//!
//! - [`InputEvent`]: plain-data keyboard, mouse, and quit events, with
//!   positions from [`bracken_geom`].
//! - [`Key`], [`MouseButton`], [`Mods`]: key, button, and modifier
//!   identifiers. Modifier families have composite constants
//!   ([`Mods::SHIFT`] is either shift key).
//! - [`InputKind`]: the kind vocabulary, with leaf kinds per event and the
//!   `Keyboard` / `Mouse` / `Any` families.
//! - Capability traits: [`Classify`] (kind queries), [`KeyboardEvent`], and
//!   [`PointerEvent`]. Triggers and queues bound on these instead of on
//!   `InputEvent`, so applications can route their own event types through
//!   the same machinery.
//!
//! # Example
//!
//! ```rust
//! use bracken_events::{Classify, InputEvent, InputKind, Key, Mods};
//!
//! let ev = InputEvent::KeyPressed {
//!     key: Key::Escape,
//!     mods: Mods::empty(),
//! };
//! assert_eq!(ev.kind(), InputKind::KeyPress);
//! assert!(ev.is_kind_of(InputKind::Keyboard));
//! ```

#![no_std]

mod caps;
mod event;
mod keys;

pub use caps::{Classify, KeyboardEvent, PointerEvent};
pub use event::{HeldButtons, InputEvent, InputKind};
pub use keys::{Key, Mods, MouseButton};

// Positions in this crate's API are `bracken_geom` vectors; re-exported so
// dependants that only consume events need no direct geometry dependency.
#[doc(no_inline)]
pub use bracken_geom::Vector2;
