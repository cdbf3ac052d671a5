// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits implemented by event types.
//!
//! Triggers and queues stay generic over the event type by asking for
//! capabilities rather than concrete enums: a kind-based filter needs
//! [`Classify`], a key trigger needs [`KeyboardEvent`], a mouse trigger
//! needs [`PointerEvent`]. An event type implements whichever capabilities
//! it can answer; the accessors return `None` for events the question does
//! not apply to.

use bracken_geom::Vector2;

use crate::Mods;

/// An event that can report its kind, with optional kind hierarchy.
///
/// [`kind`][Self::kind] always returns a *leaf* kind identifying the
/// concrete event. [`is_kind_of`][Self::is_kind_of] additionally accepts
/// family kinds (when the kind type has them), so a filter can match "any
/// keyboard event" without enumerating the leaves. The default
/// implementation knows no families and tests exact equality.
pub trait Classify {
    /// The kind vocabulary of this event type.
    type Kind: Copy + PartialEq;

    /// The leaf kind of this event.
    fn kind(&self) -> Self::Kind;

    /// Whether this event is of `kind`, including family membership.
    #[inline]
    fn is_kind_of(&self, kind: Self::Kind) -> bool {
        kind == self.kind()
    }
}

/// An event that may carry a keyboard press or release.
pub trait KeyboardEvent {
    /// The key vocabulary of this event type.
    type Key: PartialEq;

    /// The key and held modifiers, when this event is a key press.
    fn pressed_key(&self) -> Option<(&Self::Key, Mods)>;

    /// The key and held modifiers, when this event is a key release.
    fn released_key(&self) -> Option<(&Self::Key, Mods)>;
}

/// An event that may carry pointer button or motion state.
pub trait PointerEvent {
    /// The button vocabulary of this event type.
    type Button: PartialEq;

    /// The button, when this event is a button press.
    fn pressed_button(&self) -> Option<&Self::Button>;

    /// The button, when this event is a button release.
    fn released_button(&self) -> Option<&Self::Button>;

    /// The buttons held during motion, when this event is pointer motion.
    fn held_buttons(&self) -> Option<&[Self::Button]>;

    /// The pointer position, for any event that has one.
    fn position(&self) -> Option<Vector2>;
}
