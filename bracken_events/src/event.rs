// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The standard input event enum and its kind vocabulary.

use bracken_geom::Vector2;
use smallvec::SmallVec;

use crate::{Classify, Key, KeyboardEvent, Mods, MouseButton, PointerEvent};

/// Buttons held during a [`InputEvent::MouseMoved`] event.
///
/// Inline storage covers the three standard buttons without allocating.
pub type HeldButtons = SmallVec<[MouseButton; 3]>;

/// An input event as delivered by a windowing backend.
///
/// `InputEvent` is plain data: positions are in window coordinates, keys and
/// buttons use the vocabulary from this crate, and nothing here talks to a
/// display. It implements [`Classify`], [`KeyboardEvent`], and
/// [`PointerEvent`], so the generic triggers and queues accept it directly.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyPressed {
        /// The key that went down.
        key: Key,
        /// Modifiers held at the time.
        mods: Mods,
    },
    /// A key came up.
    KeyReleased {
        /// The key that came up.
        key: Key,
        /// Modifiers held at the time.
        mods: Mods,
    },
    /// A mouse button went down.
    MousePressed {
        /// The button that went down.
        button: MouseButton,
        /// Pointer position in window coordinates.
        pos: Vector2,
    },
    /// A mouse button came up.
    MouseReleased {
        /// The button that came up.
        button: MouseButton,
        /// Pointer position in window coordinates.
        pos: Vector2,
    },
    /// The pointer moved.
    MouseMoved {
        /// Pointer position in window coordinates.
        pos: Vector2,
        /// Motion since the previous report.
        rel: Vector2,
        /// Buttons held during the motion.
        held: HeldButtons,
    },
    /// The user asked the application to quit.
    Quit,
}

/// The kind vocabulary of [`InputEvent`].
///
/// The first six variants are leaf kinds, one per event. `Keyboard`,
/// `Mouse`, and `Any` are family kinds for use with
/// [`is_kind_of`][Classify::is_kind_of] and kind-based filters; they are
/// never returned by [`kind`][Classify::kind].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A [`InputEvent::KeyPressed`] event.
    KeyPress,
    /// A [`InputEvent::KeyReleased`] event.
    KeyRelease,
    /// A [`InputEvent::MousePressed`] event.
    MousePress,
    /// A [`InputEvent::MouseReleased`] event.
    MouseRelease,
    /// A [`InputEvent::MouseMoved`] event.
    MouseMove,
    /// A [`InputEvent::Quit`] event.
    Quit,
    /// Family: any keyboard event.
    Keyboard,
    /// Family: any mouse event.
    Mouse,
    /// Family: any event at all.
    Any,
}

impl InputKind {
    /// Whether `other` falls under this kind.
    ///
    /// Family kinds include their member leaves (and themselves); leaf
    /// kinds include only themselves.
    #[must_use]
    pub fn includes(self, other: Self) -> bool {
        match self {
            Self::Any => true,
            Self::Keyboard => {
                matches!(other, Self::KeyPress | Self::KeyRelease | Self::Keyboard)
            }
            Self::Mouse => matches!(
                other,
                Self::MousePress | Self::MouseRelease | Self::MouseMove | Self::Mouse
            ),
            k => k == other,
        }
    }
}

impl Classify for InputEvent {
    type Kind = InputKind;

    fn kind(&self) -> InputKind {
        match self {
            Self::KeyPressed { .. } => InputKind::KeyPress,
            Self::KeyReleased { .. } => InputKind::KeyRelease,
            Self::MousePressed { .. } => InputKind::MousePress,
            Self::MouseReleased { .. } => InputKind::MouseRelease,
            Self::MouseMoved { .. } => InputKind::MouseMove,
            Self::Quit => InputKind::Quit,
        }
    }

    fn is_kind_of(&self, kind: InputKind) -> bool {
        kind.includes(self.kind())
    }
}

impl KeyboardEvent for InputEvent {
    type Key = Key;

    fn pressed_key(&self) -> Option<(&Key, Mods)> {
        match self {
            Self::KeyPressed { key, mods } => Some((key, *mods)),
            _ => None,
        }
    }

    fn released_key(&self) -> Option<(&Key, Mods)> {
        match self {
            Self::KeyReleased { key, mods } => Some((key, *mods)),
            _ => None,
        }
    }
}

impl PointerEvent for InputEvent {
    type Button = MouseButton;

    fn pressed_button(&self) -> Option<&MouseButton> {
        match self {
            Self::MousePressed { button, .. } => Some(button),
            _ => None,
        }
    }

    fn released_button(&self) -> Option<&MouseButton> {
        match self {
            Self::MouseReleased { button, .. } => Some(button),
            _ => None,
        }
    }

    fn held_buttons(&self) -> Option<&[MouseButton]> {
        match self {
            Self::MouseMoved { held, .. } => Some(held),
            _ => None,
        }
    }

    fn position(&self) -> Option<Vector2> {
        match self {
            Self::MousePressed { pos, .. }
            | Self::MouseReleased { pos, .. }
            | Self::MouseMoved { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}
