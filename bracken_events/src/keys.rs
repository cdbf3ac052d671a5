// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and mouse button identifiers.

bitflags::bitflags! {
    /// Modifier keys held during a keyboard event.
    ///
    /// Each physical modifier has its own bit. The composite constants
    /// ([`Mods::SHIFT`], [`Mods::CTRL`], [`Mods::ALT`], [`Mods::META`]) name
    /// a whole family and are the usual way to express "either side" when
    /// matching.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Mods: u16 {
        /// Left shift.
        const LSHIFT = 1 << 0;
        /// Right shift.
        const RSHIFT = 1 << 1;
        /// Left control.
        const LCTRL = 1 << 2;
        /// Right control.
        const RCTRL = 1 << 3;
        /// Left alt.
        const LALT = 1 << 4;
        /// Right alt.
        const RALT = 1 << 5;
        /// Left meta (command / super).
        const LMETA = 1 << 6;
        /// Right meta (command / super).
        const RMETA = 1 << 7;
        /// Num lock engaged.
        const NUM = 1 << 8;
        /// Caps lock engaged.
        const CAPS = 1 << 9;
        /// AltGr (ISO level-3 shift).
        const ALTGR = 1 << 10;

        /// Either shift key.
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        /// Either control key.
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        /// Either alt key.
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        /// Either meta key.
        const META = Self::LMETA.bits() | Self::RMETA.bits();
    }
}

impl Default for Mods {
    fn default() -> Self {
        Self::empty()
    }
}

/// A key on the keyboard.
///
/// Printable keys are identified by their unshifted character via
/// [`Key::Char`]; the spacebar is the named [`Key::Space`], not
/// `Char(' ')`. Keys with no name here are carried as platform scancodes in
/// [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key, by its unshifted character (`'a'`, `'1'`, `'-'`, ...).
    Char(char),
    /// The spacebar.
    Space,
    /// The return / enter key.
    Return,
    /// The escape key.
    Escape,
    /// The backspace key.
    Backspace,
    /// The tab key.
    Tab,
    /// The delete key.
    Delete,
    /// The insert key.
    Insert,
    /// The home key.
    Home,
    /// The end key.
    End,
    /// The page-up key.
    PageUp,
    /// The page-down key.
    PageDown,
    /// The up arrow.
    Up,
    /// The down arrow.
    Down,
    /// The left arrow.
    Left,
    /// The right arrow.
    Right,
    /// A function key, by number (`F(1)` for F1).
    F(u8),
    /// Left shift.
    LShift,
    /// Right shift.
    RShift,
    /// Left control.
    LCtrl,
    /// Right control.
    RCtrl,
    /// Left alt.
    LAlt,
    /// Right alt.
    RAlt,
    /// Any other key, by platform scancode.
    Other(u32),
}

/// A mouse button.
///
/// Wheel motion arrives as press/release pairs of the wheel buttons, the
/// way classic windowing backends report it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left (primary) button.
    Left,
    /// The middle button or wheel click.
    Middle,
    /// The right (secondary) button.
    Right,
    /// One notch of upward wheel motion.
    WheelUp,
    /// One notch of downward wheel motion.
    WheelDown,
    /// Any other button, by number.
    Other(u8),
}
