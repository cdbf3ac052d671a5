// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Trigger`] trait and the stock trigger set.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use bracken_events::{Classify, KeyboardEvent, Mods, PointerEvent};

/// A condition over events.
///
/// Triggers are pure filters: [`matches`][Self::matches] takes the event by
/// shared reference and answers yes or no, nothing else. Composite triggers
/// ([`AllTrigger`], [`AnyTrigger`]) combine boxed sub-triggers; the input
/// triggers in this module bound the event type on the capability they read
/// instead of on a concrete enum.
pub trait Trigger<E> {
    /// Whether this trigger matches the event.
    fn matches(&self, event: &E) -> bool;
}

/// A trigger that matches every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysTrigger;

impl<E> Trigger<E> for AlwaysTrigger {
    #[inline]
    fn matches(&self, _event: &E) -> bool {
        true
    }
}

/// A trigger that matches when all of its sub-triggers match.
///
/// Matches vacuously when empty. Short-circuits on the first miss.
pub struct AllTrigger<E> {
    triggers: Vec<Box<dyn Trigger<E>>>,
}

impl<E> AllTrigger<E> {
    /// Creates a conjunction of the given triggers.
    #[must_use]
    pub fn new(triggers: Vec<Box<dyn Trigger<E>>>) -> Self {
        Self { triggers }
    }
}

impl<E> Trigger<E> for AllTrigger<E> {
    fn matches(&self, event: &E) -> bool {
        self.triggers.iter().all(|t| t.matches(event))
    }
}

impl<E> fmt::Debug for AllTrigger<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllTrigger")
            .field("len", &self.triggers.len())
            .finish_non_exhaustive()
    }
}

/// A trigger that matches when any of its sub-triggers matches.
///
/// Never matches when empty. Short-circuits on the first hit.
pub struct AnyTrigger<E> {
    triggers: Vec<Box<dyn Trigger<E>>>,
}

impl<E> AnyTrigger<E> {
    /// Creates a disjunction of the given triggers.
    #[must_use]
    pub fn new(triggers: Vec<Box<dyn Trigger<E>>>) -> Self {
        Self { triggers }
    }
}

impl<E> Trigger<E> for AnyTrigger<E> {
    fn matches(&self, event: &E) -> bool {
        self.triggers.iter().any(|t| t.matches(event))
    }
}

impl<E> fmt::Debug for AnyTrigger<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyTrigger")
            .field("len", &self.triggers.len())
            .finish_non_exhaustive()
    }
}

/// A trigger defined by an arbitrary predicate over the event.
pub struct PredicateTrigger<E> {
    predicate: Box<dyn Fn(&E) -> bool>,
}

impl<E> PredicateTrigger<E> {
    /// Creates a trigger from a predicate.
    pub fn new(predicate: impl Fn(&E) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<E> Trigger<E> for PredicateTrigger<E> {
    #[inline]
    fn matches(&self, event: &E) -> bool {
        (self.predicate)(event)
    }
}

impl<E> fmt::Debug for PredicateTrigger<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateTrigger").finish_non_exhaustive()
    }
}

/// A trigger that projects a value out of the event and compares it.
///
/// One projection per trigger; combine several with [`AllTrigger`] to
/// constrain multiple attributes.
///
/// ```rust
/// use bracken_hooks::{AttrTrigger, Trigger};
///
/// struct Tick { frame: u64 }
///
/// let on_first = AttrTrigger::new(|t: &Tick| t.frame, 0);
/// assert!(on_first.matches(&Tick { frame: 0 }));
/// assert!(!on_first.matches(&Tick { frame: 3 }));
/// ```
pub struct AttrTrigger<E, V> {
    read: Box<dyn Fn(&E) -> V>,
    expected: V,
}

impl<E, V: PartialEq> AttrTrigger<E, V> {
    /// Creates a trigger matching events where `read` yields `expected`.
    pub fn new(read: impl Fn(&E) -> V + 'static, expected: V) -> Self {
        Self {
            read: Box::new(read),
            expected,
        }
    }
}

impl<E, V: PartialEq> Trigger<E> for AttrTrigger<E, V> {
    #[inline]
    fn matches(&self, event: &E) -> bool {
        (self.read)(event) == self.expected
    }
}

impl<E, V: fmt::Debug> fmt::Debug for AttrTrigger<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrTrigger")
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// A trigger matching events of exactly one kind.
///
/// Family kinds never match here because [`Classify::kind`] only returns
/// leaves; use [`FamilyTrigger`] for family membership.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindTrigger<K> {
    kind: K,
}

impl<K> KindTrigger<K> {
    /// Creates a trigger matching events whose leaf kind is `kind`.
    #[must_use]
    pub fn new(kind: K) -> Self {
        Self { kind }
    }
}

impl<E: Classify> Trigger<E> for KindTrigger<E::Kind> {
    #[inline]
    fn matches(&self, event: &E) -> bool {
        event.kind() == self.kind
    }
}

/// A trigger matching events belonging to a kind, family-aware.
///
/// Uses [`Classify::is_kind_of`], so a family kind matches every leaf it
/// includes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FamilyTrigger<K> {
    kind: K,
}

impl<K> FamilyTrigger<K> {
    /// Creates a trigger matching events that are of `kind` or fall under it.
    #[must_use]
    pub fn new(kind: K) -> Self {
        Self { kind }
    }
}

impl<E: Classify> Trigger<E> for FamilyTrigger<E::Kind> {
    #[inline]
    fn matches(&self, event: &E) -> bool {
        event.is_kind_of(self.kind)
    }
}

/// Which key a keyboard trigger accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeySpec<K> {
    /// Any key.
    Any,
    /// Exactly this key.
    Is(K),
}

impl<K: PartialEq> KeySpec<K> {
    fn matches(&self, key: &K) -> bool {
        match self {
            Self::Any => true,
            Self::Is(k) => k == key,
        }
    }
}

/// Which modifier state a keyboard trigger accepts.
///
/// `Exactly` compares family by family. Naming a composite family constant
/// (for example [`Mods::SHIFT`]) accepts any held combination from that
/// family; naming one side (for example [`Mods::LSHIFT`]) demands exactly
/// that side; families absent from the expectation must be absent from the
/// event. Num lock, caps lock, and AltGr compare bit for bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModSpec {
    /// Any modifier state.
    Any,
    /// No modifiers held at all.
    None,
    /// This modifier state, compared family by family.
    Exactly(Mods),
}

impl ModSpec {
    const FAMILIES: [Mods; 4] = [Mods::SHIFT, Mods::CTRL, Mods::ALT, Mods::META];

    fn matches(&self, actual: Mods) -> bool {
        match self {
            Self::Any => true,
            Self::None => actual.is_empty(),
            Self::Exactly(required) => {
                for family in Self::FAMILIES {
                    let r = *required & family;
                    let e = actual & family;
                    let family_ok = if r.is_empty() {
                        e.is_empty()
                    } else if r == family {
                        // The whole family was named: either side will do.
                        !e.is_empty()
                    } else {
                        e == r
                    };
                    if !family_ok {
                        return false;
                    }
                }
                let singles = Mods::NUM | Mods::CAPS | Mods::ALTGR;
                (*required & singles) == (actual & singles)
            }
        }
    }
}

/// A trigger matching key presses, optionally filtered by key and modifiers.
///
/// ```rust
/// use bracken_events::{InputEvent, Key, Mods};
/// use bracken_hooks::{KeyPressTrigger, Trigger};
///
/// let on_a = KeyPressTrigger::key(Key::Char('a'));
/// let shifted = InputEvent::KeyPressed { key: Key::Char('a'), mods: Mods::LSHIFT };
/// let other = InputEvent::KeyPressed { key: Key::Char('b'), mods: Mods::empty() };
/// assert!(on_a.matches(&shifted));
/// assert!(!on_a.matches(&other));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPressTrigger<K> {
    key: KeySpec<K>,
    mods: ModSpec,
}

impl<K> KeyPressTrigger<K> {
    /// Creates a trigger from explicit key and modifier expectations.
    #[must_use]
    pub fn new(key: KeySpec<K>, mods: ModSpec) -> Self {
        Self { key, mods }
    }

    /// Matches any key press.
    #[must_use]
    pub fn any() -> Self {
        Self::new(KeySpec::Any, ModSpec::Any)
    }

    /// Matches presses of `key` under any modifier state.
    #[must_use]
    pub fn key(key: K) -> Self {
        Self::new(KeySpec::Is(key), ModSpec::Any)
    }
}

impl<E: KeyboardEvent> Trigger<E> for KeyPressTrigger<E::Key> {
    fn matches(&self, event: &E) -> bool {
        event
            .pressed_key()
            .is_some_and(|(key, mods)| self.key.matches(key) && self.mods.matches(mods))
    }
}

/// A trigger matching key releases, optionally filtered by key and modifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyReleaseTrigger<K> {
    key: KeySpec<K>,
    mods: ModSpec,
}

impl<K> KeyReleaseTrigger<K> {
    /// Creates a trigger from explicit key and modifier expectations.
    #[must_use]
    pub fn new(key: KeySpec<K>, mods: ModSpec) -> Self {
        Self { key, mods }
    }

    /// Matches any key release.
    #[must_use]
    pub fn any() -> Self {
        Self::new(KeySpec::Any, ModSpec::Any)
    }

    /// Matches releases of `key` under any modifier state.
    #[must_use]
    pub fn key(key: K) -> Self {
        Self::new(KeySpec::Is(key), ModSpec::Any)
    }
}

impl<E: KeyboardEvent> Trigger<E> for KeyReleaseTrigger<E::Key> {
    fn matches(&self, event: &E) -> bool {
        event
            .released_key()
            .is_some_and(|(key, mods)| self.key.matches(key) && self.mods.matches(mods))
    }
}

/// Which button a mouse trigger accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonSpec<B> {
    /// Any button.
    Any,
    /// Exactly this button.
    Is(B),
}

impl<B: PartialEq> ButtonSpec<B> {
    fn matches(&self, button: &B) -> bool {
        match self {
            Self::Any => true,
            Self::Is(b) => b == button,
        }
    }
}

/// A trigger matching mouse button presses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MousePressTrigger<B> {
    button: ButtonSpec<B>,
}

impl<B> MousePressTrigger<B> {
    /// Creates a trigger from an explicit button expectation.
    #[must_use]
    pub fn new(button: ButtonSpec<B>) -> Self {
        Self { button }
    }

    /// Matches any button press.
    #[must_use]
    pub fn any() -> Self {
        Self::new(ButtonSpec::Any)
    }

    /// Matches presses of `button`.
    #[must_use]
    pub fn button(button: B) -> Self {
        Self::new(ButtonSpec::Is(button))
    }
}

impl<E: PointerEvent> Trigger<E> for MousePressTrigger<E::Button> {
    fn matches(&self, event: &E) -> bool {
        event.pressed_button().is_some_and(|b| self.button.matches(b))
    }
}

/// A trigger matching mouse button releases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MouseReleaseTrigger<B> {
    button: ButtonSpec<B>,
}

impl<B> MouseReleaseTrigger<B> {
    /// Creates a trigger from an explicit button expectation.
    #[must_use]
    pub fn new(button: ButtonSpec<B>) -> Self {
        Self { button }
    }

    /// Matches any button release.
    #[must_use]
    pub fn any() -> Self {
        Self::new(ButtonSpec::Any)
    }

    /// Matches releases of `button`.
    #[must_use]
    pub fn button(button: B) -> Self {
        Self::new(ButtonSpec::Is(button))
    }
}

impl<E: PointerEvent> Trigger<E> for MouseReleaseTrigger<E::Button> {
    fn matches(&self, event: &E) -> bool {
        event
            .released_button()
            .is_some_and(|b| self.button.matches(b))
    }
}

/// Which held-button state a motion trigger accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeldSpec<B> {
    /// Any held-button state, including none.
    Any,
    /// No buttons held (plain hover).
    None,
    /// Exactly these buttons held, compared as a set.
    Exactly(Vec<B>),
}

impl<B: PartialEq> HeldSpec<B> {
    fn matches(&self, held: &[B]) -> bool {
        match self {
            Self::Any => true,
            Self::None => held.is_empty(),
            Self::Exactly(want) => {
                want.iter().all(|b| held.contains(b)) && held.iter().all(|b| want.contains(b))
            }
        }
    }
}

/// A trigger matching pointer motion, optionally filtered by held buttons.
///
/// `HeldSpec::Exactly` compares as a set: order does not matter, and the
/// held buttons must be exactly those listed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MouseMoveTrigger<B> {
    held: HeldSpec<B>,
}

impl<B> MouseMoveTrigger<B> {
    /// Creates a trigger from an explicit held-button expectation.
    #[must_use]
    pub fn new(held: HeldSpec<B>) -> Self {
        Self { held }
    }

    /// Matches any pointer motion.
    #[must_use]
    pub fn any() -> Self {
        Self::new(HeldSpec::Any)
    }

    /// Matches motion while exactly `buttons` are held.
    #[must_use]
    pub fn dragging(buttons: Vec<B>) -> Self {
        Self::new(HeldSpec::Exactly(buttons))
    }
}

impl<E: PointerEvent> Trigger<E> for MouseMoveTrigger<E::Button> {
    fn matches(&self, event: &E) -> bool {
        event.held_buttons().is_some_and(|held| self.held.matches(held))
    }
}
