// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_contact --heading-base-level=0

//! Bracken Contact: frame-windowed contact tracking.
//!
//! A [`ContactState`] turns per-frame contact reports into a stream of
//! [`ContactEvent`]s. Callers [`register`][ContactState::register] every
//! contact they detect during a frame and [`flush`][ContactState::flush]
//! once at the end of it:
//!
//! - the first report of a pair becomes [`ContactEvent::Started`];
//! - further reports while the pair is in the window become
//!   [`ContactEvent::Continued`];
//! - a pair that falls silent long enough to leave the window becomes
//!   [`ContactEvent::Ended`], carrying its last reported contact data.
//!
//! The window spans [`DEFAULT_WINDOW`] frames including the current one, so
//! a contact that flickers off for a frame or two is *continued*, not
//! ended and restarted. Broadphase jitter stays out of game logic.
//!
//! [`ContactEvent`] implements the `Classify` capability, so contact
//! streams run through `bracken_queue` filters and `bracken_hooks`
//! kind triggers unchanged.
//!
//! ## Features
//!
//! - `std` *(default)*: compile with the standard library. The crate itself
//!   is `no_std` + `alloc`; this only switches dependency modes.
//!
//! # Example
//!
//! ```rust
//! use bracken_contact::{ContactEvent, ContactState};
//!
//! let mut state: ContactState<u32, &str> = ContactState::new();
//! state.register(7, 9, "corner");
//!
//! let events = state.flush();
//! assert!(matches!(events[0], ContactEvent::Started(_)));
//!
//! // Two quiet frames keep the pair in the window; the third retires it.
//! assert!(state.flush().is_empty());
//! let ended = state.flush();
//! assert!(matches!(ended[0], ContactEvent::Ended(_)));
//! ```

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use bracken_events::Classify;
use hashbrown::HashMap;

/// Frames a pair may stay silent before it is retired, current frame
/// included.
pub const DEFAULT_WINDOW: usize = 3;

/// A pair key in canonical (sorted) order, so `(a, b)` and `(b, a)` land on
/// the same entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct PairKey<K> {
    a: K,
    b: K,
}

impl<K: Ord> PairKey<K> {
    fn new(a: K, b: K) -> Self {
        if b < a { Self { a: b, b: a } } else { Self { a, b } }
    }
}

/// Two things in contact, with the contact data reported for them.
///
/// `a` and `b` are in canonical order: `a <= b` regardless of the argument
/// order passed to [`ContactState::register`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPair<K, C> {
    /// The smaller key of the pair.
    pub a: K,
    /// The larger key of the pair.
    pub b: K,
    /// The contact data from the most recent report.
    pub contacts: C,
}

impl<K: PartialEq, C> ContactPair<K, C> {
    /// Whether `key` is one side of this pair.
    #[must_use]
    pub fn involves(&self, key: K) -> bool {
        self.a == key || self.b == key
    }
}

/// A change in the contact relationship of one pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactEvent<K, C> {
    /// The pair was reported for the first time.
    Started(ContactPair<K, C>),
    /// The pair was reported again while still in the window.
    Continued(ContactPair<K, C>),
    /// The pair left the window without a fresh report.
    Ended(ContactPair<K, C>),
}

impl<K, C> ContactEvent<K, C> {
    /// The pair this event is about.
    #[must_use]
    pub fn pair(&self) -> &ContactPair<K, C> {
        match self {
            Self::Started(pair) | Self::Continued(pair) | Self::Ended(pair) => pair,
        }
    }

    /// Consumes the event, returning its pair.
    #[must_use]
    pub fn into_pair(self) -> ContactPair<K, C> {
        match self {
            Self::Started(pair) | Self::Continued(pair) | Self::Ended(pair) => pair,
        }
    }
}

/// The kind vocabulary of [`ContactEvent`].
///
/// `Started`, `Continued`, and `Ended` are the leaf kinds; `Any` is the
/// family covering all three.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// A [`ContactEvent::Started`] event.
    Started,
    /// A [`ContactEvent::Continued`] event.
    Continued,
    /// A [`ContactEvent::Ended`] event.
    Ended,
    /// Family: any contact event.
    Any,
}

impl ContactKind {
    /// Whether `other` falls under this kind.
    #[must_use]
    pub fn includes(self, other: Self) -> bool {
        self == Self::Any || self == other
    }
}

impl<K, C> Classify for ContactEvent<K, C> {
    type Kind = ContactKind;

    fn kind(&self) -> ContactKind {
        match self {
            Self::Started(_) => ContactKind::Started,
            Self::Continued(_) => ContactKind::Continued,
            Self::Ended(_) => ContactKind::Ended,
        }
    }

    fn is_kind_of(&self, kind: ContactKind) -> bool {
        kind.includes(self.kind())
    }
}

type Frame<K, C> = HashMap<PairKey<K>, C>;

/// Tracks contact pairs across a sliding window of frames.
///
/// One instance models one collision space. During a frame, callers
/// [`register`][Self::register] every detected contact; at the end of the
/// frame, [`flush`][Self::flush] closes it and returns the events the frame
/// produced, in report order, with retirements last.
///
/// A pair is *tracked* while any frame in the window mentions it. The
/// window holds the current frame plus the most recent history, so with the
/// default width of [`DEFAULT_WINDOW`] a pair reported once is retired on
/// the third flush after its last report.
pub struct ContactState<K, C> {
    /// Newest frame at the back; never empty.
    frames: VecDeque<Frame<K, C>>,
    outbox: Vec<ContactEvent<K, C>>,
    window: usize,
}

impl<K, C> ContactState<K, C> {
    /// Creates a tracker with the default window of [`DEFAULT_WINDOW`]
    /// frames.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Creates a tracker keeping `window` frames, current frame included.
    ///
    /// A window of 1 keeps no history: every pair is retired on the flush
    /// after its last report.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    #[must_use]
    pub fn with_window(window: usize) -> Self {
        assert!(window >= 1, "contact window must include the current frame");
        let mut frames = VecDeque::with_capacity(window);
        frames.push_back(Frame::new());
        Self {
            frames,
            outbox: Vec::new(),
            window,
        }
    }

    /// The window width in frames.
    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    /// The events produced so far in the current frame, in report order.
    #[must_use]
    pub fn pending(&self) -> &[ContactEvent<K, C>] {
        &self.outbox
    }

    /// Forgets all tracked pairs and pending events.
    ///
    /// No `Ended` events are produced for the forgotten pairs.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.frames.push_back(Frame::new());
        self.outbox.clear();
    }

    fn current_mut(&mut self) -> &mut Frame<K, C> {
        self.frames.back_mut().expect("state always holds a current frame")
    }
}

impl<K: Copy + Ord + Hash, C: Clone> ContactState<K, C> {
    /// Reports a contact between `a` and `b` during the current frame.
    ///
    /// Argument order does not matter. A pair not seen anywhere in the
    /// window produces a `Started` event, a known pair a `Continued` one;
    /// either way `contacts` replaces the pair's data for this frame. The
    /// events are delivered by the next [`flush`][Self::flush].
    pub fn register(&mut self, a: K, b: K, contacts: C) {
        let key = PairKey::new(a, b);
        let known = self.contains(key);
        let pair = ContactPair {
            a: key.a,
            b: key.b,
            contacts: contacts.clone(),
        };
        self.outbox.push(if known {
            ContactEvent::Continued(pair)
        } else {
            ContactEvent::Started(pair)
        });
        self.current_mut().insert(key, contacts);
    }

    /// Closes the current frame and returns its events.
    ///
    /// The report-time events (`Started`, `Continued`) come first in report
    /// order, then one `Ended` per pair retired by this flush, carrying the
    /// pair's last reported contact data.
    pub fn flush(&mut self) -> Vec<ContactEvent<K, C>> {
        self.frames.push_back(Frame::new());
        while self.frames.len() > self.window {
            let retired = self.frames.pop_front().expect("window is at least one frame");
            for (key, contacts) in retired {
                if !self.contains(key) {
                    self.outbox.push(ContactEvent::Ended(ContactPair {
                        a: key.a,
                        b: key.b,
                        contacts,
                    }));
                }
            }
        }
        core::mem::take(&mut self.outbox)
    }

    /// Whether the pair `(a, b)` is anywhere in the window.
    #[must_use]
    pub fn is_tracking(&self, a: K, b: K) -> bool {
        self.contains(PairKey::new(a, b))
    }

    /// The pairs currently in the window, each once, in canonical order.
    #[must_use]
    pub fn tracking(&self) -> Vec<(K, K)> {
        let mut keys: Vec<PairKey<K>> = self
            .frames
            .iter()
            .flat_map(|frame| frame.keys().copied())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys.into_iter().map(|key| (key.a, key.b)).collect()
    }

    fn contains(&self, key: PairKey<K>) -> bool {
        self.frames.iter().any(|frame| frame.contains_key(&key))
    }
}

impl<K, C> Default for ContactState<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> fmt::Debug for ContactState<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactState")
            .field("window", &self.window)
            .field("pending", &self.outbox.len())
            .finish_non_exhaustive()
    }
}
