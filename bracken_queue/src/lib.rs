// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_queue --heading-base-level=0

//! Bracken Queue: a buffered event queue between backends and game loops.
//!
//! An [`EventQueue`] collects events in arrival order and hands them out in
//! FIFO order. Three things separate it from a plain `VecDeque`:
//!
//! - an *ignore filter*: kinds on the ignore list (leaf or family) are
//!   dropped at the door, so code downstream never sees them;
//! - a pluggable [`EventSource`]: the backend that actually talks to the
//!   windowing layer, polled on [`fetch`][EventQueue::fetch] and, by
//!   default, automatically before reads;
//! - blocking reads (`std` only): [`wait`][EventQueue::wait] sleep-polls
//!   until an event arrives, [`wait_with`][EventQueue::wait_with] lets the
//!   caller bail out.
//!
//! ## Features
//!
//! - `std` *(default)*: enables the blocking `wait` calls. The rest of the
//!   crate is `no_std` + `alloc`.
//!
//! # Example
//!
//! ```rust
//! use bracken_events::{Classify, InputEvent, InputKind, Key, Mods, MouseButton, Vector2};
//! use bracken_queue::EventQueue;
//!
//! let mut queue: EventQueue<InputEvent> = EventQueue::new();
//! queue.ignore(InputKind::Mouse);
//!
//! queue.push(InputEvent::KeyPressed {
//!     key: Key::Space,
//!     mods: Mods::empty(),
//! });
//! queue.push(InputEvent::MousePressed {
//!     button: MouseButton::Left,
//!     pos: Vector2::ZERO,
//! });
//! queue.push(InputEvent::Quit);
//!
//! // The mouse press was dropped on arrival.
//! let kinds: Vec<InputKind> = queue.drain().map(|event| event.kind()).collect();
//! assert_eq!(kinds, [InputKind::KeyPress, InputKind::Quit]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
#[cfg(feature = "std")]
use core::ops::ControlFlow;
#[cfg(feature = "std")]
use core::time::Duration;

use bracken_events::Classify;

/// A backend that produces events on demand.
///
/// [`poll`][Self::poll] pulls the next pending backend event, returning
/// `None` once nothing is pending right now. It must not block, and it must
/// eventually return `None` within one pumping pass, or
/// [`EventQueue::fetch`] will spin.
pub trait EventSource<E> {
    /// The next pending event, or `None` when the backend is idle.
    fn poll(&mut self) -> Option<E>;
}

/// A FIFO event buffer with an ignore filter and an optional source.
///
/// Events enter through [`push`][Self::push] (or a [`fetch`][Self::fetch]
/// from the attached [`EventSource`]) and leave in arrival order through
/// [`drain`][Self::drain], [`peek`][Self::peek], or the blocking waits.
/// Kinds on the ignore list are dropped at push time; events already
/// buffered when a kind is ignored stay buffered.
///
/// With *autofetch* on (the default), every read first pumps the source, so
/// a game loop can simply drain the queue once per frame.
pub struct EventQueue<E: Classify> {
    buffer: VecDeque<E>,
    ignored: Vec<E::Kind>,
    source: Option<Box<dyn EventSource<E>>>,
    autofetch: bool,
}

impl<E: Classify> EventQueue<E> {
    /// Creates an empty queue with no source and autofetch on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
            ignored: Vec::new(),
            source: None,
            autofetch: true,
        }
    }

    /// Creates an empty queue reading from `source`.
    #[must_use]
    pub fn with_source(source: impl EventSource<E> + 'static) -> Self {
        let mut queue = Self::new();
        queue.set_source(source);
        queue
    }

    /// Attaches (or replaces) the event source.
    pub fn set_source(&mut self, source: impl EventSource<E> + 'static) {
        self.source = Some(Box::new(source));
    }

    /// Whether reads pump the source first.
    #[must_use]
    pub fn autofetch(&self) -> bool {
        self.autofetch
    }

    /// Turns automatic pumping before reads on or off.
    ///
    /// With autofetch off, source events only arrive on an explicit
    /// [`fetch`][Self::fetch] (or a blocking wait, which always pumps).
    pub fn set_autofetch(&mut self, autofetch: bool) {
        self.autofetch = autofetch;
    }

    /// Appends one event, unless its kind is ignored.
    pub fn push(&mut self, event: E) {
        if !self.is_ignored(&event) {
            self.buffer.push_back(event);
        }
    }

    fn is_ignored(&self, event: &E) -> bool {
        self.ignored.iter().any(|kind| event.is_kind_of(*kind))
    }

    /// Starts dropping events of `kind` at push time.
    ///
    /// Family kinds work here: ignoring a family drops every leaf it
    /// includes. Ignoring an already-ignored kind is a no-op.
    pub fn ignore(&mut self, kind: E::Kind) {
        if !self.ignored.contains(&kind) {
            self.ignored.push(kind);
        }
    }

    /// Stops dropping events of `kind`.
    ///
    /// Only removes an exact entry: unignoring a leaf does not carve it out
    /// of an ignored family.
    pub fn unignore(&mut self, kind: E::Kind) {
        self.ignored.retain(|ignored| *ignored != kind);
    }

    /// The kinds currently being dropped.
    #[must_use]
    pub fn ignored(&self) -> &[E::Kind] {
        &self.ignored
    }

    /// Pumps the source until it reports idle, filtering as for `push`.
    ///
    /// Does nothing without a source.
    pub fn fetch(&mut self) {
        let Some(mut source) = self.source.take() else {
            return;
        };
        while let Some(event) = source.poll() {
            self.push(event);
        }
        self.source = Some(source);
    }

    fn autofetch_now(&mut self) {
        if self.autofetch {
            self.fetch();
        }
    }

    /// Empties the queue in arrival order, pumping the source first if
    /// autofetch is on.
    pub fn drain(&mut self) -> impl Iterator<Item = E> + '_ {
        self.autofetch_now();
        self.buffer.drain(..)
    }

    /// Iterates the buffered events without removing them, pumping the
    /// source first if autofetch is on.
    pub fn peek(&mut self) -> impl Iterator<Item = &E> {
        self.autofetch_now();
        self.buffer.iter()
    }

    /// Iterates the buffered events without removing them or touching the
    /// source.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.buffer.iter()
    }

    /// The number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards all buffered events. The ignore list is unaffected.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Blocks until an event is available and returns it.
    ///
    /// Pumps the source (regardless of autofetch), returns the front event
    /// if one is buffered, and otherwise sleeps for `interval` before
    /// trying again. Without a source this returns only once someone has
    /// already pushed into the buffer, so it can block forever.
    #[cfg(feature = "std")]
    pub fn wait(&mut self, interval: Duration) -> E {
        loop {
            self.fetch();
            if let Some(event) = self.buffer.pop_front() {
                return event;
            }
            std::thread::sleep(interval);
        }
    }

    /// Blocks until an event is available, with an escape hatch.
    ///
    /// Works like [`wait`][Self::wait], but before each sleep calls
    /// `on_idle` with the number of empty polls so far (starting at 1).
    /// Returning [`ControlFlow::Break`] abandons the wait, yielding `None`.
    #[cfg(feature = "std")]
    pub fn wait_with(
        &mut self,
        interval: Duration,
        mut on_idle: impl FnMut(u64) -> ControlFlow<()>,
    ) -> Option<E> {
        let mut idle_polls = 0;
        loop {
            self.fetch();
            if let Some(event) = self.buffer.pop_front() {
                return Some(event);
            }
            idle_polls += 1;
            if on_idle(idle_polls).is_break() {
                return None;
            }
            std::thread::sleep(interval);
        }
    }
}

impl<E: Classify> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Classify> Extend<E> for EventQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

impl<E: Classify + fmt::Debug> fmt::Debug for EventQueue<E>
where
    E::Kind: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("buffer", &self.buffer)
            .field("ignored", &self.ignored)
            .field("autofetch", &self.autofetch)
            .field("has_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use bracken_events::{HeldButtons, InputEvent, InputKind, Key, Mods, MouseButton, Vector2};

    fn press(c: char) -> InputEvent {
        InputEvent::KeyPressed {
            key: Key::Char(c),
            mods: Mods::empty(),
        }
    }

    fn release(c: char) -> InputEvent {
        InputEvent::KeyReleased {
            key: Key::Char(c),
            mods: Mods::empty(),
        }
    }

    fn wheel() -> InputEvent {
        InputEvent::MousePressed {
            button: MouseButton::WheelUp,
            pos: Vector2::ZERO,
        }
    }

    fn motion() -> InputEvent {
        InputEvent::MouseMoved {
            pos: Vector2::ZERO,
            rel: Vector2::ZERO,
            held: HeldButtons::new(),
        }
    }

    fn kinds(queue: &mut EventQueue<InputEvent>) -> Vec<InputKind> {
        queue.drain().map(|event| event.kind()).collect()
    }

    /// A source that hands out a fixed script, one event per poll.
    struct Scripted {
        pending: VecDeque<InputEvent>,
    }

    impl Scripted {
        fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
            Self {
                pending: events.into_iter().collect(),
            }
        }
    }

    impl EventSource<InputEvent> for Scripted {
        fn poll(&mut self) -> Option<InputEvent> {
            self.pending.pop_front()
        }
    }

    #[test]
    fn push_respects_leaf_and_family_ignores() {
        let mut queue = EventQueue::new();
        queue.ignore(InputKind::Keyboard);
        queue.ignore(InputKind::MouseMove);

        queue.push(press('a'));
        queue.push(release('a'));
        queue.push(motion());
        queue.push(wheel());
        queue.push(InputEvent::Quit);

        assert_eq!(kinds(&mut queue), vec![InputKind::MousePress, InputKind::Quit]);
    }

    #[test]
    fn unignore_is_exact_and_not_retroactive() {
        let mut queue = EventQueue::new();
        queue.ignore(InputKind::Keyboard);
        queue.ignore(InputKind::Keyboard);
        assert_eq!(queue.ignored(), [InputKind::Keyboard]);

        queue.push(press('a'));
        assert!(queue.is_empty());

        // Unignoring a leaf does not carve it out of the ignored family.
        queue.unignore(InputKind::KeyPress);
        queue.push(press('b'));
        assert!(queue.is_empty());

        queue.unignore(InputKind::Keyboard);
        queue.push(press('c'));
        // The presses dropped while ignored are gone for good.
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn extend_routes_through_the_filter() {
        let mut queue = EventQueue::new();
        queue.ignore(InputKind::Mouse);
        queue.extend([press('a'), wheel(), motion(), InputEvent::Quit]);
        assert_eq!(kinds(&mut queue), vec![InputKind::KeyPress, InputKind::Quit]);
    }

    #[test]
    fn drain_autofetches_from_the_source() {
        let mut queue = EventQueue::with_source(Scripted::new([press('a'), press('b')]));
        assert_eq!(kinds(&mut queue), vec![InputKind::KeyPress, InputKind::KeyPress]);
        // The script is exhausted; nothing more arrives.
        assert_eq!(kinds(&mut queue), vec![]);
    }

    #[test]
    fn autofetch_off_requires_an_explicit_fetch() {
        let mut queue = EventQueue::with_source(Scripted::new([press('a')]));
        queue.set_autofetch(false);
        assert!(!queue.autofetch());

        assert_eq!(kinds(&mut queue), vec![]);
        queue.fetch();
        assert_eq!(kinds(&mut queue), vec![InputKind::KeyPress]);
    }

    #[test]
    fn fetched_events_respect_the_filter() {
        let mut queue = EventQueue::with_source(Scripted::new([wheel(), press('a'), motion()]));
        queue.ignore(InputKind::Mouse);
        queue.fetch();
        assert_eq!(kinds(&mut queue), vec![InputKind::KeyPress]);
    }

    #[test]
    fn peek_and_iter_leave_the_buffer_intact() {
        let mut queue = EventQueue::with_source(Scripted::new([press('a'), press('b')]));
        assert_eq!(queue.peek().count(), 2);
        assert_eq!(queue.peek().count(), 2);
        assert_eq!(queue.iter().count(), 2);
        assert_eq!(queue.len(), 2);

        // Buffered events stay in arrival order.
        let first = queue.iter().next();
        assert_eq!(first, Some(&press('a')));
    }

    #[cfg(feature = "std")]
    mod waiting {
        use super::*;
        use core::ops::ControlFlow;
        use core::time::Duration;

        /// Reports idle for `idle` polls, then delivers one event.
        struct SlowSource {
            idle: u32,
            event: Option<InputEvent>,
        }

        impl EventSource<InputEvent> for SlowSource {
            fn poll(&mut self) -> Option<InputEvent> {
                if self.idle > 0 {
                    self.idle -= 1;
                    return None;
                }
                self.event.take()
            }
        }

        #[test]
        fn wait_returns_a_buffered_event_immediately() {
            let mut queue = EventQueue::new();
            queue.push(InputEvent::Quit);
            assert_eq!(queue.wait(Duration::from_secs(3600)), InputEvent::Quit);
        }

        #[test]
        fn wait_polls_until_the_source_delivers() {
            let mut queue = EventQueue::with_source(SlowSource {
                idle: 3,
                event: Some(press('z')),
            });

            let mut idle_counts = Vec::new();
            let event = queue.wait_with(Duration::ZERO, |n| {
                idle_counts.push(n);
                ControlFlow::Continue(())
            });

            assert_eq!(event, Some(press('z')));
            assert_eq!(idle_counts, vec![1, 2, 3]);
        }

        #[test]
        fn wait_with_gives_up_on_break() {
            let mut queue: EventQueue<InputEvent> = EventQueue::new();
            let mut calls = 0;
            let event = queue.wait_with(Duration::ZERO, |n| {
                calls = n;
                if n < 3 {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            });

            assert_eq!(event, None);
            assert_eq!(calls, 3);
        }
    }
}
