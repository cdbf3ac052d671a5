// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hooks and the ordered [`EventHandler`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU64;

use smallvec::SmallVec;

use crate::{Action, Trigger};

/// Identifies a hook within one [`EventHandler`].
///
/// Ids are handed out by [`append`][EventHandler::append] and
/// [`prepend`][EventHandler::prepend], increase monotonically, and are never
/// reused by the issuing handler. An id from one handler means nothing to
/// another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookId(NonZeroU64);

/// A trigger/action pair owned by an [`EventHandler`].
///
/// The hook owns the state its action mutates (`owner`), the condition that
/// fires it (`trigger`), and the response (`action`). A hook with
/// [`consumes`][Self::consumes] set stops the rest of the dispatch after it
/// performs.
pub struct Hook<O, E> {
    /// State passed mutably to the action on every match.
    pub owner: O,
    /// The condition that fires this hook.
    pub trigger: Box<dyn Trigger<E>>,
    /// The response performed when the trigger matches.
    pub action: Box<dyn Action<O, E>>,
    /// Whether a match stops the event from reaching later hooks.
    pub consumes: bool,
}

impl<O, E> Hook<O, E> {
    /// Creates a non-consuming hook.
    pub fn new(
        owner: O,
        trigger: impl Trigger<E> + 'static,
        action: impl Action<O, E> + 'static,
    ) -> Self {
        Self {
            owner,
            trigger: Box::new(trigger),
            action: Box::new(action),
            consumes: false,
        }
    }

    /// Marks this hook as consuming and returns it.
    #[must_use]
    pub fn consuming(mut self) -> Self {
        self.consumes = true;
        self
    }

    fn perform(&mut self, event: &E) {
        self.action.perform(&mut self.owner, event);
    }
}

impl<O, E> fmt::Debug for Hook<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("consumes", &self.consumes)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of hooks dispatching events in priority order.
///
/// Hooks earlier in the order see each event first. [`handle`][Self::handle]
/// fixes the set of matching hooks *before* performing any action, then runs
/// the matched actions in order, stopping after the first consuming hook.
/// Structural edits (append, remove, reorder) therefore take effect for the
/// next event, never retroactively for the one in flight.
///
/// # Example
///
/// ```rust
/// use bracken_hooks::{CallbackAction, EventHandler, Hook, PredicateTrigger};
///
/// let mut handler: EventHandler<Vec<i32>, i32> = EventHandler::new();
/// handler.append(Hook::new(
///     Vec::new(),
///     PredicateTrigger::new(|n: &i32| n % 2 == 0),
///     CallbackAction::new(|seen: &mut Vec<i32>, n: &i32| seen.push(*n)),
/// ));
///
/// for n in 0..4 {
///     handler.handle(&n);
/// }
/// let (_, hook) = handler.hooks().next().unwrap();
/// assert_eq!(hook.owner, [0, 2]);
/// ```
pub struct EventHandler<O, E> {
    entries: Vec<(HookId, Hook<O, E>)>,
    next_id: u64,
}

impl<O, E> EventHandler<O, E> {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> HookId {
        let id = HookId(NonZeroU64::new(self.next_id).expect("id counter starts at 1"));
        self.next_id += 1;
        id
    }

    fn position(&self, id: HookId) -> Option<usize> {
        self.entries.iter().position(|(eid, _)| *eid == id)
    }

    /// Adds a hook at the back (lowest priority) and returns its id.
    pub fn append(&mut self, hook: Hook<O, E>) -> HookId {
        let id = self.alloc_id();
        self.entries.push((id, hook));
        id
    }

    /// Adds a hook at the front (highest priority) and returns its id.
    pub fn prepend(&mut self, hook: Hook<O, E>) -> HookId {
        let id = self.alloc_id();
        self.entries.insert(0, (id, hook));
        id
    }

    /// Moves an existing hook to the back, keeping everything else in order.
    ///
    /// Returns `false` when the id is unknown.
    pub fn move_to_back(&mut self, id: HookId) -> bool {
        match self.position(id) {
            Some(i) => {
                let entry = self.entries.remove(i);
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// Moves an existing hook to the front, keeping everything else in order.
    ///
    /// Returns `false` when the id is unknown.
    pub fn move_to_front(&mut self, id: HookId) -> bool {
        match self.position(id) {
            Some(i) => {
                let entry = self.entries.remove(i);
                self.entries.insert(0, entry);
                true
            }
            None => false,
        }
    }

    /// Removes a hook, returning it so the owner state can be recovered.
    pub fn remove(&mut self, id: HookId) -> Option<Hook<O, E>> {
        self.position(id).map(|i| self.entries.remove(i).1)
    }

    /// Removes several hooks, returning the ids that were actually present.
    ///
    /// Unknown ids are skipped, not errors.
    pub fn remove_many(&mut self, ids: impl IntoIterator<Item = HookId>) -> Vec<HookId> {
        ids.into_iter()
            .filter(|id| self.remove(*id).is_some())
            .collect()
    }

    /// Whether a hook with this id is present.
    #[must_use]
    pub fn contains(&self, id: HookId) -> bool {
        self.position(id).is_some()
    }

    /// Borrows a hook by id.
    #[must_use]
    pub fn hook(&self, id: HookId) -> Option<&Hook<O, E>> {
        self.position(id).map(|i| &self.entries[i].1)
    }

    /// The number of hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the handler has no hooks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the hooks in priority order.
    pub fn hooks(&self) -> impl Iterator<Item = (HookId, &Hook<O, E>)> {
        self.entries.iter().map(|(id, hook)| (*id, hook))
    }

    /// Dispatches one event through the hooks in priority order.
    ///
    /// The set of matching hooks is decided up front from the event alone;
    /// each matched hook then performs its action. A consuming hook stops
    /// the remainder of the matched set after its action runs. Hooks whose
    /// triggers did not match are never consulted again for this event.
    pub fn handle(&mut self, event: &E) {
        let matched: SmallVec<[usize; 8]> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, (_, hook))| hook.trigger.matches(event).then_some(i))
            .collect();
        for i in matched {
            let (_, hook) = &mut self.entries[i];
            hook.perform(event);
            if hook.consumes {
                break;
            }
        }
    }
}

impl<O, E> Default for EventHandler<O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E> fmt::Debug for EventHandler<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
