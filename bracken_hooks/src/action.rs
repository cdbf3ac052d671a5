// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Action`] trait and the stock action set.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// A response to a matched event.
///
/// Actions run with mutable access to the hook's owner and shared access to
/// the event. Their return value is deliberately `()`: dispatch decisions
/// (consuming, ordering) belong to the hook and handler, not to the action.
pub trait Action<O, E> {
    /// Performs this action for `owner` in response to `event`.
    fn perform(&mut self, owner: &mut O, event: &E);
}

/// An action that runs a closure over the owner and the event.
pub struct CallbackAction<O, E> {
    callback: Box<dyn FnMut(&mut O, &E)>,
}

impl<O, E> CallbackAction<O, E> {
    /// Creates an action from a closure.
    pub fn new(callback: impl FnMut(&mut O, &E) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl<O, E> Action<O, E> for CallbackAction<O, E> {
    #[inline]
    fn perform(&mut self, owner: &mut O, event: &E) {
        (self.callback)(owner, event);
    }
}

impl<O, E> fmt::Debug for CallbackAction<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAction").finish_non_exhaustive()
    }
}

/// An action that calls a method on the owner.
///
/// The two constructors fix the call shape up front:
/// [`with_event`][Self::with_event] for methods that take the event,
/// [`owner_only`][Self::owner_only] for methods that do not. Plain function
/// paths work as well as closures:
///
/// ```rust
/// use bracken_hooks::{Action, MethodAction};
///
/// struct Counter(u32);
///
/// impl Counter {
///     fn bump(&mut self) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = Counter(0);
/// let mut action: MethodAction<Counter, ()> = MethodAction::owner_only(Counter::bump);
/// action.perform(&mut counter, &());
/// assert_eq!(counter.0, 1);
/// ```
pub struct MethodAction<O, E> {
    call: MethodCall<O, E>,
}

enum MethodCall<O, E> {
    WithEvent(Box<dyn FnMut(&mut O, &E)>),
    OwnerOnly(Box<dyn FnMut(&mut O)>),
}

impl<O, E> MethodAction<O, E> {
    /// Creates an action calling an owner method that takes the event.
    pub fn with_event(method: impl FnMut(&mut O, &E) + 'static) -> Self {
        Self {
            call: MethodCall::WithEvent(Box::new(method)),
        }
    }

    /// Creates an action calling an owner method that ignores the event.
    pub fn owner_only(method: impl FnMut(&mut O) + 'static) -> Self {
        Self {
            call: MethodCall::OwnerOnly(Box::new(method)),
        }
    }
}

impl<O, E> Action<O, E> for MethodAction<O, E> {
    fn perform(&mut self, owner: &mut O, event: &E) {
        match &mut self.call {
            MethodCall::WithEvent(m) => m(owner, event),
            MethodCall::OwnerOnly(m) => m(owner),
        }
    }
}

impl<O, E> fmt::Debug for MethodAction<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self.call {
            MethodCall::WithEvent(_) => "with_event",
            MethodCall::OwnerOnly(_) => "owner_only",
        };
        f.debug_struct("MethodAction")
            .field("shape", &shape)
            .finish_non_exhaustive()
    }
}

/// An action that performs several sub-actions in order.
pub struct SequenceAction<O, E> {
    actions: Vec<Box<dyn Action<O, E>>>,
}

impl<O, E> SequenceAction<O, E> {
    /// Creates an action performing the given actions in order.
    #[must_use]
    pub fn new(actions: Vec<Box<dyn Action<O, E>>>) -> Self {
        Self { actions }
    }

    /// Appends another sub-action to the end of the sequence.
    pub fn push(&mut self, action: impl Action<O, E> + 'static) {
        self.actions.push(Box::new(action));
    }
}

impl<O, E> Action<O, E> for SequenceAction<O, E> {
    fn perform(&mut self, owner: &mut O, event: &E) {
        for action in &mut self.actions {
            action.perform(owner, event);
        }
    }
}

impl<O, E> fmt::Debug for SequenceAction<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceAction")
            .field("len", &self.actions.len())
            .finish_non_exhaustive()
    }
}
