// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_hooks --heading-base-level=0

//! Bracken Hooks: trigger/action dispatch over an ordered hook list.
//!
//! A [`Hook`] pairs a [`Trigger`] (when to fire) with an [`Action`] (what to
//! do) and the state the action mutates. An [`EventHandler`] keeps hooks in
//! priority order and walks each event front to back, letting a consuming
//! hook stop propagation.
//!
//! Triggers come in two layers. The generic ones ([`AlwaysTrigger`],
//! [`PredicateTrigger`], [`AttrTrigger`], [`AllTrigger`], [`AnyTrigger`])
//! work with any event type. The input-shaped ones ([`KeyPressTrigger`],
//! [`MousePressTrigger`], [`MouseMoveTrigger`] and friends) work with any
//! event type implementing the capability traits from `bracken_events`.
//!
//! ## Features
//!
//! - `std` *(default)*: compile with the standard library. The crate itself
//!   is `no_std` + `alloc`; this only switches dependency modes.
//!
//! # Example
//!
//! ```rust
//! use bracken_events::{InputEvent, Key, Mods};
//! use bracken_geom::Rect;
//! use bracken_hooks::{CallbackAction, EventHandler, Hook, KeyPressTrigger};
//!
//! let mut handler: EventHandler<Rect, InputEvent> = EventHandler::new();
//! handler.append(Hook::new(
//!     Rect::new(40.0, 440.0, 96.0, 16.0),
//!     KeyPressTrigger::key(Key::Right),
//!     CallbackAction::new(|paddle: &mut Rect, _: &InputEvent| paddle.translate_mut((8.0, 0.0))),
//! ));
//!
//! let right = InputEvent::KeyPressed {
//!     key: Key::Right,
//!     mods: Mods::empty(),
//! };
//! handler.handle(&right);
//! handler.handle(&right);
//!
//! let (_, hook) = handler.hooks().next().unwrap();
//! assert_eq!(hook.owner.x, 56.0);
//! ```

#![no_std]

extern crate alloc;

mod action;
mod handler;
mod trigger;

pub use action::{Action, CallbackAction, MethodAction, SequenceAction};
pub use handler::{EventHandler, Hook, HookId};
pub use trigger::{
    AllTrigger, AlwaysTrigger, AnyTrigger, AttrTrigger, ButtonSpec, FamilyTrigger, HeldSpec,
    KeyPressTrigger, KeyReleaseTrigger, KeySpec, KindTrigger, ModSpec, MouseMoveTrigger,
    MousePressTrigger, MouseReleaseTrigger, PredicateTrigger, Trigger,
};
