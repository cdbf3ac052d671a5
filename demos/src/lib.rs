// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Bracken examples.

use std::collections::VecDeque;

use bracken_events::InputEvent;
use bracken_queue::EventSource;

/// An [`EventSource`] replaying a fixed script, standing in for a real
/// windowing backend so the examples run headless.
///
/// Built with [`frames`][Self::frames], the source delivers one frame's
/// batch per pump: each [`EventQueue::fetch`] (or autofetching read) gets
/// the next batch, which lets a scripted `main` loop step through "frames"
/// the way an interactive session would.
///
/// [`EventQueue::fetch`]: bracken_queue::EventQueue::fetch
#[derive(Debug)]
pub struct ScriptedSource {
    current: VecDeque<InputEvent>,
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedSource {
    /// A source delivering all of `events` on the first pump.
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            current: events.into_iter().collect(),
            frames: VecDeque::new(),
        }
    }

    /// A source delivering one batch per pump, in order.
    pub fn frames(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        let mut frames: VecDeque<Vec<InputEvent>> = frames.into_iter().collect();
        let current = frames.pop_front().unwrap_or_default().into();
        Self { current, frames }
    }
}

impl EventSource<InputEvent> for ScriptedSource {
    fn poll(&mut self) -> Option<InputEvent> {
        match self.current.pop_front() {
            Some(event) => Some(event),
            None => {
                // Arm the next frame's batch; it goes out on the next pump.
                if let Some(next) = self.frames.pop_front() {
                    self.current = next.into();
                }
                None
            }
        }
    }
}
