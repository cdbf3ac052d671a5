// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hook dispatch basics.
//!
//! Wire a queue and two event handlers into a miniature game loop, then
//! replay a scripted input session through them: arrow keys steer a paddle,
//! escape pauses (gating the paddle handler), and a quit event ends the
//! session.
//!
//! Run:
//! - `cargo run -p bracken_examples --example hook_dispatch`

use bracken_events::{InputEvent, InputKind, Key, Mods};
use bracken_examples::ScriptedSource;
use bracken_geom::Rect;
use bracken_hooks::{
    AnyTrigger, CallbackAction, EventHandler, Hook, KeyPressTrigger, KindTrigger, Trigger,
};
use bracken_queue::EventQueue;

fn press(key: Key) -> InputEvent {
    InputEvent::KeyPressed {
        key,
        mods: Mods::empty(),
    }
}

fn main() {
    // One batch per frame: steer right twice, pause (the gated press is
    // lost), resume and steer left, then quit.
    let script = ScriptedSource::frames([
        vec![press(Key::Right), press(Key::Right)],
        vec![press(Key::Escape), press(Key::Right)],
        vec![press(Key::Escape), press(Key::Left)],
        vec![InputEvent::Quit],
    ]);
    let mut queue = EventQueue::with_source(script);
    queue.ignore(InputKind::Mouse);

    // The paddle hook owns the paddle; steering is one hook with a
    // two-sided trigger.
    let mut paddle_hooks: EventHandler<Rect, InputEvent> = EventHandler::new();
    let paddle = paddle_hooks.append(Hook::new(
        Rect::new(272.0, 440.0, 96.0, 16.0),
        AnyTrigger::new(vec![
            Box::new(KeyPressTrigger::key(Key::Left)) as Box<dyn Trigger<InputEvent>>,
            Box::new(KeyPressTrigger::key(Key::Right)),
        ]),
        CallbackAction::new(|paddle: &mut Rect, event: &InputEvent| {
            let dx = match event {
                InputEvent::KeyPressed { key: Key::Left, .. } => -8.0,
                _ => 8.0,
            };
            paddle.translate_mut((dx, 0.0));
        }),
    ));

    // Session hooks each own their own flag.
    let mut session_hooks: EventHandler<bool, InputEvent> = EventHandler::new();
    let paused = session_hooks.append(Hook::new(
        false,
        KeyPressTrigger::key(Key::Escape),
        CallbackAction::new(|paused: &mut bool, _: &InputEvent| *paused = !*paused),
    ));
    let running = session_hooks.append(Hook::new(
        true,
        KindTrigger::new(InputKind::Quit),
        CallbackAction::new(|running: &mut bool, _: &InputEvent| *running = false),
    ));

    let mut frame = 0;
    while session_hooks.hook(running).is_some_and(|hook| hook.owner) {
        frame += 1;
        let events: Vec<InputEvent> = queue.drain().collect();
        if events.is_empty() {
            println!("script exhausted without a quit event");
            break;
        }

        for event in &events {
            session_hooks.handle(event);
            // While paused, gameplay handlers sit the event out.
            if !session_hooks.hook(paused).is_some_and(|hook| hook.owner) {
                paddle_hooks.handle(event);
            }
        }

        let x = paddle_hooks.hook(paddle).map_or(0.0, |hook| hook.owner.x);
        let is_paused = session_hooks.hook(paused).is_some_and(|hook| hook.owner);
        println!("frame {frame}: paddle.x = {x}, paused = {is_paused}");
    }

    println!("session over after {frame} frames");
}
