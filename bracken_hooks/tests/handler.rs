// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `bracken_hooks` crate.
//!
//! These drive a full [`EventHandler`] with real input events, the way a
//! game loop would: capability triggers on one side, owner state mutated by
//! actions on the other.

use bracken_events::{
    HeldButtons, InputEvent, InputKind, Key, Mods, MouseButton, PointerEvent,
};
use bracken_geom::{Rect, Vector2};
use bracken_hooks::{
    AllTrigger, AnyTrigger, CallbackAction, EventHandler, FamilyTrigger, Hook, KeyPressTrigger,
    KeySpec, KindTrigger, MethodAction, ModSpec, MouseMoveTrigger, MousePressTrigger,
    PredicateTrigger, SequenceAction, Trigger,
};

fn press(key: Key) -> InputEvent {
    InputEvent::KeyPressed {
        key,
        mods: Mods::empty(),
    }
}

fn press_with(key: Key, mods: Mods) -> InputEvent {
    InputEvent::KeyPressed { key, mods }
}

fn click(button: MouseButton, x: f64, y: f64) -> InputEvent {
    InputEvent::MousePressed {
        button,
        pos: Vector2::new(x, y),
    }
}

fn motion(rel: (f64, f64), held: &[MouseButton]) -> InputEvent {
    InputEvent::MouseMoved {
        pos: Vector2::ZERO,
        rel: rel.into(),
        held: HeldButtons::from_slice(held),
    }
}

/// Owner of every hook in the counting tests.
type Count = u32;

fn counting<T: Trigger<InputEvent> + 'static>(trigger: T) -> Hook<Count, InputEvent> {
    Hook::new(
        0,
        trigger,
        CallbackAction::new(|count: &mut Count, _: &InputEvent| *count += 1),
    )
}

fn count_of(handler: &EventHandler<Count, InputEvent>, id: bracken_hooks::HookId) -> Count {
    handler.hook(id).expect("hook present").owner
}

#[test]
fn arrow_keys_steer_the_paddle() {
    let mut handler: EventHandler<Rect, InputEvent> = EventHandler::new();
    handler.append(Hook::new(
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

    handler.handle(&press(Key::Right));
    handler.handle(&press(Key::Right));
    handler.handle(&press(Key::Left));
    // An unrelated key does nothing.
    handler.handle(&press(Key::Char('q')));

    let (_, hook) = handler.hooks().next().unwrap();
    assert_eq!(hook.owner, Rect::new(280.0, 440.0, 96.0, 16.0));
}

#[test]
fn key_trigger_with_any_mods_fires_for_every_chord() {
    let mut handler = EventHandler::new();
    let id = handler.append(counting(KeyPressTrigger::key(Key::Char('a'))));

    handler.handle(&press(Key::Char('a')));
    handler.handle(&press_with(Key::Char('a'), Mods::LSHIFT | Mods::LCTRL));
    handler.handle(&press(Key::Char('b')));
    handler.handle(&InputEvent::KeyReleased {
        key: Key::Char('a'),
        mods: Mods::empty(),
    });

    // Both presses of 'a' count, whatever the modifier chord; the press of
    // 'b' and the release of 'a' do not.
    assert_eq!(count_of(&handler, id), 2);
}

#[test]
fn exact_mod_chords_distinguish_composites_from_sides() {
    let mut handler = EventHandler::new();
    let either_shift = handler.append(counting(KeyPressTrigger::new(
        KeySpec::Is(Key::Char('s')),
        ModSpec::Exactly(Mods::SHIFT),
    )));
    let left_only = handler.append(counting(KeyPressTrigger::new(
        KeySpec::Is(Key::Char('s')),
        ModSpec::Exactly(Mods::LSHIFT),
    )));
    let bare = handler.append(counting(KeyPressTrigger::new(
        KeySpec::Is(Key::Char('s')),
        ModSpec::None,
    )));

    handler.handle(&press_with(Key::Char('s'), Mods::LSHIFT));
    handler.handle(&press_with(Key::Char('s'), Mods::RSHIFT));
    handler.handle(&press_with(Key::Char('s'), Mods::LCTRL));
    handler.handle(&press(Key::Char('s')));

    // The composite accepts either side, the specific side only itself, and
    // `None` only the bare press.
    assert_eq!(count_of(&handler, either_shift), 2);
    assert_eq!(count_of(&handler, left_only), 1);
    assert_eq!(count_of(&handler, bare), 1);
}

#[test]
fn consuming_menu_hook_shields_gameplay() {
    let mut handler = EventHandler::new();
    let gameplay = handler.append(counting(FamilyTrigger::new(InputKind::Keyboard)));
    let quit = handler.append(counting(KindTrigger::new(InputKind::Quit)));
    let menu = handler.prepend(counting(KeyPressTrigger::key(Key::Escape)).consuming());

    handler.handle(&press(Key::Escape));
    assert_eq!(count_of(&handler, menu), 1);
    assert_eq!(count_of(&handler, gameplay), 0);

    handler.handle(&press(Key::Char('x')));
    assert_eq!(count_of(&handler, menu), 1);
    assert_eq!(count_of(&handler, gameplay), 1);

    // Quit is not a keyboard event, so only the leaf-kind hook sees it.
    handler.handle(&InputEvent::Quit);
    assert_eq!(count_of(&handler, gameplay), 1);
    assert_eq!(count_of(&handler, quit), 1);
}

#[test]
fn click_routing_needs_button_and_region() {
    let zone = Rect::new(100.0, 100.0, 50.0, 20.0);
    let mut handler: EventHandler<Vec<Vector2>, InputEvent> = EventHandler::new();
    handler.append(Hook::new(
        Vec::new(),
        AllTrigger::new(vec![
            Box::new(MousePressTrigger::button(MouseButton::Left)) as Box<dyn Trigger<InputEvent>>,
            Box::new(PredicateTrigger::new(move |event: &InputEvent| {
                event
                    .position()
                    .is_some_and(|p| zone.contains_point(p.x, p.y))
            })),
        ]),
        CallbackAction::new(|hits: &mut Vec<Vector2>, event: &InputEvent| {
            hits.push(event.position().expect("mouse press carries a position"));
        }),
    ));

    handler.handle(&click(MouseButton::Left, 120.0, 110.0));
    handler.handle(&click(MouseButton::Left, 10.0, 10.0));
    handler.handle(&click(MouseButton::Right, 120.0, 110.0));

    let (_, hook) = handler.hooks().next().unwrap();
    assert_eq!(hook.owner, vec![Vector2::new(120.0, 110.0)]);
}

#[test]
fn drag_trigger_requires_exact_held_set() {
    let mut handler: EventHandler<Vector2, InputEvent> = EventHandler::new();
    handler.append(Hook::new(
        Vector2::ZERO,
        MouseMoveTrigger::dragging(vec![MouseButton::Left]),
        CallbackAction::new(|camera: &mut Vector2, event: &InputEvent| {
            if let InputEvent::MouseMoved { rel, .. } = event {
                *camera += *rel;
            }
        }),
    ));

    handler.handle(&motion((3.0, 0.0), &[MouseButton::Left]));
    handler.handle(&motion((10.0, 10.0), &[]));
    handler.handle(&motion((10.0, 10.0), &[MouseButton::Left, MouseButton::Right]));
    handler.handle(&motion((0.0, 2.0), &[MouseButton::Left]));

    let (_, hook) = handler.hooks().next().unwrap();
    assert_eq!(hook.owner, Vector2::new(3.0, 2.0));
}

#[test]
fn sequence_action_runs_methods_in_order() {
    #[derive(Default)]
    struct Game {
        score: u32,
        notes: Vec<&'static str>,
    }

    impl Game {
        fn add_point(&mut self) {
            self.score += 1;
        }
    }

    let mut sequence = SequenceAction::new(Vec::new());
    sequence.push(MethodAction::owner_only(Game::add_point));
    sequence.push(MethodAction::with_event(
        |game: &mut Game, _: &InputEvent| {
            game.notes.push(if game.score > 1 { "again" } else { "first" });
        },
    ));

    let mut handler = EventHandler::new();
    let id = handler.append(Hook::new(
        Game::default(),
        KindTrigger::new(InputKind::MousePress),
        sequence,
    ));

    handler.handle(&click(MouseButton::Left, 0.0, 0.0));
    handler.handle(&click(MouseButton::Left, 0.0, 0.0));

    let game = &handler.hook(id).unwrap().owner;
    assert_eq!(game.score, 2);
    // The score step ran before the note step on both dispatches.
    assert_eq!(game.notes, vec!["first", "again"]);
}

#[test]
fn reordering_changes_who_gets_consumed_events() {
    let mut handler = EventHandler::new();
    let gameplay = handler.append(counting(FamilyTrigger::new(InputKind::Keyboard)));
    let overlay = handler.prepend(counting(FamilyTrigger::new(InputKind::Keyboard)).consuming());

    handler.handle(&press(Key::Char('x')));
    assert_eq!(count_of(&handler, overlay), 1);
    assert_eq!(count_of(&handler, gameplay), 0);

    // Demote the overlay; gameplay now sees events first and the overlay
    // still consumes, but after gameplay already ran.
    assert!(handler.move_to_back(overlay));
    handler.handle(&press(Key::Char('x')));
    assert_eq!(count_of(&handler, overlay), 2);
    assert_eq!(count_of(&handler, gameplay), 1);
}
