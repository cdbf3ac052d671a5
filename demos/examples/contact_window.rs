// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact window walkthrough.
//!
//! Slide a ball across two bricks and print the contact events each frame.
//! Overlaps are detected with `bracken_geom` rect queries and fed to a
//! `ContactState`, which debounces them: brushing past a brick produces one
//! `Started` and, a window later, one `Ended`, no matter how the overlap
//! flickers in between.
//!
//! Run:
//! - `cargo run -p bracken_examples --example contact_window`

use bracken_contact::{ContactEvent, ContactState};
use bracken_geom::{Rect, Vector2};

const BALL: u32 = 0;

fn main() {
    let bricks = [
        (1_u32, Rect::new(40.0, 0.0, 30.0, 20.0)),
        (2_u32, Rect::new(80.0, 0.0, 30.0, 20.0)),
    ];
    let mut ball = Rect::new(0.0, 4.0, 16.0, 12.0);
    let velocity = Vector2::new(14.0, 0.0);

    // Contact data is the overlap region, refreshed on every report.
    let mut contacts: ContactState<u32, Rect> = ContactState::new();

    for frame in 1..=12 {
        ball.translate_mut(velocity);

        for (brick, rect) in ball.find_overlaps_in(bricks.iter().copied()) {
            contacts.register(BALL, brick, ball.clip(rect));
        }

        let events = contacts.flush();
        if events.is_empty() {
            println!("frame {frame:2}: ball.x = {:5.1}", ball.x);
            continue;
        }
        for event in events {
            let label = match &event {
                ContactEvent::Started(_) => "started",
                ContactEvent::Continued(_) => "continued",
                ContactEvent::Ended(_) => "ended",
            };
            let pair = event.pair();
            println!(
                "frame {frame:2}: ball.x = {:5.1}  {label} with brick {} (overlap {:.0}x{:.0})",
                ball.x, pair.b, pair.contacts.w, pair.contacts.h,
            );
        }
    }
}
