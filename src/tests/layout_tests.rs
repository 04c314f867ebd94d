// Copyright 2026 the Bezel Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for layout propagation and the status strip.

use test_env_log::test;

use super::harness::Recorder;
use crate::{Frame, Group, Position, Rect, StatusBar, Widget, UP_BOX};

fn root_with_bar() -> Group {
    let mut root = Group::new(Rect::new(0, 0, 300, 200));
    root.add(StatusBar::new(24));
    root.layout();
    root
}

fn bar(root: &mut Group) -> &mut StatusBar {
    root.children_mut()[0]
        .downcast_mut::<StatusBar>()
        .expect("status bar child")
}

#[test]
fn strip_anchors_to_parent_content_bottom() {
    let mut root = Group::new(Rect::new(0, 0, 300, 200));
    root.add(Frame::new(Rect::new(0, 150, 300, 40)));
    root.add(Frame::new(Rect::new(0, 100, 120, 50)));
    root.add(StatusBar::new(24));
    root.layout();

    // the strip spans the content width, bottom-anchored
    assert_eq!(root.children()[2].rect(), Rect::new(0, 176, 300, 24));
    // the overlapping sibling is shortened, never moved
    assert_eq!(root.children()[0].rect(), Rect::new(0, 150, 300, 26));
    // the clear sibling is untouched
    assert_eq!(root.children()[1].rect(), Rect::new(0, 100, 120, 50));
}

#[test]
fn strip_respects_parent_box_insets() {
    let mut root = Group::new(Rect::new(0, 0, 300, 200));
    root.set_box(&UP_BOX); // dx=2, dw=4, dh=4
    root.add(StatusBar::new(24));
    root.layout();
    assert_eq!(root.children()[0].rect(), Rect::new(2, 172, 296, 24));
}

#[test]
fn relayout_is_idempotent() {
    let mut root = Group::new(Rect::new(0, 0, 300, 200));
    root.add(Frame::new(Rect::new(0, 150, 300, 40)));
    root.add(StatusBar::new(24));
    root.layout();
    root.layout();
    // once shortened to meet the strip, the sibling no longer overlaps
    assert_eq!(root.children()[0].rect(), Rect::new(0, 150, 300, 26));
    assert_eq!(root.children()[1].rect(), Rect::new(0, 176, 300, 24));
}

#[test]
fn shrunk_sibling_group_loses_its_size_baselines() {
    let mut root = Group::new(Rect::new(0, 0, 300, 200));
    let mut inner = Group::new(Rect::new(0, 120, 300, 70)); // bottom = 190
    inner.add(Frame::new(Rect::new(0, 0, 50, 20)));
    root.add(inner);
    root.add(Group::new(Rect::new(0, 0, 300, 50))); // no overlap
    root.add(StatusBar::new(24));
    root.layout();

    assert_eq!(root.children()[0].rect(), Rect::new(0, 120, 300, 56));
    let inner = root.children()[0].downcast_ref::<Group>().expect("group");
    assert!(inner.initial_sizes().is_none());
    let control = root.children()[1].downcast_ref::<Group>().expect("group");
    assert!(control.initial_sizes().is_some());
}

#[test]
fn left_slot_geometry() {
    let mut root = root_with_bar();
    let bar = bar(&mut root);
    bar.set("Hello", Position::Left);
    // strip box THIN_DOWN: dx=1, dw=dh=2; slot box FLAT: dw=0.
    // "Hello" at size 12 measures 30x14; padded width 32;
    // height 24 - (2+2)*2 = 16; y = 2 + 2 = 4.
    assert_eq!(
        bar.slot(Position::Left).map(|s| s.rect()),
        Some(Rect::new(1, 4, 32, 16))
    );
}

#[test]
fn center_slot_positions_against_full_right_edge() {
    let mut root = root_with_bar();
    let bar = bar(&mut root);
    bar.set("Hello", Position::Center);
    assert_eq!(
        bar.slot(Position::Center).map(|s| s.rect()),
        Some(Rect::new((300 - 32) / 2, 4, 32, 16))
    );
}

#[test]
fn right_slot_geometry() {
    let mut root = root_with_bar();
    let bar = bar(&mut root);
    bar.set("Hello", Position::Right);
    assert_eq!(
        bar.slot(Position::Right).map(|s| s.rect()),
        Some(Rect::new(300 - 32 - 2 - 2, 4, 32, 16))
    );
}

#[test]
fn formatted_center_text() {
    let mut root = root_with_bar();
    let bar = bar(&mut root);
    bar.set_fmt(Position::Center, format_args!("{} items", 5));
    let slot = bar.slot(Position::Center).expect("slot");
    assert_eq!(slot.label(), "5 items");
    // 7 graphemes at advance 6 = 42, plus (0 + 1) * 2 padding
    assert_eq!(slot.rect().width, 44);
    assert_eq!(slot.rect().x, (300 - 44) / 2);
}

#[test]
fn slot_round_trip_is_clean() {
    let mut root = root_with_bar();
    let bar = bar(&mut root);
    bar.set("Hello", Position::Right);
    bar.set("", Position::Right);
    assert!(bar.slot(Position::Right).is_none());
    assert!(bar.needs_repaint());
}

#[test]
fn layout_refreshes_slot_geometry() {
    // text set before the strip ever gets its real width
    let mut root = Group::new(Rect::new(0, 0, 300, 200));
    let mut strip = StatusBar::new(24);
    strip.set("Hello", Position::Right);
    root.add(strip);
    root.layout();
    let bar = bar(&mut root);
    assert_eq!(
        bar.slot(Position::Right).map(|s| s.rect()),
        Some(Rect::new(300 - 32 - 2 - 2, 4, 32, 16))
    );
}

#[test]
fn draw_pass_emits_text_and_clears_damage() {
    let mut root = root_with_bar();
    bar(&mut root).set("Ready", Position::Left);

    let mut recorder = Recorder::new();
    root.draw(&mut recorder);

    // slot content rect is the slot rect (flat box); label is left-inside,
    // vertically centered: y = 176 + 4 + (16 - 14) / 2
    assert_eq!(recorder.texts(), vec![("Ready".to_owned(), 1, 181)]);
    // the strip bezel itself was drawn
    assert!(recorder.line_count() >= 4);
    assert!(!bar(&mut root).needs_repaint());
}
