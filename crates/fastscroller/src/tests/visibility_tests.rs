//! Visibility and fade timing.

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::animation::AnimationPhase;
use crate::event::{PointerEvent, ScrollerAction};
use crate::headless::HeadlessHost;
use crate::layout::{Axis, Size};
use crate::renderer::{Color, ScrollbarResources};
use crate::scroller::DrawPass;
use crate::state::{DragState, Visibility};

#[test]
fn test_starts_hidden_and_draws_nothing() {
    let mut h = vertical_list();

    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::Out);
    assert_eq!(h.draw(), DrawPass::Skipped);
    assert!(h.last_frame().is_empty());
}

#[test]
fn test_scroll_shows_and_fades_in() {
    let mut h = vertical_list();

    h.scroll_content(0.0, 10.0);
    assert_eq!(h.scroller.visibility(), Visibility::Visible);
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::FadingIn);
    assert!(h.scroller.hide_pending());
    assert!(h.host.frame_pending());

    h.advance(ms(250));
    let halfway = h.scroller.opacity();
    assert!(halfway > 0.3 && halfway < 0.7, "opacity {halfway}");

    h.advance(ms(350));
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::In);
    assert!(approx_eq(h.scroller.opacity(), 1.0));
    assert_eq!(h.scroller.alpha(), 255);
    assert_eq!(h.scroller.resources().vertical_thumb.alpha(), 255);
    assert_eq!(h.scroller.resources().horizontal_track.alpha(), 255);
}

#[test]
fn test_auto_hide_after_inactivity() {
    let mut h = vertical_list();

    h.scroll_content(0.0, 10.0);
    h.advance(ms(1400));
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::In);

    // Delay is 1500ms after becoming visible
    h.advance(ms(200));
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::FadingOut);
    assert_eq!(h.scroller.visibility(), Visibility::Visible);
    assert!(!h.scroller.hide_pending());

    h.advance(ms(600));
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::Out);
    assert_eq!(h.scroller.opacity(), 0.0);
    assert_eq!(h.scroller.resources().vertical_thumb.alpha(), 0);
    assert_eq!(h.host.pending_timers(), 0);
    assert_eq!(h.draw(), DrawPass::Skipped);
}

#[test]
fn test_scrolling_rearms_hide_delay() {
    let mut h = vertical_list();

    h.scroll_content(0.0, 10.0);
    h.advance(ms(1000));
    h.scroll_content(0.0, 10.0);
    h.advance(ms(1000));

    // 2000ms since the first scroll, 1000ms since the last
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::In);
    assert_eq!(h.host.pending_timers(), 1);
}

#[test]
fn test_scroll_during_fade_out_reverses_without_jump() {
    let mut h = vertical_list();

    h.scroll_content(0.0, 10.0);
    h.advance(ms(1760));
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::FadingOut);
    let before = h.scroller.opacity();
    assert!(before > 0.0 && before < 1.0);

    h.scroll_content(0.0, 10.0);
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::FadingIn);
    assert!(approx_eq(h.scroller.opacity(), before));
    assert!(h.scroller.hide_pending());

    h.advance(ms(600));
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::In);
}

#[test]
fn test_short_content_never_shows() {
    // 50px of overflow is below the 100px minimum range
    let mut h = harness_with(HeadlessHost::new(
        Size::new(400.0, 1000.0),
        Size::new(400.0, 1050.0),
    ));

    h.scroll_content(0.0, 10.0);
    assert_eq!(h.host.offset().y, 10.0);
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert!(!h.scroller.state().any_needed());
    assert!(!h.scroller.hide_pending());
    assert!(!h.pointer(PointerEvent::down(395.0, 20.0)));
    assert_eq!(h.draw(), DrawPass::Skipped);
}

#[test]
fn test_content_shrinking_forces_hidden() {
    let mut h = vertical_list();
    h.scroll_content(0.0, 10.0);
    h.advance(ms(600));

    h.host.set_content(Size::new(400.0, 1000.0));
    h.scroller.update_scroll_position(&mut h.host, 0.0, 0.0);

    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert_eq!(h.scroller.animation_phase(), AnimationPhase::Out);
    assert_eq!(h.scroller.opacity(), 0.0);
    assert!(!h.scroller.hide_pending());
}

#[test]
fn test_content_equal_to_track_stays_hidden_with_defaults() {
    let scroller = FastScroller::new(
        ScrollbarResources::solid(8.0, Color::WHITE, Color::RED),
        ScrollerConfig::default(),
    )
    .unwrap();
    let mut h = Harness::new(
        HeadlessHost::new(Size::new(400.0, 1000.0), Size::new(400.0, 1000.0)),
        scroller,
    )
    .unwrap();

    h.scroller.update_scroll_position(&mut h.host, 0.0, 0.0);
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert!(!h.scroller.geometry(Axis::Vertical).needed());
    assert!(!h.scroller.hide_pending());
    assert_eq!(h.host.pending_timers(), 0);
    assert!(!h.pointer(PointerEvent::down(398.0, 500.0)));
    assert_eq!(h.draw(), DrawPass::Skipped);
}

#[test]
fn test_content_shrinking_during_drag_forces_hidden() {
    let mut h = vertical_list();
    h.scroll_content(0.0, 4500.0);
    h.advance(ms(600));
    assert!(h.pointer(PointerEvent::down(395.0, 500.0)));
    assert_eq!(h.scroller.drag_state(), DragState::DraggingVertical);

    h.host.set_content(Size::new(400.0, 1000.0));
    h.scroller.update_scroll_position(&mut h.host, 0.0, 0.0);

    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert_eq!(h.scroller.drag_state(), DragState::None);
    assert!(!h.scroller.is_dragging());
    assert_eq!(h.scroller.opacity(), 0.0);
    assert!(!h.scroller.hide_pending());

    // The rest of the gesture no longer scrolls
    let requests = h.host.scroll_requests().len();
    h.pointer(PointerEvent::moved(395.0, 600.0));
    assert_eq!(h.host.scroll_requests().len(), requests);
    assert_eq!(h.host.offset().y, 0.0);
}

#[test]
fn test_zero_scroll_delta_is_ignored() {
    let mut h = vertical_list();

    h.scroller.on_scrolled(&mut h.host, 0.0, 0.0);
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);

    h.scroller.on_scrolled(&mut h.host, 0.0, 1.0);
    assert_eq!(h.scroller.visibility(), Visibility::Visible);
}

#[test]
fn test_observer_sees_redraws() {
    let actions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&actions);
    let scroller = FastScroller::new(
        ScrollbarResources::solid(8.0, Color::WHITE, Color::RED),
        config(),
    )
    .unwrap()
    .on_action(move |action| sink.borrow_mut().push(action));
    let mut h = Harness::new(
        HeadlessHost::new(Size::new(400.0, 1000.0), Size::new(400.0, 10000.0)),
        scroller,
    )
    .unwrap();

    h.scroll_content(0.0, 10.0);
    assert_eq!(actions.borrow().as_slice(), &[ScrollerAction::Redraw]);
    assert!(h.host.invalidations() >= 1);

    h.advance(ms(100));
    assert!(actions.borrow().len() > 1);
    assert!(!actions.borrow().contains(&ScrollerAction::DragStart));
}
