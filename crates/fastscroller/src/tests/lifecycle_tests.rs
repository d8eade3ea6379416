//! Attach, detach and construction.

use super::*;
use crate::error::ScrollerError;
use crate::event::PointerEvent;
use crate::host::HostHook;
use crate::layout::Size;
use crate::renderer::{Color, ScrollbarResources};
use crate::scroller::DrawPass;
use crate::state::Visibility;

#[test]
fn test_attach_registers_all_hooks() {
    let h = vertical_list();

    assert!(h.scroller.is_attached());
    assert_eq!(h.host.subscription_count(), 3);
    assert!(h.host.is_subscribed(HostHook::ScrollListener));
    assert!(h.host.is_subscribed(HostHook::PointerInterceptor));
    assert!(h.host.is_subscribed(HostHook::DrawOver));
}

#[test]
fn test_attach_twice_is_rejected() {
    let mut h = vertical_list();

    let err = h.scroller.attach(&mut h.host).unwrap_err();
    assert_eq!(err, ScrollerError::AlreadyAttached);
    assert_eq!(h.host.subscription_count(), 3);
}

#[test]
fn test_detach_leaves_nothing_behind() {
    let mut h = vertical_list();
    h.scroll_content(0.0, 10.0);
    assert_eq!(h.host.pending_timers(), 1);

    h.detach();
    assert!(!h.scroller.is_attached());
    assert_eq!(h.host.subscription_count(), 0);
    assert_eq!(h.host.pending_timers(), 0);
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert_eq!(h.scroller.opacity(), 0.0);

    // Host activity no longer reaches the scroller
    h.scroll_content(0.0, 100.0);
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
    assert!(!h.pointer(PointerEvent::down(395.0, 60.0)));
    assert_eq!(h.draw(), DrawPass::Skipped);
    h.advance(ms(5000));
    assert_eq!(h.scroller.visibility(), Visibility::Hidden);
}

#[test]
fn test_detach_is_idempotent() {
    let mut h = vertical_list();

    h.detach();
    h.detach();
    assert_eq!(h.host.subscription_count(), 0);
}

#[test]
fn test_detach_mid_drag_releases_thumb() {
    let mut h = vertical_list();
    h.scroll_content(0.0, 4500.0);
    h.pointer(PointerEvent::down(395.0, 500.0));
    assert!(h.scroller.is_dragging());

    h.detach();
    assert!(!h.scroller.is_dragging());
    assert_eq!(h.host.pending_timers(), 0);
}

#[test]
fn test_reattach_after_detach() {
    let mut h = vertical_list();
    h.scroll_content(0.0, 10.0);
    h.detach();

    let subscriptions = h.scroller.attach(&mut h.host).unwrap();
    assert_eq!(h.scroller.subscriptions(), Some(subscriptions));
    assert_eq!(h.host.subscription_count(), 3);

    h.scroll_content(0.0, 10.0);
    assert_eq!(h.scroller.visibility(), Visibility::Visible);
}

#[test]
fn test_attach_to_second_host_after_detach() {
    let mut h = vertical_list();
    h.detach();

    let mut other = HeadlessHost::new(Size::new(300.0, 500.0), Size::new(300.0, 5000.0));
    h.scroller.attach(&mut other).unwrap();
    assert_eq!(other.subscription_count(), 3);
    assert_eq!(h.scroller.state().viewport().size, Size::new(300.0, 500.0));
}

#[test]
fn test_invalid_config_rejected() {
    let result = FastScroller::new(
        ScrollbarResources::solid(8.0, Color::WHITE, Color::RED),
        config().default_thickness(-1.0),
    );
    assert!(matches!(
        result,
        Err(ScrollerError::InvalidConfig {
            field: "default_thickness",
            ..
        })
    ));
}
