//! Scenario tests that drive a scroller through the headless host.

mod lifecycle_tests;
mod visibility_tests;

use web_time::Duration;

use crate::animation::Easing;
use crate::config::ScrollerConfig;
use crate::headless::{DrawOp, HeadlessHost, Harness};
use crate::layout::{Bounds, Size};
use crate::renderer::{Color, ScrollbarResources};
use crate::scroller::FastScroller;

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn config() -> ScrollerConfig {
    ScrollerConfig::new()
        .minimum_range(100.0)
        .min_touch_area(24.0)
        .easing(Easing::Linear)
}

fn scroller() -> FastScroller {
    FastScroller::new(ScrollbarResources::solid(8.0, Color::WHITE, Color::RED), config()).unwrap()
}

fn harness_with(host: HeadlessHost) -> Harness {
    Harness::new(host, scroller()).unwrap()
}

/// 400x1000 viewport over 10000px of vertical content; thumb is 100px.
fn vertical_list() -> Harness {
    harness_with(HeadlessHost::new(
        Size::new(400.0, 1000.0),
        Size::new(400.0, 10000.0),
    ))
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Filled rectangles of the last paint pass.
fn fills(harness: &Harness) -> Vec<(Bounds, Color)> {
    harness
        .last_frame()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { bounds, color } => Some((*bounds, *color)),
            DrawOp::DebugRect { .. } => None,
        })
        .collect()
}
