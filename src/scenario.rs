//! Scripted scenarios played against the headless host.
//!
//! A scenario describes a host view (viewport, content, padding, direction)
//! and a list of steps. Each step is fed through a [`Harness`] and the
//! scroller's observable state is recorded after it.

use std::path::Path;

use fastscroller::headless::{DrawOp, Harness, HeadlessHost};
use fastscroller::{
    AnimationPhase, Bounds, DragState, DrawPass, FastScroller, LayoutDirection, Padding, Point,
    PointerEvent, Size, Visibility,
};
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// One input to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// User scroll by a delta
    Scroll { dx: f32, dy: f32 },
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Cancel { x: f32, y: f32 },
    /// Let time pass, delivering timers and frames
    Advance { ms: u64 },
    Resize { width: f32, height: f32 },
    /// Run a paint pass
    Draw,
    Detach,
    Attach,
}

/// Host view and input script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub viewport: Size,
    pub content: Size,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub direction: LayoutDirection,
    #[serde(default)]
    pub show_layout_bounds: bool,
    pub steps: Vec<Step>,
}

/// Paint pass outcome in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawSummary {
    pub pass: DrawPass,
    pub fills: Vec<Bounds>,
    pub outlines: Vec<Bounds>,
}

/// Scroller state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: Step,
    /// Milliseconds since the scenario started
    pub time_ms: u128,
    pub visibility: Visibility,
    pub drag: DragState,
    pub animation: AnimationPhase,
    pub opacity: f32,
    pub offset: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw: Option<DrawSummary>,
}

/// Full playback record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub steps: Vec<StepReport>,
}

impl Report {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn last(&self) -> Option<&StepReport> {
        self.steps.last()
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&json)?;
        log::info!(
            "Loaded scenario from {:?} ({} steps)",
            path,
            scenario.steps.len()
        );
        Ok(scenario)
    }

    fn host(&self) -> HeadlessHost {
        HeadlessHost::new(self.viewport, self.content)
            .with_padding(self.padding)
            .with_direction(self.direction)
            .with_layout_bounds(self.show_layout_bounds)
    }

    /// Play every step and record the state after each.
    pub fn run(&self, config: &AppConfig) -> AppResult<Report> {
        let scroller = FastScroller::new(config.resources(), config.scroller.clone())?;
        let mut harness = Harness::new(self.host(), scroller)?;
        let mut steps = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            log::debug!("Step {}: {:?}", index, step);
            let mut consumed = None;
            let mut draw = None;

            match *step {
                Step::Scroll { dx, dy } => harness.scroll_content(dx, dy),
                Step::Down { x, y } => consumed = Some(harness.pointer(PointerEvent::down(x, y))),
                Step::Move { x, y } => consumed = Some(harness.pointer(PointerEvent::moved(x, y))),
                Step::Up { x, y } => consumed = Some(harness.pointer(PointerEvent::up(x, y))),
                Step::Cancel { x, y } => {
                    consumed = Some(harness.pointer(PointerEvent::cancel(x, y)))
                }
                Step::Advance { ms } => harness.advance(Duration::from_millis(ms)),
                Step::Resize { width, height } => {
                    if width < 0.0 || height < 0.0 {
                        return Err(AppError::InvalidStep {
                            index,
                            reason: format!("negative size {}x{}", width, height),
                        });
                    }
                    harness.resize(Size::new(width, height));
                }
                Step::Draw => {
                    let pass = harness.draw();
                    draw = Some(summarize(pass, harness.last_frame()));
                }
                Step::Detach => harness.detach(),
                Step::Attach => {
                    harness.scroller.attach(&mut harness.host)?;
                }
            }

            steps.push(StepReport {
                index,
                step: step.clone(),
                time_ms: harness.host.elapsed().as_millis(),
                visibility: harness.scroller.visibility(),
                drag: harness.scroller.drag_state(),
                animation: harness.scroller.animation_phase(),
                opacity: harness.scroller.opacity(),
                offset: harness.host.offset(),
                consumed,
                draw,
            });
        }

        Ok(Report { steps })
    }
}

fn summarize(pass: DrawPass, ops: &[DrawOp]) -> DrawSummary {
    let mut fills = Vec::new();
    let mut outlines = Vec::new();
    for op in ops {
        match op {
            DrawOp::Fill { bounds, .. } => fills.push(*bounds),
            DrawOp::DebugRect { bounds } => outlines.push(*bounds),
        }
    }
    DrawSummary {
        pass,
        fills,
        outlines,
    }
}
