//! fastscroll - Scenario runner for the fastscroller overlay
//!
//! Loads an app configuration and a JSON scenario, plays the scenario against
//! the headless host and reports the scroller's state after every step.

pub mod config;
pub mod error;
pub mod scenario;

pub use config::{AppConfig, Appearance, LogLevel, CONFIG_VERSION};
pub use error::{AppError, AppResult};
pub use scenario::{DrawSummary, Report, Scenario, Step, StepReport};
