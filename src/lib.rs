#![warn(missing_docs)]

//! Velour widget style engine.
//!
//! Renders the chrome of desktop widgets (buttons, menus, scrollbars,
//! tabs, progress bars and friends) onto a vello scene. The host toolkit
//! describes each element with a [DrawRequest](request::DrawRequest) and
//! the [Style](dispatch::Style) facade answers with paint, geometry,
//! metrics and behavioral hints.

pub use vello as vg;

/// Contains the blur-behind region scheduler.
pub mod blur;

/// Contains the [StyleConfig](config::StyleConfig) struct.
pub mod config;

/// Contains the [Style](dispatch::Style) facade and element routing.
pub mod dispatch;

/// Contains the style error type.
pub mod error;

/// Contains sub-control and sub-element rectangle math.
pub mod geometry;

/// Contains behavioral style hints.
pub mod hints;

/// Contains fixed pixel measurements.
pub mod metrics;

/// Contains the per-element paint routines.
pub mod paint;

/// Contains the color palette and shade helpers.
pub mod palette;

/// Contains an axis-aligned rectangle region for hit masks.
pub mod region;

/// Contains the draw request vocabulary shared by all entry points.
pub mod request;

/// Contains content-size adjustment.
pub mod size;

/// Contains the [Painter](surface::Painter) scene wrapper.
pub mod surface;

pub use config::StyleConfig;
pub use dispatch::{DrawOutcome, Style};
pub use error::StyleError;
pub use palette::Palette;
pub use request::{DrawRequest, Element};
