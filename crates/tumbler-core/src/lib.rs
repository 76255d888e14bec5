//! Core types and traits for the Tumbler widget library.
//!
//! This crate provides foundational types used throughout Tumbler:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with channel-wise interpolation
//! - Layout constraints: [`Constraints`] with per-axis resolution
//! - Animation: [`Easing`], [`Tween`], [`Interpolate`]
//! - Rendering: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Host integration: [`Widget`], [`Event`], [`StateBundle`]

mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod state;
pub mod widget;

pub use animation::{Easing, Interpolate, Tween};
pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::{AxisConstraint, Constraints};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use state::StateBundle;
pub use widget::{LayoutResult, TypeId, Widget};
