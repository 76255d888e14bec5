//! Canvas abstraction and the recording implementation.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::{Color, CornerRadius, Rect};

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend: the switch
/// needs a filled (optionally rounded) rectangle and a fill-or-stroke
/// ellipse, nothing more.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a filled rounded rectangle.
    ///
    /// Backends without rounded-rectangle support inherit this default,
    /// which degrades to a plain filled rectangle rather than omitting
    /// the draw.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let _ = radius;
        self.fill_rect(rect, color);
    }

    /// Draw a filled ellipse inscribed in a bounding rectangle.
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);

    /// Draw a stroked ellipse inscribed in a bounding rectangle.
    fn stroke_ellipse(&mut self, bounds: Rect, color: Color, width: f32);
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another process/GPU)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_ellipse(bounds, color));
    }

    fn stroke_ellipse(&mut self, bounds: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::stroked_ellipse(bounds, color, width));
    }
}
