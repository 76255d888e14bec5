//! Draw commands.
//!
//! All rendering reduces to these primitives.

use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlined shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles and ellipses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw an ellipse inscribed in a bounding rectangle
    Ellipse {
        /// Bounding rectangle
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled rounded rectangle.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled ellipse.
    #[must_use]
    pub fn filled_ellipse(bounds: Rect, color: Color) -> Self {
        Self::Ellipse {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a stroked ellipse.
    #[must_use]
    pub fn stroked_ellipse(bounds: Rect, color: Color, width: f32) -> Self {
        Self::Ellipse {
            bounds,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        }
    }

    /// The bounding rectangle of this command.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::Ellipse { bounds, .. } => *bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, 1.0);
    }

    #[test]
    fn test_box_style_fill() {
        let style = BoxStyle::fill(Color::WHITE);
        assert_eq!(style.fill, Some(Color::WHITE));
        assert!(style.stroke.is_none());
    }

    #[test]
    fn test_box_style_stroke() {
        let stroke = StrokeStyle {
            color: Color::WHITE,
            width: 4.0,
        };
        let style = BoxStyle::stroke(stroke.clone());
        assert!(style.fill.is_none());
        assert_eq!(style.stroke, Some(stroke));
    }

    #[test]
    fn test_rounded_rect_command() {
        let cmd = DrawCommand::rounded_rect(Rect::new(0.0, 0.0, 140.0, 70.0), 35.0, Color::BLACK);
        match cmd {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(radius, CornerRadius::uniform(35.0));
                assert_eq!(style.fill, Some(Color::BLACK));
            }
            DrawCommand::Ellipse { .. } => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_stroked_ellipse_command() {
        let bounds = Rect::new(21.0, 21.0, 28.0, 28.0);
        let cmd = DrawCommand::stroked_ellipse(bounds, Color::WHITE, 4.0);
        assert_eq!(cmd.bounds(), bounds);
        match cmd {
            DrawCommand::Ellipse { style, .. } => {
                assert!(style.fill.is_none());
                assert_eq!(style.stroke.unwrap().width, 4.0);
            }
            DrawCommand::Rect { .. } => panic!("Expected Ellipse command"),
        }
    }
}
