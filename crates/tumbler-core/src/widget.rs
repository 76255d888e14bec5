//! Widget trait and related types.
//!
//! A widget implements the capability set a host window needs: measure
//! against constraints, lay out in bounds, paint onto a canvas, react to
//! input, advance animations on the host's frame clock, and round-trip
//! its state through the host's saved-state container.

use crate::canvas::Canvas;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
///
/// # Lifecycle
///
/// 1. `measure`: Compute size given the host's constraints
/// 2. `layout`: Take position within allocated bounds
/// 3. `paint`: Generate draw commands (repeated every repaint)
/// 4. `event` / `tick`: React to input and to the host's frame clock
///
/// `save_state`/`restore_state` bracket a host-driven destroy/recreate
/// cycle; restored widgets render in a resting pose, never mid-animation.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, optionally emitting a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Advance animations by `dt` seconds of frame-clock time.
    ///
    /// Returns true when the widget changed and a repaint is needed.
    fn tick(&mut self, dt: f32) -> bool {
        let _ = dt;
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Contribute state to the host's saved-state container.
    fn save_state(&self) -> Option<serde_json::Value> {
        None
    }

    /// Restore state from the host's saved-state container.
    ///
    /// Malformed or foreign values must leave the widget in a valid
    /// state (typically unchanged), never panic.
    fn restore_state(&mut self, state: &serde_json::Value) {
        let _ = state;
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}
