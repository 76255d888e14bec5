//! Animated pill-switch widget.
//!
//! A rounded-rectangle track anchored to the widget's right edge contains a
//! circular thumb. Toggling slides, resizes, and recolors in one 330 ms
//! ease-in-ease-out motion: the thumb grows from a sliver at the right
//! padding boundary (off) to a full circle flush against the left padding
//! (on) while the track fill crossfades between the two configured colors.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tumbler_core::{
    widget::{LayoutResult, TypeId},
    Canvas, Color, Constraints, Event, MouseButton, Rect, Size, StateBundle, Tween, Widget,
};

/// Intrinsic track width in device-independent units.
pub const TRACK_WIDTH: f32 = 140.0;
/// Intrinsic track height in device-independent units.
pub const TRACK_HEIGHT: f32 = 70.0;
/// Thumb inset from the track on all relevant sides.
pub const TRACK_PADDING: f32 = 21.0;
/// Thumb height (and on-state diameter): track height minus both insets.
pub const THUMB_HEIGHT: f32 = TRACK_HEIGHT - 2.0 * TRACK_PADDING;
/// Duration of the toggle transition in seconds.
pub const TRANSITION_SECS: f32 = 0.33;

const THUMB_STROKE_WIDTH: f32 = 4.0;

/// Message emitted when the switch state changes via input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new switch state
    pub checked: bool,
}

/// The track and thumb rectangles of a non-animating switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchPose {
    /// The pill-shaped background rectangle
    pub track: Rect,
    /// The inner thumb rectangle
    pub thumb: Rect,
}

/// Compute the resting pose for the given bounds and state.
///
/// The track keeps its intrinsic size, hugs the right edge of `bounds`,
/// and centers vertically. Checked: the thumb is a full circle flush
/// against the left padding. Unchecked: the thumb collapses to
/// `min_thumb_width` with its right edge half a thumb short of the right
/// padding boundary.
///
/// Pure and idempotent: identical inputs yield bit-identical rectangles.
#[must_use]
pub fn resting_pose(bounds: Rect, checked: bool, min_thumb_width: f32) -> SwitchPose {
    let track_right = bounds.right();
    let track_left = track_right - TRACK_WIDTH;
    let center_y = bounds.y + bounds.height / 2.0;
    let track = Rect::from_edges(
        track_left,
        center_y - TRACK_HEIGHT / 2.0,
        track_right,
        center_y + TRACK_HEIGHT / 2.0,
    );

    let thumb_top = track.top() + TRACK_PADDING;
    let thumb_bottom = track.bottom() - TRACK_PADDING;
    let thumb = if checked {
        let left = track.left() + TRACK_PADDING;
        Rect::from_edges(left, thumb_top, left + THUMB_HEIGHT, thumb_bottom)
    } else {
        let right = collapsed_thumb_right(&track);
        Rect::from_edges(right - min_thumb_width, thumb_top, right, thumb_bottom)
    };

    SwitchPose { track, thumb }
}

/// Right edge of the collapsed (unchecked) thumb within a track.
fn collapsed_thumb_right(track: &Rect) -> f32 {
    track.right() - TRACK_PADDING - THUMB_HEIGHT / 2.0
}

/// Three tweens under one elapsed clock: thumb width, thumb left edge,
/// track fill color. Same start, same duration, same easing, so the
/// triple reads as a single motion.
#[derive(Debug, Clone)]
struct SwitchTransition {
    width: Tween<f32>,
    left: Tween<f32>,
    color: Tween<Color>,
}

impl SwitchTransition {
    fn new(from_thumb: Rect, from_color: Color, to_thumb: Rect, to_color: Color) -> Self {
        Self {
            width: Tween::new(from_thumb.width, to_thumb.width, TRANSITION_SECS),
            left: Tween::new(from_thumb.x, to_thumb.x, TRANSITION_SECS),
            color: Tween::new(from_color, to_color, TRANSITION_SECS),
        }
    }

    fn advance(&mut self, dt: f32) {
        self.width.advance(dt);
        self.left.advance(dt);
        self.color.advance(dt);
    }

    // All three tweens share one clock; any of them answers for the set.
    fn is_finished(&self) -> bool {
        self.width.is_finished()
    }
}

/// Two-state animated toggle switch.
#[derive(Debug, Clone)]
pub struct Switch {
    /// Intended state: flipped at tap time, authoritative for layout even
    /// while the drawn geometry is still catching up.
    checked: bool,
    /// Track color when checked
    on_color: Color,
    /// Track color when unchecked
    off_color: Color,
    /// Collapsed thumb width for the unchecked resting pose
    min_thumb_width: f32,
    /// Cached widget bounds
    bounds: Rect,
    /// Current track rectangle
    track: Rect,
    /// Current thumb rectangle (the animated degrees of freedom)
    thumb: Rect,
    /// Current track fill color
    track_color: Color,
    /// In-flight transition, if any. Sole writer of `thumb`/`track_color`
    /// while running.
    transition: Option<SwitchTransition>,
}

impl Default for Switch {
    fn default() -> Self {
        let off_color = Color::new(0.7, 0.7, 0.7, 1.0);
        Self {
            checked: false,
            on_color: Color::new(0.2, 0.47, 0.96, 1.0),
            off_color,
            min_thumb_width: 1.0,
            bounds: Rect::default(),
            track: Rect::default(),
            thumb: Rect::default(),
            track_color: off_color,
            transition: None,
        }
    }
}

impl Switch {
    /// Create a new switch in the unchecked state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch with an initial state.
    #[must_use]
    pub fn with_state(checked: bool) -> Self {
        Self::new().checked(checked)
    }

    /// Set the initial state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.track_color = self.color_for_state();
        self
    }

    /// Set the track color for the checked state.
    #[must_use]
    pub fn on_color(mut self, color: Color) -> Self {
        self.on_color = color;
        self.track_color = self.color_for_state();
        self
    }

    /// Set the track color for the unchecked state.
    #[must_use]
    pub fn off_color(mut self, color: Color) -> Self {
        self.off_color = color;
        self.track_color = self.color_for_state();
        self
    }

    /// Set the collapsed thumb width used for the unchecked resting pose.
    ///
    /// Held for the whole lifecycle: the initial unchecked draw and the
    /// end of every shrink animation use the same value.
    #[must_use]
    pub fn min_thumb_width(mut self, width: f32) -> Self {
        self.min_thumb_width = width.max(0.0);
        self
    }

    /// Get current state.
    ///
    /// During a transition this is the intended end state, not the state
    /// the drawn geometry last rested in.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state with no animation.
    ///
    /// Cancels any running transition and snaps geometry and color to the
    /// resting pose. Used for programmatic changes and state restore.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.transition = None;
        self.apply_resting_pose();
    }

    /// Toggle the state with the sliding animation.
    ///
    /// A no-op before the first layout: there is no geometry to animate
    /// yet. A toggle during a running transition starts the new one from
    /// the live interpolated pose, so nothing snaps visually.
    pub fn toggle(&mut self) {
        if !self.has_layout() {
            return;
        }
        self.checked = !self.checked;
        let target = resting_pose(self.bounds, self.checked, self.min_thumb_width);
        self.transition = Some(SwitchTransition::new(
            self.thumb,
            self.track_color,
            target.thumb,
            self.color_for_state(),
        ));
    }

    /// Whether a transition is currently running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Current track rectangle.
    #[must_use]
    pub const fn track_rect(&self) -> Rect {
        self.track
    }

    /// Current thumb rectangle.
    #[must_use]
    pub const fn thumb_rect(&self) -> Rect {
        self.thumb
    }

    /// Current track fill color.
    #[must_use]
    pub const fn track_color(&self) -> Color {
        self.track_color
    }

    /// Contribute this switch's state to the host's saved-state value,
    /// chained with the host's opaque base state.
    #[must_use]
    pub fn save_instance_state(&self, base: serde_json::Value) -> serde_json::Value {
        let payload = SwitchSavedState {
            is_checked: self.checked,
        };
        StateBundle::chain(&payload, base.clone())
            .and_then(StateBundle::into_value)
            .unwrap_or(base)
    }

    /// Restore state from a saved-state value, returning the host's base
    /// state for the caller to pass up.
    ///
    /// A malformed or foreign value leaves the switch untouched (it keeps
    /// its configured initial state) rather than propagating an error.
    /// Restoration never animates.
    pub fn restore_instance_state(&mut self, state: &serde_json::Value) -> serde_json::Value {
        let Some(bundle) = StateBundle::from_value(state) else {
            return serde_json::Value::Null;
        };
        if let Some(payload) = bundle.widget::<SwitchSavedState>() {
            self.set_checked(payload.is_checked);
        }
        bundle.base().clone()
    }

    fn color_for_state(&self) -> Color {
        if self.checked {
            self.on_color
        } else {
            self.off_color
        }
    }

    fn has_layout(&self) -> bool {
        self.bounds.area() > 0.0
    }

    fn apply_resting_pose(&mut self) {
        if self.has_layout() {
            let pose = resting_pose(self.bounds, self.checked, self.min_thumb_width);
            self.track = pose.track;
            self.thumb = pose.thumb;
        }
        self.track_color = self.color_for_state();
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.resolve(Size::new(TRACK_WIDTH, TRACK_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        // A resize mid-animation snaps to the resting pose of the current
        // (intended) state rather than leaving stale interpolated geometry.
        self.transition = None;
        self.apply_resting_pose();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let radius = self.track.height / 2.0;
        canvas.fill_rounded_rect(self.track, radius, self.track_color);
        canvas.stroke_ellipse(self.thumb, Color::WHITE, THUMB_STROKE_WIDTH);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        // Only the release toggles; press and drag are ignored.
        if let Event::MouseUp {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self.has_layout() && self.bounds.contains_point(position) {
                self.toggle();
                return Some(Box::new(SwitchChanged {
                    checked: self.checked,
                }));
            }
        }
        None
    }

    fn tick(&mut self, dt: f32) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.advance(dt);
        if transition.is_finished() {
            // Land exactly on the resting pose so no interpolation drift
            // leaks into the new rest state.
            self.transition = None;
            self.apply_resting_pose();
        } else {
            // Width before position: the right edge is derived from the
            // freshly updated left edge plus the new width.
            self.thumb.width = transition.width.value();
            self.thumb.x = transition.left.value();
            self.track_color = transition.color.value();
        }
        true
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn save_state(&self) -> Option<serde_json::Value> {
        Some(self.save_instance_state(serde_json::Value::Null))
    }

    fn restore_state(&mut self, state: &serde_json::Value) {
        self.restore_instance_state(state);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// The switch's contribution to the saved-state bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SwitchSavedState {
    is_checked: bool,
}
