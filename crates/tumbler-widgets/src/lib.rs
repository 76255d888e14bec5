//! Widget implementations for the Tumbler UI library.

pub mod switch;

pub use switch::{
    resting_pose, Switch, SwitchChanged, SwitchPose, THUMB_HEIGHT, TRACK_HEIGHT, TRACK_PADDING,
    TRACK_WIDTH, TRANSITION_SECS,
};
