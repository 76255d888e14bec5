//! Full lifecycle tests for the switch: measure, layout, input, animation
//! frames, paint, and state restore, driven through the public API only.

use tumbler_core::{
    Canvas, Color, Constraints, DrawCommand, Event, MouseButton, Point, Rect, RecordingCanvas,
    Size, Widget,
};
use tumbler_widgets::{resting_pose, Switch, SwitchChanged, TRACK_HEIGHT, TRACK_WIDTH};

const FRAME: f32 = 1.0 / 60.0;

fn tap(switch: &mut Switch) -> Option<SwitchChanged> {
    let center = switch.bounds().center();
    let result = switch.event(&Event::MouseUp {
        position: Point::new(center.x, center.y),
        button: MouseButton::Left,
    });
    result.and_then(|message| message.downcast::<SwitchChanged>().ok().map(|m| *m))
}

fn run_to_rest(switch: &mut Switch) -> usize {
    let mut frames = 0;
    while switch.tick(FRAME) {
        frames += 1;
        assert!(frames < 1000, "transition never settled");
    }
    frames
}

#[test]
fn test_measure_then_layout_then_tap_then_settle() {
    let mut switch = Switch::new();

    let size = switch.measure(Constraints::loose(Size::new(400.0, 200.0)));
    assert_eq!(size, Size::new(TRACK_WIDTH, TRACK_HEIGHT));
    switch.layout(Rect::from_size(size));

    let message = tap(&mut switch).expect("tap inside bounds emits a change");
    assert!(message.checked);
    assert!(switch.is_animating());

    let frames = run_to_rest(&mut switch);
    // 330 ms at 60 fps
    assert_eq!(frames, 20);

    let expected = resting_pose(switch.bounds(), true, 1.0);
    assert_eq!(switch.thumb_rect(), expected.thumb);
    assert_eq!(switch.track_rect(), expected.track);
}

#[test]
fn test_paint_matches_live_geometry_every_frame() {
    let mut switch = Switch::new();
    switch.layout(Rect::new(0.0, 0.0, 300.0, 100.0));
    tap(&mut switch);

    while switch.tick(FRAME) {
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].bounds(), switch.track_rect());
        assert_eq!(commands[1].bounds(), switch.thumb_rect());
    }
}

#[test]
fn test_preemptive_tap_keeps_geometry_continuous() {
    let mut switch = Switch::new();
    switch.layout(Rect::from_size(Size::new(TRACK_WIDTH, TRACK_HEIGHT)));
    tap(&mut switch);
    for _ in 0..10 {
        switch.tick(FRAME);
    }

    let thumb_before = switch.thumb_rect();
    let color_before = switch.track_color();

    let message = tap(&mut switch).expect("second tap emits a change");
    assert!(!message.checked);

    // The reversed transition starts from the live pose: a zero-length
    // frame leaves the drawn geometry exactly where it was.
    switch.tick(0.0);
    assert_eq!(switch.thumb_rect(), thumb_before);
    assert_eq!(switch.track_color(), color_before);

    run_to_rest(&mut switch);
    let expected = resting_pose(switch.bounds(), false, 1.0);
    assert_eq!(switch.thumb_rect(), expected.thumb);
}

#[test]
fn test_state_survives_host_recreation() {
    let mut first = Switch::new();
    first.layout(Rect::from_size(Size::new(TRACK_WIDTH, TRACK_HEIGHT)));
    tap(&mut first);
    run_to_rest(&mut first);
    assert!(first.is_checked());

    let saved = first.save_instance_state(serde_json::json!({"generation": 7}));

    // Recreate the widget as a host would after a teardown.
    let mut second = Switch::new();
    second.layout(Rect::from_size(Size::new(TRACK_WIDTH, TRACK_HEIGHT)));
    let base = second.restore_instance_state(&saved);

    assert!(second.is_checked());
    assert!(!second.is_animating());
    assert_eq!(base, serde_json::json!({"generation": 7}));

    // Restored geometry is the checked resting pose, not an animation.
    let expected = resting_pose(second.bounds(), true, 1.0);
    assert_eq!(second.thumb_rect(), expected.thumb);
}

#[test]
fn test_restore_from_unrelated_host_blob_is_harmless() {
    let mut switch = Switch::new();
    switch.layout(Rect::from_size(Size::new(TRACK_WIDTH, TRACK_HEIGHT)));
    switch.restore_instance_state(&serde_json::json!("not a bundle"));
    assert!(!switch.is_checked());
    assert!(!switch.is_animating());
}

#[test]
fn test_custom_colors_flow_through_lifecycle() {
    let on = Color::from_hex("#1db954").unwrap();
    let off = Color::from_hex("#535353").unwrap();
    let mut switch = Switch::new().on_color(on).off_color(off);
    switch.layout(Rect::from_size(Size::new(TRACK_WIDTH, TRACK_HEIGHT)));
    assert_eq!(switch.track_color(), off);

    tap(&mut switch);
    run_to_rest(&mut switch);
    assert_eq!(switch.track_color(), on);

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    match &canvas.commands()[0] {
        DrawCommand::Rect { style, .. } => assert_eq!(style.fill, Some(on)),
        DrawCommand::Ellipse { .. } => panic!("Expected the track rect first"),
    }
}

#[test]
fn test_flat_backend_still_paints_both_shapes() {
    struct FlatBackend {
        fills: Vec<Rect>,
        strokes: Vec<Rect>,
    }

    impl Canvas for FlatBackend {
        fn fill_rect(&mut self, rect: Rect, _color: Color) {
            self.fills.push(rect);
        }
        fn fill_ellipse(&mut self, _bounds: Rect, _color: Color) {}
        fn stroke_ellipse(&mut self, bounds: Rect, _color: Color, _width: f32) {
            self.strokes.push(bounds);
        }
    }

    let mut switch = Switch::new();
    switch.layout(Rect::from_size(Size::new(TRACK_WIDTH, TRACK_HEIGHT)));

    let mut backend = FlatBackend {
        fills: Vec::new(),
        strokes: Vec::new(),
    };
    switch.paint(&mut backend);
    assert_eq!(backend.fills, vec![switch.track_rect()]);
    assert_eq!(backend.strokes, vec![switch.thumb_rect()]);
}
