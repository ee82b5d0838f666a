use casteljau::{
    Color, ControlPoint, DemoError, DemoOptions, DemoPoint, DemoState, InputEvent, Point2, SampleLayer, Segment,
    MAX_DIVIDE_DEPTH, MAX_SAMPLE_LAYERS,
};

/// Runs one frame the way the binary does: events, cursor, draw.
fn frame(state: &mut DemoState, events: &[InputEvent], cursor: Option<DemoPoint>) -> Vec<Segment<DemoPoint>> {
    state.handle_events(events.iter().copied());
    state.track_cursor(cursor);
    let mut segments = Vec::new();
    state.draw(&mut segments);
    segments
}

#[test]
fn drag_every_point_then_release() {
    let mut state = DemoState::new(DemoOptions::default()).unwrap();
    let targets = [
        Point2::new(10.0, 20.0),
        Point2::new(30.0, 40.0),
        Point2::new(50.0, 60.0),
        Point2::new(70.0, 80.0),
    ];

    for (which, target) in ControlPoint::ALL.into_iter().zip(targets) {
        frame(&mut state, &[InputEvent::SelectPoint(which)], Some(Point2::new(0.0, 0.0)));
        let segments = frame(&mut state, &[], Some(target));
        assert_eq!(state.curve().control_point(which), target);
        // the control polygon is redrawn through the moved point
        assert!(segments[..3].iter().any(|s| s.from == target || s.to == target));
    }
    frame(&mut state, &[InputEvent::PrimaryClick], Some(Point2::new(400.0, 300.0)));

    assert_eq!(state.selected(), None);
    assert_eq!(state.curve().control_points(), targets);
}

#[test]
fn switching_selection_leaves_previous_point_behind() {
    let mut state = DemoState::new(DemoOptions::default()).unwrap();
    frame(&mut state, &[InputEvent::SelectPoint(ControlPoint::First)], Some(Point2::new(1.0, 1.0)));
    frame(&mut state, &[InputEvent::SelectPoint(ControlPoint::Third)], Some(Point2::new(2.0, 2.0)));

    assert_eq!(state.curve().control_point(ControlPoint::First), Point2::new(1.0, 1.0));
    assert_eq!(state.curve().control_point(ControlPoint::Third), Point2::new(2.0, 2.0));
}

#[test]
fn click_in_the_same_frame_wins_over_selection() {
    // events apply in arrival order before the cursor is tracked
    let mut state = DemoState::new(DemoOptions::default()).unwrap();
    let before = *state.curve();
    frame(
        &mut state,
        &[InputEvent::SelectPoint(ControlPoint::Second), InputEvent::PrimaryClick],
        Some(Point2::new(5.0, 5.0)),
    );
    assert_eq!(*state.curve(), before);
}

#[test]
fn subdivision_layer_is_opt_in() {
    let mut state = DemoState::new(DemoOptions::default()).unwrap();
    let plain = frame(&mut state, &[], None);
    assert!(plain.iter().all(|s| s.color != Color::YELLOW));

    let divided = frame(&mut state, &[InputEvent::ToggleDivided, InputEvent::ShallowerDivision], None);
    let yellow = divided.iter().filter(|s| s.color == Color::YELLOW).count();
    assert_eq!(yellow, 3 * ((1 << MAX_DIVIDE_DEPTH) - 1));
    assert_eq!(&divided[..plain.len()], &plain[..]);
}

#[test]
fn custom_layers_are_drawn_in_order() {
    let mut options = DemoOptions::default();
    options.sample_layers.clear();
    options.add_sample_layer(SampleLayer::new(2, Color::rgb(1, 2, 3))).unwrap();
    options.add_sample_layer(SampleLayer::new(32, Color::rgb(4, 5, 6))).unwrap();
    let mut state = DemoState::new(options).unwrap();

    let segments = frame(&mut state, &[], None);
    assert_eq!(segments.len(), 3 + 2 + 32);
    assert!(segments[3..5].iter().all(|s| s.color == Color::rgb(1, 2, 3)));
    assert!(segments[5..].iter().all(|s| s.color == Color::rgb(4, 5, 6)));
}

#[test]
fn invalid_options_are_rejected() {
    let options = DemoOptions {
        divide_depth: 9,
        ..DemoOptions::default()
    };
    let err = DemoState::new(options).unwrap_err();
    assert_eq!(err, DemoError::DivideDepthTooLarge { depth: 9, max: MAX_DIVIDE_DEPTH });
    assert_eq!(err.to_string(), "subdivision depth 9 exceeds the maximum of 5");
}

#[test]
fn ninth_layer_is_an_error_not_a_panic() {
    let mut options = DemoOptions::default();
    while options.sample_layers.len() < MAX_SAMPLE_LAYERS {
        options.add_sample_layer(SampleLayer::new(2, Color::WHITE)).unwrap();
    }
    let err = options.add_sample_layer(SampleLayer::new(2, Color::WHITE)).unwrap_err();
    assert_eq!(err.to_string(), "no room for more than 8 uniform sampling layers");

    // the full list still draws
    let mut state = DemoState::new(options).unwrap();
    let segments = frame(&mut state, &[], None);
    assert_eq!(segments.len(), 3 + 4 + 8 + 16 + 5 * 2);
}

#[test]
fn close_request_ends_the_session() {
    let mut state = DemoState::new(DemoOptions::default()).unwrap();
    assert!(state.running());
    frame(&mut state, &[InputEvent::CloseRequested], None);
    assert!(!state.running());
}
