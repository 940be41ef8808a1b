use super::*;

#[test]
fn peak_index_finds_first_maximum() {
    assert_eq!(peak_index(&UNSATISFIED_DEMAND), Some(4));
    assert_eq!(peak_index(&[1.0, 3.0, 3.0]), Some(1));
    assert_eq!(peak_index(&[]), None);
}

#[test]
fn percent_vs_target_is_signed() {
    assert!((percent_vs_target(89_600.0, DEMAND_TARGET) - 5.411_764).abs() < 1e-5);
    assert!(percent_vs_target(38_000.0, DEMAND_TARGET) < 0.0);
    assert_eq!(percent_vs_target(1.0, 0.0), 0.0);
}

#[test]
fn target_delta_text_matches_tooltip() {
    assert_eq!(format_target_delta(89_600.0, DEMAND_TARGET), "5.4% above target");
    assert_eq!(format_target_delta(38_000.0, DEMAND_TARGET), "-55.3% below target");
    assert_eq!(format_target_delta(DEMAND_TARGET, DEMAND_TARGET), "0.0% below target");
}

#[test]
fn thousands_format_has_two_decimals() {
    assert_eq!(format_thousands(89_600.0), "$89.60k");
    assert_eq!(format_thousands(20_000.0), "$20.00k");
}

#[test]
fn frame_maps_value_range_onto_plot_area() {
    let frame = ChartFrame::default();
    assert_eq!(frame.y_for_value(0.0), frame.plot_bottom());
    assert_eq!(frame.y_for_value(Y_MAX), frame.plot_top());
    assert_eq!(frame.y_for_value(-5.0), frame.plot_bottom());
    assert_eq!(frame.y_for_value(Y_MAX * 2.0), frame.plot_top());
}

#[test]
fn frame_spaces_points_evenly() {
    let frame = ChartFrame { width: 100.0, height: 100.0, pad_left: 10.0, pad_right: 20.0, pad_top: 0.0, pad_bottom: 0.0 };
    assert_eq!(frame.x_for_index(0.0, 8), 10.0);
    assert_eq!(frame.x_for_index(7.0, 8), 80.0);
    assert_eq!(frame.x_for_index(3.5, 8), 45.0);
    assert_eq!(frame.x_for_index(3.0, 1), 10.0);
}

#[test]
fn now_marker_sits_between_may_and_jun() {
    let frame = ChartFrame::default();
    let now = frame.x_for_index(NOW_INDEX, MONTH_LABELS.len());
    assert!(now > frame.x_for_index(2.0, MONTH_LABELS.len()));
    assert!(now < frame.x_for_index(3.0, MONTH_LABELS.len()));
}

#[test]
fn polyline_has_one_point_per_value() {
    let frame = ChartFrame { width: 100.0, height: 100.0, pad_left: 0.0, pad_right: 0.0, pad_top: 0.0, pad_bottom: 0.0 };
    assert_eq!(frame.polyline_points(&[0.0, 50_000.0, 100_000.0]), "0.0,100.0 50.0,50.0 100.0,0.0");
}

#[test]
fn y_axis_ticks_and_labels() {
    assert_eq!(y_ticks(), vec![20_000.0, 40_000.0, 60_000.0, 80_000.0, 100_000.0]);
    assert_eq!(y_tick_label(20_000.0), "$20K");
}
