use chart_layout::core::{ChartKind, StackingPolicy, ValueAxisOrientation};

#[test]
fn every_kind_has_a_policy_for_itself() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.policy().kind, kind);
    }
}

#[test]
fn only_horizontal_bars_flip_the_value_axis() {
    for kind in ChartKind::ALL {
        let expected = if kind == ChartKind::HorizontalBar {
            ValueAxisOrientation::Horizontal
        } else {
            ValueAxisOrientation::Vertical
        };
        assert_eq!(kind.policy().orientation, expected, "{kind:?}");
    }
}

#[test]
fn stacking_follows_the_kind_table() {
    assert!(!ChartKind::Line.policy().uses_stacking(Some(true)));
    assert!(!ChartKind::Area.policy().uses_stacking(Some(true)));
    assert!(ChartKind::StackedArea.policy().uses_stacking(None));
    assert!(ChartKind::StackedArea.policy().uses_stacking(Some(false)));
    assert!(!ChartKind::HorizontalBar.policy().uses_stacking(Some(true)));

    let vertical_bar = ChartKind::VerticalBar.policy();
    assert_eq!(vertical_bar.stacking, StackingPolicy::Optional);
    assert!(!vertical_bar.uses_stacking(None));
    assert!(vertical_bar.uses_stacking(Some(true)));
}

#[test]
fn bar_kinds_force_a_zero_origin() {
    assert_eq!(ChartKind::VerticalBar.policy().forced_start, Some(0.0));
    assert_eq!(ChartKind::HorizontalBar.policy().forced_start, Some(0.0));
    assert_eq!(ChartKind::Line.policy().forced_start, None);
    assert!(ChartKind::VerticalBar.policy().is_bar());
    assert!(!ChartKind::StackedArea.policy().is_bar());
}

#[test]
fn line_step_spreads_points_between_paddings() {
    let policy = ChartKind::Line.policy();
    let padding = policy.plot_padding(250.0, 100.0, 3, None);
    assert_eq!(padding, 10.0);
    assert_eq!(policy.plot_step(250.0, 100.0, padding, 3), 115.0);
}

#[test]
fn requested_padding_replaces_default_for_line_kinds() {
    let policy = ChartKind::Area.policy();
    assert_eq!(policy.plot_padding(250.0, 100.0, 3, Some(0.0)), 0.0);
    assert_eq!(policy.plot_step(250.0, 100.0, 0.0, 6), 50.0);
}

#[test]
fn single_point_step_stays_finite() {
    for kind in ChartKind::ALL {
        let policy = kind.policy();
        let padding = policy.plot_padding(250.0, 100.0, 1, None);
        let step = policy.plot_step(250.0, 100.0, padding, 1);
        assert!(step.is_finite(), "{kind:?}");
    }
    let line = ChartKind::Line.policy();
    assert_eq!(line.plot_step(250.0, 100.0, 10.0, 1), 230.0);
}

#[test]
fn vertical_bars_center_the_first_bar_half_a_bar_in() {
    let policy = ChartKind::VerticalBar.policy();
    let width = policy.bar_thickness(200.0, 100.0, 4).expect("bar width");
    assert_eq!(width, 45.0);

    let padding = policy.plot_padding(200.0, 100.0, 4, Some(99.0));
    assert_eq!(padding, 22.5);
    // (200 - 2 * 22.5 - 2 * 5) / 3
    assert_eq!(policy.plot_step(200.0, 100.0, padding, 4), 145.0 / 3.0);
}

#[test]
fn horizontal_bars_split_the_height_evenly() {
    let policy = ChartKind::HorizontalBar.policy();
    assert_eq!(policy.plot_padding(200.0, 100.0, 4, Some(12.0)), 0.0);
    assert_eq!(policy.bar_thickness(200.0, 100.0, 4), Some(20.0));
    assert_eq!(policy.plot_step(200.0, 100.0, 0.0, 4), 25.0);
}

#[test]
fn line_kinds_have_no_bar_geometry() {
    assert_eq!(ChartKind::Line.policy().bar_thickness(200.0, 100.0, 4), None);
    assert_eq!(ChartKind::Line.policy().bar_padding, 0.0);
}
