use approx::assert_relative_eq;
use chart_layout::ChartError;
use chart_layout::core::{
    CategoryAxis, ChartKind, Dimensions, LayoutOptions, LayoutResult, NormalizerOptions,
    compute_layout, normalizer::normalize, project_area, project_horizontal_bars,
    project_series, project_vertical_bars,
};

fn layout(kind: ChartKind, values: &[f64], labels: &[&str]) -> LayoutResult {
    let policy = kind.policy();
    let normalization = normalize(
        values,
        NormalizerOptions {
            forced_start: policy.forced_start,
        },
    )
    .expect("normalize");
    let labels: Vec<String> = labels.iter().map(|label| (*label).to_owned()).collect();
    compute_layout(
        Dimensions::new(300, 150),
        policy,
        &normalization,
        "100",
        CategoryAxis::new(values.len(), &labels),
        &LayoutOptions::default(),
    )
    .expect("layout")
}

#[test]
fn line_points_follow_map_point() {
    let values = [0.0, 50.0, 100.0];
    let layout = layout(ChartKind::Line, &values, &["1", "2", "3"]);
    let points = project_series(&layout, &values, true);

    assert_eq!(points.len(), 3);
    let expected = [(40.0, 120.0), (155.0, 70.0), (270.0, 20.0)];
    for (point, (x, y)) in points.iter().zip(expected) {
        assert_relative_eq!(point.x, x, epsilon = 1e-9);
        assert_relative_eq!(point.y, y, epsilon = 1e-9);
    }
    assert_eq!(points[1].index, 1);
    assert_eq!(points[1].value, 50.0);
}

#[test]
fn leading_baseline_points_are_trimmed_when_not_starting_at_zero() {
    let values = [0.0, 0.0, 50.0, 0.0, 100.0];
    let layout = layout(ChartKind::Line, &values, &["1", "2", "3", "4", "5"]);

    let trimmed = project_series(&layout, &values, false);
    let indices: Vec<usize> = trimmed.iter().map(|point| point.index).collect();
    assert_eq!(indices, vec![2, 3, 4]);
    assert_relative_eq!(trimmed[0].x, layout.map_point(2, 50.0).x);

    let full = project_series(&layout, &values, true);
    assert_eq!(full.len(), 5);
}

#[test]
fn single_leading_baseline_point_is_kept() {
    let values = [0.0, 50.0, 100.0];
    let layout = layout(ChartKind::Line, &values, &["1", "2", "3"]);

    let points = project_series(&layout, &values, false);
    let indices: Vec<usize> = points.iter().map(|point| point.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_relative_eq!(points[0].y, layout.baseline(), epsilon = 1e-9);

    let area = project_area(&layout, &[0.0], false).expect("area");
    assert_eq!(area.line_points.len(), 1);
}

#[test]
fn series_entirely_on_the_baseline_projects_nothing_when_trimmed() {
    let layout = layout(ChartKind::Line, &[0.0, 50.0, 100.0], &["1", "2", "3"]);
    assert!(project_series(&layout, &[0.0, 0.0], false).is_empty());
}

#[test]
fn area_polygon_closes_against_the_baseline() {
    let values = [0.0, 50.0, 100.0];
    let layout = layout(ChartKind::Area, &values, &["1", "2", "3"]);
    let area = project_area(&layout, &values, true).expect("area");

    assert_eq!(area.line_points.len(), 3);
    assert_eq!(area.fill_polygon.len(), 6);
    assert_eq!(area.fill_polygon.first(), area.fill_polygon.last());

    let baseline = layout.baseline();
    assert_relative_eq!(area.fill_polygon[0].y, baseline);
    assert_relative_eq!(area.fill_polygon[4].x, 270.0, epsilon = 1e-9);
    assert_relative_eq!(area.fill_polygon[4].y, baseline);
}

#[test]
fn area_of_empty_projection_is_empty() {
    let layout = layout(ChartKind::Area, &[0.0, 50.0, 100.0], &["1", "2", "3"]);
    let area = project_area(&layout, &[0.0, 0.0], false).expect("area");
    assert!(area.line_points.is_empty());
    assert!(area.fill_polygon.is_empty());
}

#[test]
fn area_requires_a_vertical_value_axis() {
    let layout = layout(ChartKind::HorizontalBar, &[0.0, 50.0, 100.0], &["a", "b", "c"]);
    let err = project_area(&layout, &[0.0, 50.0, 100.0], true).expect_err("horizontal");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn vertical_bars_grow_from_the_baseline() {
    let values = [0.0, 50.0, 100.0];
    let layout = layout(ChartKind::VerticalBar, &values, &["1", "2", "3"]);
    let bars = project_vertical_bars(&layout, &values).expect("bars");

    let bar_width = 250.0 / 3.0 - 5.0;
    assert_eq!(bars.len(), 3);
    for bar in &bars {
        assert_relative_eq!(bar.width, bar_width, epsilon = 1e-9);
        assert_relative_eq!(bar.y + bar.height, layout.baseline(), epsilon = 1e-9);
    }
    assert_relative_eq!(bars[0].x, 35.0, epsilon = 1e-9);
    assert_relative_eq!(bars[0].height, 0.0, epsilon = 1e-9);
    assert_relative_eq!(bars[2].height, 100.0, epsilon = 1e-9);
    assert_relative_eq!(bars[2].y, 20.0, epsilon = 1e-9);
    assert!(bars[2].x + bars[2].width <= layout.x_padding_left + layout.graph_width);
}

#[test]
fn horizontal_bars_grow_rightwards() {
    let values = [0.0, 50.0, 100.0];
    let layout = layout(ChartKind::HorizontalBar, &values, &["alpha", "b", "c"]);
    let bars = project_horizontal_bars(&layout, &values).expect("bars");

    let bar_height = 100.0 / 3.0 - 5.0;
    let bar = bars[1];
    assert_relative_eq!(bar.x, 45.0);
    assert_relative_eq!(bar.width, 117.5, epsilon = 1e-9);
    assert_relative_eq!(bar.height, bar_height, epsilon = 1e-9);
    assert_relative_eq!(bar.y + bar.height / 2.0, 70.0, epsilon = 1e-9);
    assert_relative_eq!(bars[2].width, layout.graph_width, epsilon = 1e-9);
}

#[test]
fn bars_require_matching_geometry() {
    let line = layout(ChartKind::Line, &[0.0, 50.0, 100.0], &["1", "2", "3"]);
    assert!(matches!(
        project_vertical_bars(&line, &[1.0]),
        Err(ChartError::InvalidData(_))
    ));

    let vertical = layout(ChartKind::VerticalBar, &[0.0, 50.0, 100.0], &["1", "2", "3"]);
    assert!(matches!(
        project_horizontal_bars(&vertical, &[1.0]),
        Err(ChartError::InvalidData(_))
    ));
}
