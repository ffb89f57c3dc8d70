use approx::assert_relative_eq;
use chart_layout::core::axis::{mean_line_position, numbered_category_labels};
use chart_layout::core::{
    CategoryAxis, ChartKind, Dimensions, LayoutOptions, LayoutResult, NormalizerOptions,
    category_axis_labels, compute_layout, grid_lines, normalizer::normalize, value_axis_labels,
};

fn layout(kind: ChartKind, labels: &[String]) -> LayoutResult {
    let policy = kind.policy();
    let normalization = normalize(
        &[0.0, 50.0, 100.0],
        NormalizerOptions {
            forced_start: policy.forced_start,
        },
    )
    .expect("normalize");
    compute_layout(
        Dimensions::new(300, 150),
        policy,
        &normalization,
        "100",
        CategoryAxis::new(3, labels),
        &LayoutOptions::default(),
    )
    .expect("layout")
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn default_categories_are_numbered_from_one() {
    assert_eq!(numbered_category_labels(3), labels(&["1", "2", "3"]));
    assert!(numbered_category_labels(0).is_empty());
}

#[test]
fn vertical_value_labels_climb_from_the_baseline() {
    let layout = layout(ChartKind::Line, &labels(&["a", "b", "c"]));
    let axis = value_axis_labels(&layout, None);

    assert_eq!(axis.len(), 10);
    assert_eq!(axis[0].text, "10");
    assert_relative_eq!(axis[0].x, 30.0);
    assert_relative_eq!(axis[0].y, 110.0, epsilon = 1e-9);
    assert_eq!(axis[9].text, "100");
    assert_relative_eq!(axis[9].y, 20.0, epsilon = 1e-9);
}

#[test]
fn vertical_units_are_separated_by_a_space() {
    let layout = layout(ChartKind::Line, &labels(&["a", "b", "c"]));
    let axis = value_axis_labels(&layout, Some("kg"));
    assert_eq!(axis[0].text, "10 kg");
}

#[test]
fn horizontal_value_labels_run_along_the_bottom() {
    let layout = layout(ChartKind::HorizontalBar, &labels(&["alpha", "b", "c"]));
    let axis = value_axis_labels(&layout, Some("%"));

    assert_eq!(axis.len(), 10);
    assert_eq!(axis[0].text, "10%");
    assert_relative_eq!(axis[0].x, 45.0 + 23.5, epsilon = 1e-9);
    assert_relative_eq!(axis[0].y, 120.0);
    assert_relative_eq!(axis[9].x, 280.0, epsilon = 1e-9);
}

#[test]
fn category_labels_sit_under_their_points() {
    let layout = layout(ChartKind::Line, &labels(&["a", "b", "c"]));
    let axis = category_axis_labels(&layout, &labels(&["a", "b", "c"]));

    let xs: Vec<f64> = axis.iter().map(|label| label.x).collect();
    assert_relative_eq!(xs[0], 40.0, epsilon = 1e-9);
    assert_relative_eq!(xs[1], 155.0, epsilon = 1e-9);
    assert_relative_eq!(xs[2], 270.0, epsilon = 1e-9);
    assert!(axis.iter().all(|label| label.y == 120.0));
}

#[test]
fn bar_category_labels_shift_by_the_bar_padding() {
    let names = labels(&["a", "b", "c"]);
    let layout = layout(ChartKind::VerticalBar, &names);
    let axis = category_axis_labels(&layout, &names);
    assert_relative_eq!(axis[0].x, layout.category_position(0) + 5.0, epsilon = 1e-9);
}

#[test]
fn horizontal_bar_categories_are_listed_bottom_up() {
    let names = labels(&["alpha", "b", "c"]);
    let layout = layout(ChartKind::HorizontalBar, &names);
    let axis = category_axis_labels(&layout, &names);

    let texts: Vec<&str> = axis.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "b", "alpha"]);
    // Each label lines up with the center of its bar.
    assert_relative_eq!(axis[1].y, 70.0, epsilon = 1e-9);
    assert_relative_eq!(axis[2].y, layout.category_position(0), epsilon = 1e-9);
}

#[test]
fn line_grid_follows_labels_and_points() {
    let names = labels(&["a", "b", "c"]);
    let layout = layout(ChartKind::Line, &names);
    let grid = grid_lines(&layout, &names, false);

    assert_eq!(grid.rows.len(), 11);
    assert_relative_eq!(grid.rows[0], 120.0);
    assert_relative_eq!(grid.rows[10], 20.0, epsilon = 1e-9);
    assert_eq!(grid.columns.len(), 3);
}

#[test]
fn empty_category_labels_can_hide_their_grid_line() {
    let names = labels(&["a", "", "c"]);
    let layout = layout(ChartKind::Line, &names);

    let grid = grid_lines(&layout, &names, true);
    assert_eq!(grid.columns.len(), 2);
    assert_relative_eq!(grid.columns[1], 270.0, epsilon = 1e-9);

    let grid = grid_lines(&layout, &names, false);
    assert_eq!(grid.columns.len(), 3);
}

#[test]
fn bar_grid_frames_the_plot_area() {
    let names = labels(&["a", "b", "c"]);
    let layout = layout(ChartKind::VerticalBar, &names);
    let grid = grid_lines(&layout, &names, false);
    assert_eq!(grid.columns, vec![30.0, 280.0]);
}

#[test]
fn horizontal_grid_runs_along_value_positions() {
    let names = labels(&["alpha", "b", "c"]);
    let layout = layout(ChartKind::HorizontalBar, &names);
    let grid = grid_lines(&layout, &names, false);

    assert_eq!(grid.rows, vec![20.0]);
    assert_eq!(grid.columns.len(), 11);
    assert_relative_eq!(grid.columns[0], 45.0);
    assert_relative_eq!(grid.columns[10], 280.0, epsilon = 1e-9);
}

#[test]
fn mean_line_tracks_the_value_axis() {
    let values = [0.0, 50.0, 100.0];

    let line = layout(ChartKind::Line, &labels(&["a", "b", "c"]));
    let y = mean_line_position(&line, &values).expect("mean");
    assert_relative_eq!(y, 70.0, epsilon = 1e-9);

    let bars = layout(ChartKind::HorizontalBar, &labels(&["alpha", "b", "c"]));
    let x = mean_line_position(&bars, &values).expect("mean");
    assert_relative_eq!(x, 162.5, epsilon = 1e-9);

    assert!(mean_line_position(&line, &[]).is_err());
}
