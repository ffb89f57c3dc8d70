pub mod axis;
pub mod chart_kind;
pub mod labels;
pub mod layout;
pub mod normalizer;
pub mod projection;
pub mod sparkline;
pub mod stack;
pub mod statistics;
pub mod types;

pub use axis::{AxisLabel, GridLines, category_axis_labels, grid_lines, value_axis_labels};
pub use chart_kind::{ChartKind, ChartKindPolicy, StackingPolicy, ValueAxisOrientation};
pub use layout::{CategoryAxis, LayoutOptions, LayoutResult, PixelPoint, compute_layout};
pub use normalizer::{
    NormalizationResult, Normalizer, NormalizerOptions, NormalizerTuning, OffsetProgression,
    label_step,
};
pub use projection::{
    AreaGeometry, BarRect, PlotPoint, project_area, project_horizontal_bars, project_series,
    project_vertical_bars,
};
pub use sparkline::{SparklineKind, SparklineLayout};
pub use stack::{StackedDataSet, stack};
pub use statistics::SummaryStatistics;
pub use types::{ANONYMOUS_SERIES_LABEL, DataSet, Dimensions, Series};
