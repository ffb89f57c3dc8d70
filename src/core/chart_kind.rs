use serde::{Deserialize, Serialize};

/// Closed set of supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Area,
    StackedArea,
    VerticalBar,
    HorizontalBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::StackedArea,
        ChartKind::VerticalBar,
        ChartKind::HorizontalBar,
    ];

    #[must_use]
    pub fn policy(self) -> ChartKindPolicy {
        match self {
            ChartKind::Line | ChartKind::Area => ChartKindPolicy {
                kind: self,
                default_plot_padding: 10.0,
                orientation: ValueAxisOrientation::Vertical,
                stacking: StackingPolicy::Never,
                bar_padding: 0.0,
                forced_start: None,
            },
            ChartKind::StackedArea => ChartKindPolicy {
                kind: self,
                default_plot_padding: 10.0,
                orientation: ValueAxisOrientation::Vertical,
                stacking: StackingPolicy::Always,
                bar_padding: 0.0,
                forced_start: None,
            },
            ChartKind::VerticalBar => ChartKindPolicy {
                kind: self,
                default_plot_padding: 0.0,
                orientation: ValueAxisOrientation::Vertical,
                stacking: StackingPolicy::Optional,
                bar_padding: 5.0,
                forced_start: Some(0.0),
            },
            ChartKind::HorizontalBar => ChartKindPolicy {
                kind: self,
                default_plot_padding: 0.0,
                orientation: ValueAxisOrientation::Horizontal,
                stacking: StackingPolicy::Never,
                bar_padding: 5.0,
                forced_start: Some(0.0),
            },
        }
    }
}

/// Direction in which the value axis grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueAxisOrientation {
    /// Values grow upwards; categories run left to right.
    Vertical,
    /// Values grow rightwards; categories run top to bottom.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingPolicy {
    Never,
    Always,
    /// Off unless the caller asks for it.
    Optional,
}

/// Per-kind constants and formulas consumed by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartKindPolicy {
    pub kind: ChartKind,
    pub default_plot_padding: f64,
    pub orientation: ValueAxisOrientation,
    pub stacking: StackingPolicy,
    /// Gap between neighbouring bars; `0` for non-bar kinds.
    pub bar_padding: f64,
    /// Origin the normalizer should prefer for this kind.
    pub forced_start: Option<f64>,
}

impl ChartKindPolicy {
    #[must_use]
    pub fn uses_stacking(self, requested: Option<bool>) -> bool {
        match self.stacking {
            StackingPolicy::Never => false,
            StackingPolicy::Always => true,
            StackingPolicy::Optional => requested.unwrap_or(false),
        }
    }

    #[must_use]
    pub fn is_bar(self) -> bool {
        matches!(self.kind, ChartKind::VerticalBar | ChartKind::HorizontalBar)
    }

    /// Bar width (vertical bars) or bar height (horizontal bars).
    #[must_use]
    pub fn bar_thickness(self, graph_width: f64, graph_height: f64, n: usize) -> Option<f64> {
        let n = n.max(1) as f64;
        match self.kind {
            ChartKind::VerticalBar => Some(graph_width / n - self.bar_padding),
            ChartKind::HorizontalBar => Some(graph_height / n - self.bar_padding),
            _ => None,
        }
    }

    /// Padding between the graph edge and the first/last plotted point.
    ///
    /// Vertical bars always center the first bar half a bar away from the
    /// edge; horizontal bars start flush with the axis.
    #[must_use]
    pub fn plot_padding(
        self,
        graph_width: f64,
        graph_height: f64,
        n: usize,
        requested: Option<f64>,
    ) -> f64 {
        match self.kind {
            ChartKind::VerticalBar => self
                .bar_thickness(graph_width, graph_height, n)
                .map_or(0.0, |width| width / 2.0),
            ChartKind::HorizontalBar => 0.0,
            _ => requested.unwrap_or(self.default_plot_padding),
        }
    }

    /// Distance between neighbouring plotted points along the category axis.
    ///
    /// `n` is the longest series length. A single point has no neighbour, so
    /// the `n - 1` divisor is clamped to `1` and the step spans the whole
    /// plot area.
    #[must_use]
    pub fn plot_step(self, graph_width: f64, graph_height: f64, plot_padding: f64, n: usize) -> f64 {
        let gaps = n.saturating_sub(1).max(1) as f64;
        match self.kind {
            ChartKind::Line | ChartKind::Area | ChartKind::StackedArea => {
                (graph_width - 2.0 * plot_padding) / gaps
            }
            ChartKind::VerticalBar => {
                (graph_width - 2.0 * plot_padding - 2.0 * self.bar_padding) / gaps
            }
            ChartKind::HorizontalBar => (graph_height - 2.0 * plot_padding) / n.max(1) as f64,
        }
    }
}
