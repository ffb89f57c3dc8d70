mod batch;
mod chart;
mod chart_config;
mod json_contract;

pub use batch::{ChartRequest, layout_charts};
pub use chart::{Chart, ChartFrame, SeriesFrame};
pub use chart_config::ChartConfig;
pub use json_contract::{CHART_FRAME_JSON_SCHEMA_V1, ChartFrameJsonContractV1};
