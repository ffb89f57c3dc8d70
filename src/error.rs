use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("series `{label}` has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("degenerate value range: span={span}")]
    DegenerateRange { span: f64 },

    #[error("origin rounding did not converge within {iterations} iterations")]
    NonConvergentRounding { iterations: usize },

    #[error("degenerate canvas: graph_width={graph_width}, graph_height={graph_height}")]
    DegenerateCanvas { graph_width: f64, graph_height: f64 },
}
