use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{DataSet, Dimensions};
use crate::error::ChartResult;

use super::{Chart, ChartConfig};

/// Inputs for one independent chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub data: DataSet,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub config: ChartConfig,
}

impl ChartRequest {
    #[must_use]
    pub fn new(data: DataSet, dimensions: Dimensions, config: ChartConfig) -> Self {
        Self {
            data,
            dimensions,
            config,
        }
    }

    pub fn build(&self) -> ChartResult<Chart> {
        Chart::build(self.data.clone(), self.dimensions, self.config.clone())
    }
}

/// Builds every requested chart. Results keep request order and one failing
/// request does not affect the others.
#[must_use]
pub fn layout_charts(requests: &[ChartRequest]) -> Vec<ChartResult<Chart>> {
    debug!(count = requests.len(), "laying out chart batch");

    #[cfg(feature = "parallel-projection")]
    {
        requests.par_iter().map(ChartRequest::build).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        requests.iter().map(ChartRequest::build).collect()
    }
}
