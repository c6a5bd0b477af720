mod chart;
mod metrics;
mod payload;

pub use chart::{
    AxisOptions, ChartData, ChartId, ChartKind, ChartOptions, Dataset, LegendOptions, ScaleKind,
};
pub use metrics::{CustomMetrics, Metrics, OptimizationMetrics};
pub use payload::{
    AnalysisComment, AxisLabel, ChartSpec, DataPoint, DatasetSpec, GraphData, SimulationResult,
};
