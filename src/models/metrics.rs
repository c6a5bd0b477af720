use {
    crate::{domain::SimulationMode, error::DashboardError},
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationMetrics {
    #[serde(alias = "optimal_pitch")]
    pub pitch: f64,
    #[serde(alias = "max_savings")]
    pub water_savings_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomMetrics {
    pub water_savings: f64,
    pub dli_agri: f64,
    pub dli_open: f64,
    pub peak_temp_agri: f64,
    pub peak_temp_open: f64,
}

/// The `results` object, typed by the mode the request was sent with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metrics {
    Optimization(OptimizationMetrics),
    Custom(CustomMetrics),
}

impl Metrics {
    pub fn parse(mode: SimulationMode, results: &Value) -> Result<Self, DashboardError> {
        let malformed = |e: serde_json::Error| {
            DashboardError::MalformedResult(format!("{} metrics: {}", mode, e))
        };
        match mode {
            SimulationMode::Optimization => OptimizationMetrics::deserialize(results)
                .map(Self::Optimization)
                .map_err(malformed),
            SimulationMode::Custom => CustomMetrics::deserialize(results)
                .map(Self::Custom)
                .map_err(malformed),
        }
    }
}
