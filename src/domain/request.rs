use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum SimulationMode {
    /// Server searches pitch values for maximum water savings.
    #[default]
    Optimization,
    /// Server evaluates the single caller-specified pitch.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParams {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub panel_width: f64,
    pub panel_length: f64,
    pub pivot_height: f64,
    pub max_tilt: f64,
    pub axis_azimuth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropParams {
    pub name: String,
    pub dli_min: f64,
    pub dli_max: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// Request body of `POST /simulate`. Only built by `InputForm::collect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub sys_params: SystemParams,
    pub crop_params: CropParams,
    pub mode: SimulationMode,
    /// `null` on the wire when the field was left empty in Optimization mode.
    pub custom_pitch: Option<f64>,
    pub lang: String,
}

impl SimulationRequest {
    pub fn is_optimization(&self) -> bool {
        self.mode == SimulationMode::Optimization
    }
}
