use {
    crate::{
        domain::{CropParams, FieldId, SimulationMode, SimulationRequest, SystemParams},
        error::ValidationError,
    },
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
    strum::IntoEnumIterator,
};

/// Raw text of every form input plus the mode selector.
/// Persisted with the app so the last configuration survives restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputForm {
    values: BTreeMap<FieldId, String>,
    pub mode: SimulationMode,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            values: FieldId::iter()
                .map(|f| (f, f.default_value().to_string()))
                .collect(),
            mode: SimulationMode::default(),
        }
    }
}

impl InputForm {
    /// A form with every field empty.
    pub fn empty() -> Self {
        Self {
            values: FieldId::iter().map(|f| (f, String::new())).collect(),
            mode: SimulationMode::default(),
        }
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Mutable access for text widgets.
    pub fn value_mut(&mut self, field: FieldId) -> &mut String {
        self.values.entry(field).or_default()
    }

    /// The custom pitch input is disabled while Optimization is selected.
    pub fn custom_pitch_enabled(&self) -> bool {
        self.mode == SimulationMode::Custom
    }

    fn is_empty(&self, field: FieldId) -> bool {
        self.value(field).trim().is_empty()
    }

    fn number(&self, field: FieldId) -> Result<f64, ValidationError> {
        self.value(field)
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidNumber(field))
    }

    /// Fields whose emptiness blocks submission in the current mode.
    pub fn missing_fields(&self) -> Vec<FieldId> {
        FieldId::iter()
            .filter(|f| f.is_always_required() || self.custom_pitch_enabled())
            .filter(|f| self.is_empty(*f))
            .collect()
    }

    /// Builds the request, or reports why it cannot be built. Never yields a partial request.
    pub fn collect(&self, lang: &str) -> Result<SimulationRequest, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let custom_pitch = match self.mode {
            SimulationMode::Custom => Some(self.number(FieldId::CustomPitch)?),
            // Irrelevant here: parsed if possible, never a reason to reject.
            SimulationMode::Optimization => self.number(FieldId::CustomPitch).ok(),
        };

        Ok(SimulationRequest {
            sys_params: SystemParams {
                latitude: self.number(FieldId::Latitude)?,
                longitude: self.number(FieldId::Longitude)?,
                altitude: self.number(FieldId::Altitude)?,
                panel_width: self.number(FieldId::PanelWidth)?,
                panel_length: self.number(FieldId::PanelLength)?,
                pivot_height: self.number(FieldId::PivotHeight)?,
                max_tilt: self.number(FieldId::MaxTilt)?,
                axis_azimuth: self.number(FieldId::AxisAzimuth)?,
            },
            crop_params: CropParams {
                name: self.value(FieldId::CropName).trim().to_string(),
                dli_min: self.number(FieldId::DliMin)?,
                dli_max: self.number(FieldId::DliMax)?,
                temp_min: self.number(FieldId::TempMin)?,
                temp_max: self.number(FieldId::TempMax)?,
            },
            mode: self.mode,
            custom_pitch,
            lang: lang.to_string(),
        })
    }
}
