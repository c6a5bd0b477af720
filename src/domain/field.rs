use {
    serde::{Deserialize, Serialize},
    strum_macros::EnumIter,
};

/// Section of the input form a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    System,
    Crop,
    Mode,
}

/// Every user-editable input of the configuration form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum FieldId {
    Latitude,
    Longitude,
    Altitude,
    PanelWidth,
    PanelLength,
    PivotHeight,
    MaxTilt,
    AxisAzimuth,
    CropName,
    DliMin,
    DliMax,
    TempMin,
    TempMax,
    CustomPitch,
}

impl FieldId {
    pub fn group(self) -> FieldGroup {
        match self {
            Self::Latitude
            | Self::Longitude
            | Self::Altitude
            | Self::PanelWidth
            | Self::PanelLength
            | Self::PivotHeight
            | Self::MaxTilt
            | Self::AxisAzimuth => FieldGroup::System,
            Self::CropName | Self::DliMin | Self::DliMax | Self::TempMin | Self::TempMax => {
                FieldGroup::Crop
            }
            Self::CustomPitch => FieldGroup::Mode,
        }
    }

    /// Custom pitch is only demanded in Custom mode; everything else always.
    pub fn is_always_required(self) -> bool {
        !matches!(self, Self::CustomPitch)
    }

    /// Stable id of the input, also used as egui widget salt.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Latitude => "lat",
            Self::Longitude => "lon",
            Self::Altitude => "alt",
            Self::PanelWidth => "panel_width",
            Self::PanelLength => "panel_length",
            Self::PivotHeight => "pivot_height",
            Self::MaxTilt => "max_tilt",
            Self::AxisAzimuth => "axis_azimuth",
            Self::CropName => "crop_name",
            Self::DliMin => "dli_min",
            Self::DliMax => "dli_max",
            Self::TempMin => "temp_min",
            Self::TempMax => "temp_max",
            Self::CustomPitch => "custom_pitch",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Altitude => "altitude",
            Self::PanelWidth => "panel_width",
            Self::PanelLength => "panel_length",
            Self::PivotHeight => "pivot_height",
            Self::MaxTilt => "max_tilt",
            Self::AxisAzimuth => "axis_azimuth",
            Self::CropName => "crop_name",
            Self::DliMin => "dli_min",
            Self::DliMax => "dli_max",
            Self::TempMin => "temp_min",
            Self::TempMax => "temp_max",
            Self::CustomPitch => "custom_pitch",
        }
    }

    pub fn placeholder_key(self) -> &'static str {
        match self {
            Self::CropName => "crop_name_placeholder",
            Self::CustomPitch => "custom_pitch_placeholder",
            _ => "number_placeholder",
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Self::Latitude => "Latitude (°)",
            Self::Longitude => "Longitude (°)",
            Self::Altitude => "Altitude (m)",
            Self::PanelWidth => "Panel width (m)",
            Self::PanelLength => "Panel length (m)",
            Self::PivotHeight => "Pivot height (m)",
            Self::MaxTilt => "Max tilt (°)",
            Self::AxisAzimuth => "Axis azimuth (°)",
            Self::CropName => "Crop name",
            Self::DliMin => "Min DLI (mol/m²/day)",
            Self::DliMax => "Max DLI (mol/m²/day)",
            Self::TempMin => "Min temperature (°C)",
            Self::TempMax => "Max temperature (°C)",
            Self::CustomPitch => "Custom pitch (m)",
        }
    }

    pub fn default_placeholder(self) -> &'static str {
        match self {
            Self::CropName => "e.g. Tomato",
            Self::CustomPitch => "e.g. 6.0",
            _ => "Enter a number",
        }
    }

    /// Value pre-filled in a fresh form.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::Latitude => "33.57",
            Self::Longitude => "-7.59",
            Self::Altitude => "50",
            Self::PanelWidth => "2.0",
            Self::PanelLength => "4.0",
            Self::PivotHeight => "2.5",
            Self::MaxTilt => "60",
            Self::AxisAzimuth => "0",
            Self::CropName => "Tomato",
            Self::DliMin => "15",
            Self::DliMax => "30",
            Self::TempMin => "10",
            Self::TempMax => "30",
            Self::CustomPitch => "6.0",
        }
    }
}
