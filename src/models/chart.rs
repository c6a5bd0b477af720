//! Resolved chart model: what the registry owns and the renderer draws.

use {
    crate::{
        models::{AxisLabel, DataPoint},
        theme::ThemeTokens,
    },
    eframe::egui::Color32,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Stable identifier of each chart slot on the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum ChartId {
    Optimization,
    Irradiance,
    PeakTemp,
    MonthlyWater,
    CumulativeWater,
}

impl ChartId {
    pub fn canvas_id(self) -> &'static str {
        match self {
            Self::Optimization => "optimizationChart",
            Self::Irradiance => "irradianceChart",
            Self::PeakTemp => "peakTempChart",
            Self::MonthlyWater => "monthlyWaterChart",
            Self::CumulativeWater => "cumulativeWaterChart",
        }
    }

    pub fn default_kind(self) -> ChartKind {
        match self {
            Self::MonthlyWater => ChartKind::Bar,
            _ => ChartKind::Line,
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Self::Optimization => "opt_chart_title",
            Self::Irradiance => "irradiance_chart_title",
            Self::PeakTemp => "peak_temp_chart_title",
            Self::MonthlyWater => "monthly_water_chart_title",
            Self::CumulativeWater => "cumulative_water_chart_title",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            Self::Optimization => "Water savings vs. pitch",
            Self::Irradiance => "Daily irradiance profile",
            Self::PeakTemp => "Temperature on the hottest day ({date})",
            Self::MonthlyWater => "Monthly water savings",
            Self::CumulativeWater => "Cumulative water savings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    /// Chart.js type names; unknown types are not guessed at.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" | "scatter" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleKind {
    /// One slot per label, x = label index.
    #[default]
    Category,
    /// Numeric x taken from labels or `{x, y}` points.
    Linear,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisOptions {
    pub scale: Option<ScaleKind>,
    pub title: Option<String>,
    pub tick_color: Option<Color32>,
    pub grid_color: Option<Color32>,
}

impl AxisOptions {
    fn overlay(self, over: AxisOptions) -> Self {
        Self {
            scale: over.scale.or(self.scale),
            title: over.title.or(self.title),
            tick_color: over.tick_color.or(self.tick_color),
            grid_color: over.grid_color.or(self.grid_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendOptions {
    pub display: Option<bool>,
    pub label_color: Option<Color32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
    pub legend: LegendOptions,
}

impl ChartOptions {
    /// Styling every chart starts from under the given theme.
    pub fn themed(tokens: ThemeTokens) -> Self {
        let axis = AxisOptions {
            tick_color: Some(tokens.text),
            grid_color: Some(tokens.grid),
            ..Default::default()
        };
        Self {
            x: axis.clone(),
            y: axis,
            legend: LegendOptions {
                display: Some(true),
                label_color: Some(tokens.text),
            },
        }
    }

    /// Field-wise merge; every key set in `over` wins.
    pub fn overlay(self, over: ChartOptions) -> Self {
        Self {
            x: self.x.overlay(over.x),
            y: self.y.overlay(over.y),
            legend: LegendOptions {
                display: over.legend.display.or(self.legend.display),
                label_color: over.legend.label_color.or(self.legend.label_color),
            },
        }
    }

    /// Rewrites the theme channels only: tick, grid and legend label colours.
    pub fn apply_theme(&mut self, tokens: ThemeTokens) {
        for axis in [&mut self.x, &mut self.y] {
            axis.tick_color = Some(tokens.text);
            axis.grid_color = Some(tokens.grid);
        }
        self.legend.label_color = Some(tokens.text);
    }

    pub fn x_scale(&self) -> ScaleKind {
        self.x.scale.unwrap_or_default()
    }
}

/// A dataset after label resolution; carries no localization key.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<DataPoint>,
    /// Overrides the chart kind for this series (mixed charts).
    pub kind: Option<ChartKind>,
    pub color: Color32,
    pub fill_color: Option<Color32>,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
    pub point_radius: f32,
    pub fill: bool,
    /// Added by the dashboard rather than received from the simulator.
    pub is_marker: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<AxisLabel>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Plot coordinates of one series. `{x, y}` points keep their x; plain values sit on
    /// their label's number under a linear scale, on their index otherwise.
    pub fn coordinates(&self, dataset: &Dataset, scale: ScaleKind) -> Vec<[f64; 2]> {
        dataset
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, point)| match *point {
                DataPoint::Xy { x, y } => Some([x, y]),
                DataPoint::Value(None) => None,
                DataPoint::Value(Some(y)) => {
                    let x = match scale {
                        ScaleKind::Linear => self
                            .labels
                            .get(i)
                            .and_then(AxisLabel::as_number)
                            .unwrap_or(i as f64),
                        ScaleKind::Category => i as f64,
                    };
                    Some([x, y])
                }
            })
            .collect()
    }

    pub fn marker_count(&self) -> usize {
        self.datasets.iter().filter(|d| d.is_marker).count()
    }
}
