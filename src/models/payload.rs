//! Success body of `POST /simulate`, kept as close to the wire as possible.
//! Nothing here is localized or resolved; see `engine::interpreter` for that.

use {
    crate::models::ChartId,
    serde::{Deserialize, Serialize},
    serde_json::Value,
    std::collections::BTreeMap,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationResult {
    /// Mode-dependent metrics, typed later by `Metrics::parse`.
    pub results: Value,
    pub graph_data: GraphData,
    pub analysis_comments: Vec<AnalysisComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphData {
    pub optimization: Option<ChartSpec>,
    pub irradiance: Option<ChartSpec>,
    pub peak_temp: Option<ChartSpec>,
    pub monthly_water: Option<ChartSpec>,
    pub cumulative_water: Option<ChartSpec>,
}

impl GraphData {
    pub fn get(&self, id: ChartId) -> Option<&ChartSpec> {
        match id {
            ChartId::Optimization => self.optimization.as_ref(),
            ChartId::Irradiance => self.irradiance.as_ref(),
            ChartId::PeakTemp => self.peak_temp.as_ref(),
            ChartId::MonthlyWater => self.monthly_water.as_ref(),
            ChartId::CumulativeWater => self.cumulative_water.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    pub labels: Vec<AxisLabel>,
    pub datasets: Vec<DatasetSpec>,
    /// Literal title, used when no `title_key` is given or it cannot be resolved.
    pub title: Option<String>,
    pub title_key: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    /// Optimization chart only.
    pub optimal_pitch: Option<f64>,
    /// Optimization chart only.
    pub max_savings: Option<f64>,
    /// Literal fields available to `{placeholder}` tokens in the title (e.g. `date`).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ChartSpec {
    pub fn title_params(&self) -> BTreeMap<String, String> {
        literal_params(&self.extra)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSpec {
    pub label: Option<String>,
    /// Localization key, resolved once when the chart is built.
    pub label_key: Option<String>,
    pub data: Vec<DataPoint>,
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    #[serde(rename = "borderColor", alias = "border_color")]
    pub border_color: Option<String>,
    #[serde(rename = "backgroundColor", alias = "background_color")]
    pub background_color: Option<String>,
    #[serde(rename = "borderWidth", alias = "border_width")]
    pub border_width: Option<f32>,
    #[serde(rename = "borderDash", alias = "border_dash")]
    pub border_dash: Option<Vec<f32>>,
    #[serde(rename = "pointRadius", alias = "point_radius")]
    pub point_radius: Option<f32>,
    /// Chart.js accepts booleans and strings here; anything truthy fills.
    pub fill: Option<Value>,
    /// Literal substitution fields such as `pitch`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DatasetSpec {
    pub fn label_params(&self) -> BTreeMap<String, String> {
        literal_params(&self.extra)
    }

    pub fn fills(&self) -> bool {
        match &self.fill {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty() && s != "false",
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Xy { x: f64, y: f64 },
    /// Plain value aligned with the chart's labels; `null` leaves a gap.
    Value(Option<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisLabel {
    Number(f64),
    Text(String),
}

impl AxisLabel {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisComment {
    /// Severity/category, used as a style class.
    pub tag: String,
    pub title_key: String,
    /// Already in the requested language; shown as-is.
    pub text: String,
}

/// Scalar fields rendered the way a template expects them (`5.0` becomes `5`).
fn literal_params(extra: &BTreeMap<String, Value>) -> BTreeMap<String, String> {
    extra
        .iter()
        .filter_map(|(k, v)| {
            let literal = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => i.to_string(),
                    None => format!("{}", n.as_f64()?),
                },
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((k.clone(), literal))
        })
        .collect()
}
