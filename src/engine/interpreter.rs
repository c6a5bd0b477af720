//! Results Interpreter: turns a raw `SimulationResult` into everything the dashboard shows.
//!
//! Work is split in two. `interpret` is pure and does all parsing, label resolution and
//! marker synthesis up front, so a malformed payload fails before anything is touched.
//! `RenderPlan::apply` then writes the finished plan to the renderer and chart registry.

use {
    crate::{
        charts::ChartRegistry,
        config::{CHART_CONFIG, DF},
        domain::SimulationRequest,
        error::DashboardError,
        locale::{LanguageCatalog, substitute, substitute_one},
        models::{
            AnalysisComment, AxisOptions, ChartData, ChartId, ChartKind, ChartOptions, ChartSpec,
            CustomMetrics, DataPoint, Dataset, DatasetSpec, Metrics, OptimizationMetrics,
            ScaleKind, SimulationResult,
        },
        render::{CommentBlock, MetricLine, Renderer, Section, TextSlot},
        theme::ThemeTokens,
        utils::{palette_color, parse_css_color, to_fixed},
    },
    eframe::egui::Color32,
    strum::IntoEnumIterator,
};

pub const MARKER_LABEL_KEY: &str = "optimal_pitch_marker";
const MARKER_LABEL_FALLBACK: &str = "Optimal Pitch";
const COMMENT_TITLE_FALLBACK: &str = "Analysis";
const PEAK_TEMP_UNDATED_KEY: &str = "peak_temp_chart_title_undated";
const PEAK_TEMP_UNDATED_FALLBACK: &str = "Temperature on the hottest day";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub id: ChartId,
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// A fully resolved results view. Holds no localization keys.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub results_title: String,
    pub metrics: Vec<MetricLine>,
    pub comments: Vec<CommentBlock>,
    /// Chart titles that depend on the payload (e.g. the hottest day's date).
    pub chart_titles: Vec<(ChartId, String)>,
    /// Container and title visibility for every chart slot.
    pub visibility: Vec<(ChartId, bool)>,
    pub charts: Vec<ChartPlan>,
}

pub fn interpret(
    result: &SimulationResult,
    request: &SimulationRequest,
    catalog: &LanguageCatalog,
) -> Result<RenderPlan, DashboardError> {
    let metrics = Metrics::parse(request.mode, &result.results)?;

    let results_title = results_title(request, catalog);
    let metric_lines = match &metrics {
        Metrics::Optimization(m) => optimization_metrics(m, catalog),
        Metrics::Custom(m) => custom_metrics(m, catalog),
    };
    let comments = result
        .analysis_comments
        .iter()
        .map(|c| comment_block(c, catalog))
        .collect();

    let mut visibility = Vec::new();
    let mut chart_titles = Vec::new();
    let mut charts = Vec::new();

    for id in ChartId::iter() {
        let spec = result.graph_data.get(id);
        let shown = match id {
            ChartId::Optimization => request.is_optimization() && spec.is_some(),
            _ => spec.is_some(),
        };
        visibility.push((id, shown));

        let Some(spec) = spec.filter(|_| shown) else {
            continue;
        };
        if let Some(title) = chart_title(id, spec, catalog) {
            chart_titles.push((id, title));
        }

        let mut plan = chart_plan(id, spec, catalog);
        if id == ChartId::Optimization {
            let (pitch, savings) = match &metrics {
                Metrics::Optimization(m) => (m.pitch, m.water_savings_percent),
                Metrics::Custom(_) => (0.0, 0.0),
            };
            plan.data.datasets.push(optimal_pitch_marker(
                spec.optimal_pitch.unwrap_or(pitch),
                spec.max_savings.unwrap_or(savings),
                catalog,
            ));
        }
        charts.push(plan);
    }

    Ok(RenderPlan {
        results_title,
        metrics: metric_lines,
        comments,
        chart_titles,
        visibility,
        charts,
    })
}

impl RenderPlan {
    /// Writes the plan out. Returns how many charts were drawn; charts that cannot be
    /// drawn are skipped while metrics and comments still show.
    pub fn apply(
        self,
        registry: &mut ChartRegistry,
        tokens: ThemeTokens,
        renderer: &mut dyn Renderer,
    ) -> usize {
        renderer.set_text(TextSlot::ResultsTitle, &self.results_title);
        renderer.show_metrics(&self.metrics);
        renderer.show_comments(&self.comments);

        for (id, shown) in &self.visibility {
            renderer.set_visible(Section::ChartContainer(*id), *shown);
            renderer.set_visible(Section::ChartTitle(*id), *shown);
        }
        for (id, title) in &self.chart_titles {
            renderer.set_text(TextSlot::ChartTitle(*id), title);
        }

        let mut drawn = 0;
        for chart in self.charts {
            match registry.create(chart.id, chart.kind, chart.data, chart.options, tokens, renderer) {
                Ok(_) => drawn += 1,
                Err(DashboardError::RenderingUnavailable) => {
                    log::warn!("Charting backend unavailable; skipping all charts");
                    break;
                }
                Err(e) => log::error!("Skipping chart {}: {}", chart.id, e),
            }
        }
        drawn
    }
}

fn results_title(request: &SimulationRequest, catalog: &LanguageCatalog) -> String {
    if request.is_optimization() {
        return catalog.resolve("opt_results_title", Some("Optimization results"));
    }
    let mut template =
        catalog.resolve("single_results_title", Some("Results for a pitch of {pitch} m"));
    // Older language files carry the heading without the token.
    if !template.contains("{pitch}") {
        template.push_str(" {pitch}m");
    }
    let pitch = request
        .custom_pitch
        .map(|p| p.to_string())
        .unwrap_or_default();
    substitute_one(&template, "pitch", &pitch)
}

fn metric(
    catalog: &LanguageCatalog,
    icon: &str,
    key: &str,
    fallback: &str,
    value: String,
) -> MetricLine {
    MetricLine {
        label: format!("{} {}", icon, catalog.resolve(key, Some(fallback))),
        value,
        secondary: false,
    }
}

/// Open-field comparison shown under the agrivoltaic value.
fn comparison(catalog: &LanguageCatalog, key: &str, fallback: &str, value: String) -> MetricLine {
    MetricLine {
        label: format!("({})", catalog.resolve(key, Some(fallback))),
        value,
        secondary: true,
    }
}

fn optimization_metrics(m: &OptimizationMetrics, catalog: &LanguageCatalog) -> Vec<MetricLine> {
    vec![
        metric(catalog, "✅", "opt_pitch", "Optimal pitch", format!("{} m", to_fixed(m.pitch, 1))),
        metric(
            catalog,
            "💧",
            "max_savings",
            "Maximum water savings",
            format!("{} %", to_fixed(m.water_savings_percent, 2)),
        ),
    ]
}

fn custom_metrics(m: &CustomMetrics, catalog: &LanguageCatalog) -> Vec<MetricLine> {
    vec![
        metric(
            catalog,
            "💧",
            "water_savings",
            "Water savings",
            format!("{} %", to_fixed(m.water_savings, 2)),
        ),
        metric(
            catalog,
            "☀️",
            "dli_agri",
            "Agrivoltaic DLI",
            format!("{} mol/m²/day", to_fixed(m.dli_agri, 2)),
        ),
        comparison(
            catalog,
            "dli_open",
            "Open-field DLI",
            format!("{} mol/m²/day", to_fixed(m.dli_open, 2)),
        ),
        metric(
            catalog,
            "🌡️",
            "peak_temp_agri",
            "Agrivoltaic peak temperature",
            format!("{} °C", to_fixed(m.peak_temp_agri, 2)),
        ),
        comparison(
            catalog,
            "peak_temp_open",
            "Open-field peak temperature",
            format!("{} °C", to_fixed(m.peak_temp_open, 2)),
        ),
    ]
}

fn comment_block(comment: &AnalysisComment, catalog: &LanguageCatalog) -> CommentBlock {
    CommentBlock {
        tag: comment.tag.clone(),
        title: catalog.resolve(&comment.title_key, Some(COMMENT_TITLE_FALLBACK)),
        body: comment.text.clone(),
    }
}

/// `None` leaves the statically bound title in place.
fn chart_title(id: ChartId, spec: &ChartSpec, catalog: &LanguageCatalog) -> Option<String> {
    let params = spec.title_params();
    let template = match (&spec.title_key, &spec.title) {
        (Some(key), literal) => {
            catalog.resolve(key, Some(literal.as_deref().unwrap_or(id.default_title())))
        }
        (None, Some(literal)) => literal.clone(),
        // The default peak title carries a `{date}` slot; without a date use the plain wording.
        (None, None) if id == ChartId::PeakTemp && !params.contains_key("date") => {
            catalog.resolve(PEAK_TEMP_UNDATED_KEY, Some(PEAK_TEMP_UNDATED_FALLBACK))
        }
        (None, None) if id == ChartId::PeakTemp => {
            catalog.resolve(id.title_key(), Some(id.default_title()))
        }
        (None, None) => return None,
    };
    Some(substitute(&template, &params))
}

/// Resolves a dataset's display label exactly once.
pub fn resolve_dataset_label(spec: &DatasetSpec, catalog: &LanguageCatalog) -> String {
    match &spec.label_key {
        Some(key) => {
            let template = catalog.resolve(key, spec.label.as_deref());
            substitute(&template, &spec.label_params())
        }
        None => spec.label.clone().unwrap_or_default(),
    }
}

fn dataset(i: usize, spec: &DatasetSpec, catalog: &LanguageCatalog) -> Dataset {
    let palette = palette_color(CHART_CONFIG.series_palette, i);
    let color = spec
        .border_color
        .as_deref()
        .and_then(parse_css_color)
        .unwrap_or(palette);
    let dash = spec
        .border_dash
        .as_deref()
        .and_then(|d| match d {
            [dash, gap, ..] => Some([*dash, *gap]),
            [dash] => Some([*dash, *dash]),
            [] => None,
        });

    Dataset {
        label: resolve_dataset_label(spec, catalog),
        points: spec.data.clone(),
        kind: spec.chart_type.as_deref().and_then(ChartKind::from_type_name),
        color,
        fill_color: spec.background_color.as_deref().and_then(parse_css_color),
        width: spec.border_width.unwrap_or(CHART_CONFIG.default_line_width),
        dash,
        point_radius: spec.point_radius.unwrap_or(CHART_CONFIG.default_point_radius),
        fill: spec.fills(),
        is_marker: false,
    }
}

fn axis_title(title: Option<&str>, catalog: &LanguageCatalog) -> Option<String> {
    // Axis titles may be keys or literals.
    title.map(|t| catalog.resolve(t, Some(t)))
}

fn chart_plan(id: ChartId, spec: &ChartSpec, catalog: &LanguageCatalog) -> ChartPlan {
    let kind = spec
        .chart_type
        .as_deref()
        .and_then(ChartKind::from_type_name)
        .unwrap_or(id.default_kind());

    let x_scale = match id {
        ChartId::Optimization => Some(ScaleKind::Linear),
        _ => None,
    };

    ChartPlan {
        id,
        kind,
        data: ChartData {
            labels: spec.labels.clone(),
            datasets: spec
                .datasets
                .iter()
                .enumerate()
                .map(|(i, d)| dataset(i, d, catalog))
                .collect(),
        },
        options: ChartOptions {
            x: AxisOptions {
                scale: x_scale,
                title: axis_title(spec.x_title.as_deref(), catalog),
                ..Default::default()
            },
            y: AxisOptions {
                title: axis_title(spec.y_title.as_deref(), catalog),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

fn marker_color() -> Color32 {
    parse_css_color(CHART_CONFIG.marker_color).unwrap_or_else(|| {
        log::error!("Marker colour '{}' is not a CSS colour", CHART_CONFIG.marker_color);
        Color32::RED
    })
}

/// Vertical dashed line at the optimal pitch, from zero to the best savings.
fn optimal_pitch_marker(pitch: f64, max_savings: f64, catalog: &LanguageCatalog) -> Dataset {
    Dataset {
        label: catalog.resolve(MARKER_LABEL_KEY, Some(MARKER_LABEL_FALLBACK)),
        points: vec![
            DataPoint::Xy { x: pitch, y: 0.0 },
            DataPoint::Xy {
                x: pitch,
                y: max_savings,
            },
        ],
        kind: Some(ChartKind::Line),
        color: marker_color(),
        fill_color: None,
        width: CHART_CONFIG.marker_width,
        dash: Some(CHART_CONFIG.marker_dash),
        point_radius: 0.0,
        fill: false,
        is_marker: true,
    }
}

/// Logs the size of a freshly built plan when chart logging is on.
pub(crate) fn log_plan(plan: &RenderPlan) {
    if DF.log_charts {
        log::info!(
            "Render plan: {} metrics, {} comments, {} charts",
            plan.metrics.len(),
            plan.comments.len(),
            plan.charts.len()
        );
    }
}
