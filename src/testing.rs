//! In-memory stand-ins for the renderer, dispatcher and fixtures shared by unit tests.

use {
    crate::{
        charts::ChartInstance,
        domain::SimulationRequest,
        engine::{Dispatcher, Ticket},
        models::{ChartId, SimulationResult},
        render::{CommentBlock, MetricLine, Renderer, Section, TextSlot},
    },
    serde_json::json,
    std::collections::BTreeMap,
};

/// Records everything written to it.
#[derive(Debug)]
pub struct RecordingRenderer {
    pub texts: BTreeMap<TextSlot, String>,
    pub placeholders: BTreeMap<TextSlot, String>,
    pub visibility: BTreeMap<Section, bool>,
    pub metrics: Vec<MetricLine>,
    pub comments: Vec<CommentBlock>,
    pub drawn: Vec<(ChartId, u64)>,
    pub disposed: Vec<ChartId>,
    pub draw_count: usize,
    pub theme_updates: usize,
    pub charting: bool,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self {
            texts: BTreeMap::new(),
            placeholders: BTreeMap::new(),
            visibility: BTreeMap::new(),
            metrics: Vec::new(),
            comments: Vec::new(),
            drawn: Vec::new(),
            disposed: Vec::new(),
            draw_count: 0,
            theme_updates: 0,
            charting: true,
        }
    }
}

impl RecordingRenderer {
    pub fn without_charting() -> Self {
        Self {
            charting: false,
            ..Self::default()
        }
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    pub fn placeholder(&self, slot: TextSlot) -> Option<&str> {
        self.placeholders.get(&slot).map(String::as_str)
    }

    pub fn visible(&self, section: Section) -> Option<bool> {
        self.visibility.get(&section).copied()
    }
}

impl Renderer for RecordingRenderer {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_placeholder(&mut self, slot: TextSlot, text: &str) {
        self.placeholders.insert(slot, text.to_string());
    }

    fn set_visible(&mut self, section: Section, visible: bool) {
        self.visibility.insert(section, visible);
    }

    fn show_metrics(&mut self, metrics: &[MetricLine]) {
        self.metrics = metrics.to_vec();
    }

    fn show_comments(&mut self, comments: &[CommentBlock]) {
        self.comments = comments.to_vec();
    }

    fn charting_available(&self) -> bool {
        self.charting
    }

    fn draw_chart(&mut self, id: ChartId, chart: &ChartInstance) {
        self.drawn.push((id, chart.instance_id));
        self.draw_count += 1;
    }

    fn update_chart_theme(&mut self, _id: ChartId, _chart: &ChartInstance) {
        self.theme_updates += 1;
    }

    fn dispose_chart(&mut self, id: ChartId) {
        self.disposed.push(id);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Simulation(Ticket, SimulationRequest),
    Language(Ticket, String),
    Location(Ticket, String, String),
}

/// Remembers calls instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub sent: Vec<Sent>,
}

impl Dispatcher for RecordingDispatcher {
    fn send_simulation(&mut self, ticket: Ticket, request: SimulationRequest) {
        self.sent.push(Sent::Simulation(ticket, request));
    }

    fn fetch_language(&mut self, ticket: Ticket, code: String) {
        self.sent.push(Sent::Language(ticket, code));
    }

    fn lookup_location(&mut self, ticket: Ticket, lat: String, lon: String) {
        self.sent.push(Sent::Location(ticket, lat, lon));
    }
}

/// Optimization-mode answer with an optimization chart and a monthly bar chart.
pub fn optimization_payload() -> SimulationResult {
    serde_json::from_value(json!({
        "results": {"pitch": 6.2, "water_savings_percent": 31.42},
        "graph_data": {
            "optimization": {
                "labels": [3.0, 4.0, 5.0, 6.0, 7.0],
                "datasets": [{
                    "label": "Water Savings (%)",
                    "data": [12.0, 20.5, 27.0, 31.4, 29.0],
                    "borderColor": "blue",
                    "fill": false
                }],
                "x_title": "Pitch (m)",
                "optimal_pitch": 6.2,
                "max_savings": 31.42
            },
            "monthly_water": {
                "labels": ["Jan", "Feb", "Mar"],
                "datasets": [{"label_key": "monthly_savings", "label": "Savings (mm)", "data": [10.0, 12.0, 18.0]}]
            }
        },
        "analysis_comments": [
            {"tag": "info", "title_key": "opt_summary_title", "text": "Best pitch is 6.2 m."}
        ]
    }))
    .expect("fixture parses")
}
