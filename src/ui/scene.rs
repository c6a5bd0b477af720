use {
    crate::{
        charts::ChartInstance,
        config::DF,
        locale::apply_default_text,
        models::ChartId,
        render::{CommentBlock, MetricLine, Renderer, Section, TextSlot},
    },
    std::collections::{BTreeMap, HashMap},
};

/// Retained view model of the dashboard. The controller writes into it through
/// `Renderer`; the egui panels read it back every frame.
#[derive(Debug, Default)]
pub struct DashboardScene {
    texts: HashMap<TextSlot, String>,
    placeholders: HashMap<TextSlot, String>,
    visible: HashMap<Section, bool>,
    metrics: Vec<MetricLine>,
    comments: Vec<CommentBlock>,
    charts: BTreeMap<ChartId, ChartInstance>,
}

impl DashboardScene {
    /// A scene showing the built-in English text.
    pub fn new() -> Self {
        let mut scene = Self::default();
        apply_default_text(&mut scene);
        scene
    }

    pub fn text(&self, slot: TextSlot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or_default()
    }

    pub fn placeholder(&self, slot: TextSlot) -> &str {
        self.placeholders
            .get(&slot)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.get(&section).copied().unwrap_or(false)
    }

    pub fn metrics(&self) -> &[MetricLine] {
        &self.metrics
    }

    pub fn comments(&self) -> &[CommentBlock] {
        &self.comments
    }

    pub fn chart(&self, id: ChartId) -> Option<&ChartInstance> {
        self.charts.get(&id)
    }
}

impl Renderer for DashboardScene {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_placeholder(&mut self, slot: TextSlot, text: &str) {
        self.placeholders.insert(slot, text.to_string());
    }

    fn set_visible(&mut self, section: Section, visible: bool) {
        self.visible.insert(section, visible);
    }

    fn show_metrics(&mut self, metrics: &[MetricLine]) {
        self.metrics = metrics.to_vec();
    }

    fn show_comments(&mut self, comments: &[CommentBlock]) {
        self.comments = comments.to_vec();
    }

    fn charting_available(&self) -> bool {
        true
    }

    fn draw_chart(&mut self, id: ChartId, chart: &ChartInstance) {
        self.charts.insert(id, chart.clone());
    }

    fn update_chart_theme(&mut self, id: ChartId, chart: &ChartInstance) {
        match self.charts.get_mut(&id) {
            Some(drawn) => drawn.options = chart.options.clone(),
            None => log::warn!("Theme update for undrawn chart {}", id),
        }
    }

    fn dispose_chart(&mut self, id: ChartId) {
        if self.charts.remove(&id).is_none() && DF.log_charts {
            log::info!("Dispose of undrawn chart {}", id);
        }
    }
}
