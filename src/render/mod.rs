//! Rendering capability consumed by the session controller, the results interpreter
//! and the chart registry. The egui dashboard implements it in `ui::DashboardScene`.

use crate::{
    charts::ChartInstance,
    domain::FieldId,
    models::ChartId,
};

/// Every piece of text the controller can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextSlot {
    AppTitle,
    SystemHeading,
    CropHeading,
    ModeHeading,
    ModeOptimization,
    ModeCustom,
    FieldLabel(FieldId),
    FieldInput(FieldId),
    RunButton,
    LocateButton,
    LocationName,
    ThemeToggle,
    LanguageLabel,
    WelcomeMessage,
    LoadingMessage,
    ErrorMessage,
    ResultsTitle,
    CommentsHeading,
    ChartTitle(ChartId),
}

/// Independently shown/hidden regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Welcome,
    Loading,
    Results,
    Error,
    ChartContainer(ChartId),
    ChartTitle(ChartId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    pub label: String,
    pub value: String,
    /// Comparison value rendered indented under the metric before it.
    pub secondary: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentBlock {
    /// Style class, e.g. `info`, `ai`, `ai-error`.
    pub tag: String,
    pub title: String,
    pub body: String,
}

pub trait Renderer {
    fn set_text(&mut self, slot: TextSlot, text: &str);
    /// Hint text of input-like elements.
    fn set_placeholder(&mut self, slot: TextSlot, text: &str);
    fn set_visible(&mut self, section: Section, visible: bool);
    /// Replaces the whole metrics list.
    fn show_metrics(&mut self, metrics: &[MetricLine]);
    /// Replaces the whole comment list.
    fn show_comments(&mut self, comments: &[CommentBlock]);

    /// `false` when no charting backend is present; charts are then skipped.
    fn charting_available(&self) -> bool;
    fn draw_chart(&mut self, id: ChartId, chart: &ChartInstance);
    /// Redraw in place after the chart's theme channels changed.
    fn update_chart_theme(&mut self, id: ChartId, chart: &ChartInstance);
    fn dispose_chart(&mut self, id: ChartId);
}
