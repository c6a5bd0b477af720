use {
    crate::{
        charts::ChartInstance,
        config::CHART_CONFIG,
        models::{AxisLabel, ChartKind, Dataset, ScaleKind},
    },
    eframe::egui::{Color32, Ui},
    egui_plot::{
        AxisHints, Bar, BarChart, HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints,
        PlotUi, Points, VLine,
    },
};

/// Roughly this many grid lines per axis.
const GRID_DIVISIONS: f64 = 6.0;

/// Draws one live chart. The theme channels of `options` map onto the plot: tick and
/// legend colour become the text colour, grid colour is used for the hand-drawn grid.
pub(crate) fn draw_chart(ui: &mut Ui, plot_id: &str, chart: &ChartInstance) {
    let options = &chart.options;
    let scale = options.x_scale();
    let grid = options.y.grid_color.or(options.x.grid_color);

    ui.scope(|ui| {
        if let Some(tick) = options.x.tick_color.or(options.y.tick_color) {
            ui.visuals_mut().override_text_color = Some(tick);
        }
        if let Some(label) = options.legend.label_color {
            ui.visuals_mut().widgets.noninteractive.fg_stroke.color = label;
        }

        let mut x_axis = AxisHints::new_x();
        if let Some(title) = &options.x.title {
            x_axis = x_axis.label(title.clone());
        }
        if scale == ScaleKind::Category {
            let labels = chart.data.labels.clone();
            x_axis = x_axis.formatter(move |mark, _range| category_label(&labels, mark.value));
        }
        let mut y_axis = AxisHints::new_y();
        if let Some(title) = &options.y.title {
            y_axis = y_axis.label(title.clone());
        }

        let mut plot = Plot::new(plot_id)
            .height(CHART_CONFIG.chart_height)
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .show_grid(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false);
        if options.legend.display != Some(false) {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            if let Some(grid) = grid {
                draw_grid(plot_ui, grid);
            }
            draw_bars(plot_ui, chart);
            for dataset in chart
                .data
                .datasets
                .iter()
                .filter(|d| effective_kind(chart, d) == ChartKind::Line)
            {
                draw_line(plot_ui, chart, dataset, scale);
            }
        });
    });
}

fn effective_kind(chart: &ChartInstance, dataset: &Dataset) -> ChartKind {
    dataset.kind.unwrap_or(chart.kind)
}

/// Category axes show the label of the slot a mark lands on, nothing in between.
fn category_label(labels: &[AxisLabel], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// A step of 1, 2 or 5 times a power of ten giving about `GRID_DIVISIONS` lines.
fn nice_step(span: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / GRID_DIVISIONS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Marks strictly inside `[min, max]`, so they never widen the auto bounds.
fn grid_marks(min: f64, max: f64) -> Vec<f64> {
    let step = nice_step(max - min);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end)
        .map(|i| i as f64 * step)
        .filter(|v| *v > min && *v < max)
        .collect()
}

fn draw_grid(plot_ui: &mut PlotUi, color: Color32) {
    let bounds: PlotBounds = plot_ui.plot_bounds();
    for x in grid_marks(bounds.min()[0], bounds.max()[0]) {
        plot_ui.vline(VLine::new("", x).color(color).width(1.0));
    }
    for y in grid_marks(bounds.min()[1], bounds.max()[1]) {
        plot_ui.hline(HLine::new("", y).color(color).width(1.0));
    }
}

fn draw_line(plot_ui: &mut PlotUi, chart: &ChartInstance, dataset: &Dataset, scale: ScaleKind) {
    let coords = chart.data.coordinates(dataset, scale);
    let mut line = Line::new(dataset.label.clone(), PlotPoints::new(coords.clone()))
        .color(dataset.color)
        .width(dataset.width);
    if let Some([dash, _gap]) = dataset.dash {
        line = line.style(LineStyle::Dashed { length: dash });
    }
    if dataset.fill {
        line = line.fill(0.0);
    }
    plot_ui.line(line);

    if dataset.point_radius > 0.0 {
        plot_ui.points(
            Points::new(dataset.label.clone(), PlotPoints::new(coords))
                .radius(dataset.point_radius)
                .color(dataset.color),
        );
    }
}

/// Bar datasets share each category slot side by side.
fn draw_bars(plot_ui: &mut PlotUi, chart: &ChartInstance) {
    let bar_sets: Vec<&Dataset> = chart
        .data
        .datasets
        .iter()
        .filter(|d| effective_kind(chart, d) == ChartKind::Bar)
        .collect();
    if bar_sets.is_empty() {
        return;
    }
    let width = CHART_CONFIG.bar_group_width / bar_sets.len() as f64;
    let centre = (bar_sets.len() as f64 - 1.0) / 2.0;

    for (k, dataset) in bar_sets.iter().enumerate() {
        let offset = (k as f64 - centre) * width;
        let fill = dataset.fill_color.unwrap_or(dataset.color);
        let bars = chart
            .data
            .coordinates(dataset, ScaleKind::Category)
            .into_iter()
            .map(|[x, y]| Bar::new(x + offset, y).width(width).fill(fill))
            .collect();
        plot_ui.bar_chart(BarChart::new(dataset.label.clone(), bars).color(dataset.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_slots() {
        let labels = vec![AxisLabel::Text("Jan".into()), AxisLabel::Text("Feb".into())];
        assert_eq!(category_label(&labels, 1.0), "Feb");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 5.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn grid_steps_are_round() {
        assert_eq!(nice_step(60.0), 10.0);
        assert_eq!(nice_step(9.0), 2.0);
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(grid_marks(0.0, 30.0), vec![5.0, 10.0, 15.0, 20.0, 25.0]);
    }
}
