use {
    crate::{
        models::ChartId,
        render::{Section, TextSlot},
        theme::ThemeMode,
        ui::{DashboardScene, UI_CONFIG, UiStyleExt, chart_view::draw_chart, colored_heading},
    },
    eframe::egui::{CentralPanel, Context, RichText, ScrollArea, Spinner, Ui},
    strum::IntoEnumIterator,
};

/// Welcome, loading, error and results regions, each drawn only while visible.
pub(crate) fn render_dashboard(ctx: &Context, scene: &DashboardScene, theme: ThemeMode) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame(theme))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                if scene.is_visible(Section::Welcome) {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(scene.text(TextSlot::WelcomeMessage)).size(16.0));
                    });
                }

                if scene.is_visible(Section::Loading) {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.add(Spinner::new().size(32.0));
                        ui.label_subdued(scene.text(TextSlot::LoadingMessage), theme);
                    });
                }

                if scene.is_visible(Section::Error) {
                    UI_CONFIG.card_frame(theme).show(ui, |ui| {
                        ui.label_colored(
                            scene.text(TextSlot::ErrorMessage),
                            UI_CONFIG.colors(theme).error,
                        );
                    });
                }

                if scene.is_visible(Section::Results) {
                    render_results(ui, scene, theme);
                }
            });
        });
}

fn render_results(ui: &mut Ui, scene: &DashboardScene, theme: ThemeMode) {
    ui.label(colored_heading(scene.text(TextSlot::ResultsTitle), theme));
    ui.add_space(6.0);

    UI_CONFIG.card_frame(theme).show(ui, |ui| {
        for line in scene.metrics() {
            ui.metric(&line.label, &line.value, line.secondary, theme);
        }
    });

    if !scene.comments().is_empty() {
        ui.add_space(10.0);
        ui.label_subheader(scene.text(TextSlot::CommentsHeading), theme);
        for comment in scene.comments() {
            UI_CONFIG.card_frame(theme).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(&comment.title)
                        .strong()
                        .color(UI_CONFIG.comment_color(&comment.tag)),
                );
                ui.label(&comment.body);
            });
            ui.add_space(4.0);
        }
    }

    for id in ChartId::iter() {
        if !scene.is_visible(Section::ChartContainer(id)) {
            continue;
        }
        ui.add_space(12.0);
        if scene.is_visible(Section::ChartTitle(id)) {
            ui.label_subheader(scene.text(TextSlot::ChartTitle(id)), theme);
        }
        // Hidden containers with no live chart simply stay empty.
        if let Some(chart) = scene.chart(id) {
            draw_chart(ui, id.canvas_id(), chart);
        }
    }
}
