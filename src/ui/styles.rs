use {
    crate::{theme::ThemeMode, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_heading(text: impl Into<String>, mode: ThemeMode) -> RichText {
    RichText::new(text.into())
        .strong()
        .size(18.0)
        .color(UI_CONFIG.colors(mode).heading)
}

pub(crate) fn colored_subsection_heading(text: impl Into<String>, mode: ThemeMode) -> RichText {
    RichText::new(text.into())
        .strong()
        .color(UI_CONFIG.colors(mode).subsection_heading)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>, mode: ThemeMode);
    fn label_subheader(&mut self, text: impl Into<String>, mode: ThemeMode);
    /// Label on the left, value on the right. `secondary` indents and mutes the row.
    fn metric(&mut self, label: &str, value: &str, secondary: bool, mode: ThemeMode);
    fn label_colored(&mut self, text: impl Into<String>, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, mode: ThemeMode) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors(mode).label_subdued),
        );
    }

    fn label_subheader(&mut self, text: impl Into<String>, mode: ThemeMode) {
        self.label(colored_subsection_heading(text, mode));
    }

    fn metric(&mut self, label: &str, value: &str, secondary: bool, mode: ThemeMode) {
        let colors = UI_CONFIG.colors(mode);
        self.horizontal(|ui| {
            if secondary {
                ui.add_space(18.0);
                ui.label(RichText::new(label).color(colors.label_subdued));
                ui.label(RichText::new(value).color(colors.label_subdued));
            } else {
                ui.label(RichText::new(label).strong());
                ui.label(RichText::new(value).strong().size(16.0).color(colors.metric_value));
            }
        });
    }

    fn label_colored(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text).color(color));
    }
}
