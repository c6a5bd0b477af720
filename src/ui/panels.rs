use {
    crate::{
        config::SERVER,
        domain::{FieldGroup, FieldId, InputForm, SimulationMode},
        render::TextSlot,
        theme::ThemeMode,
        ui::{DashboardScene, UI_CONFIG, UiStyleExt, colored_heading},
    },
    eframe::egui::{
        Align, Button, ComboBox, Context, Grid, Layout, RichText, ScrollArea, SidePanel,
        TextEdit, TopBottomPanel, Ui,
    },
    strum::IntoEnumIterator,
};

/// What the user asked for during this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    RunSimulation,
    LocateCoordinates,
    SwitchLanguage(String),
    ToggleTheme,
}

/// Title, language selector and theme toggle.
pub(crate) fn render_top_panel(
    ctx: &Context,
    scene: &DashboardScene,
    language: &str,
    theme: ThemeMode,
    actions: &mut Vec<UiAction>,
) {
    TopBottomPanel::top("top_panel")
        .frame(UI_CONFIG.top_panel_frame(theme))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(colored_heading(scene.text(TextSlot::AppTitle), theme));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let icon = match theme {
                        ThemeMode::Light => "🌙",
                        ThemeMode::Dark => "☀",
                    };
                    let toggle = format!("{} {}", icon, scene.text(TextSlot::ThemeToggle));
                    if ui.button(toggle).clicked() {
                        actions.push(UiAction::ToggleTheme);
                    }
                    ui.add_space(12.0);

                    let current = SERVER
                        .languages
                        .iter()
                        .find(|(code, _)| *code == language)
                        .map(|(_, name)| *name)
                        .unwrap_or(language);
                    ComboBox::from_id_salt("language_select")
                        .selected_text(current)
                        .show_ui(ui, |ui| {
                            for (code, name) in SERVER.languages {
                                if ui.selectable_label(*code == language, *name).clicked()
                                    && *code != language
                                {
                                    actions.push(UiAction::SwitchLanguage(code.to_string()));
                                }
                            }
                        });
                    ui.label(scene.text(TextSlot::LanguageLabel));
                });
            });
        });
}

fn field_row(ui: &mut Ui, scene: &DashboardScene, form: &mut InputForm, field: FieldId, enabled: bool) {
    ui.label(scene.text(TextSlot::FieldLabel(field)));
    ui.add_enabled(
        enabled,
        TextEdit::singleline(form.value_mut(field))
            .id_salt(field.element_id())
            .hint_text(scene.placeholder(TextSlot::FieldInput(field)))
            .desired_width(UI_CONFIG.input_width),
    );
    ui.end_row();
}

fn field_grid(
    ui: &mut Ui,
    scene: &DashboardScene,
    form: &mut InputForm,
    group: FieldGroup,
    id_salt: &str,
) {
    Grid::new(id_salt)
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for field in FieldId::iter().filter(|f| f.group() == group) {
                field_row(ui, scene, form, field, true);
            }
        });
}

/// The configuration form.
pub(crate) fn render_input_panel(
    ctx: &Context,
    scene: &DashboardScene,
    form: &mut InputForm,
    theme: ThemeMode,
    busy: bool,
    actions: &mut Vec<UiAction>,
) {
    SidePanel::left("input_panel")
        .frame(UI_CONFIG.side_panel_frame(theme))
        .resizable(false)
        .exact_width(UI_CONFIG.side_panel_width)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.label_subheader(scene.text(TextSlot::SystemHeading), theme);
                field_grid(ui, scene, form, FieldGroup::System, "system_fields");
                ui.horizontal(|ui| {
                    if ui.button(scene.text(TextSlot::LocateButton)).clicked() {
                        actions.push(UiAction::LocateCoordinates);
                    }
                    let location = scene.text(TextSlot::LocationName);
                    if !location.is_empty() {
                        ui.label_colored(location, UI_CONFIG.colors(theme).location);
                    }
                });
                ui.separator();

                ui.label_subheader(scene.text(TextSlot::CropHeading), theme);
                field_grid(ui, scene, form, FieldGroup::Crop, "crop_fields");
                ui.separator();

                ui.label_subheader(scene.text(TextSlot::ModeHeading), theme);
                ui.radio_value(
                    &mut form.mode,
                    SimulationMode::Optimization,
                    scene.text(TextSlot::ModeOptimization),
                );
                ui.radio_value(
                    &mut form.mode,
                    SimulationMode::Custom,
                    scene.text(TextSlot::ModeCustom),
                );
                let enabled = form.custom_pitch_enabled();
                Grid::new("mode_fields").num_columns(2).show(ui, |ui| {
                    field_row(ui, scene, form, FieldId::CustomPitch, enabled);
                });
                ui.add_space(10.0);

                let run = Button::new(RichText::new(scene.text(TextSlot::RunButton)).strong())
                    .min_size([UI_CONFIG.side_panel_width - 20.0, 30.0].into());
                // Stays clickable while loading: a resubmission supersedes the last one.
                let mut response = ui.add(run);
                if busy {
                    response = response.on_hover_text(scene.text(TextSlot::LoadingMessage));
                }
                if response.clicked() {
                    actions.push(UiAction::RunSimulation);
                }
            });
        });
}
