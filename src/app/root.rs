use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, Spinner, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::mem,
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, PhaseView, RunningState, Session},
    config::{DF, SERVER},
    domain::InputForm,
    theme::ThemeMode,
    ui::{UI_CONFIG, render_dashboard, render_input_panel, render_top_panel},
};

/// How long the form waits for the first language before showing English defaults.
const LANGUAGE_GRACE_MS: u128 = 3_000;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    /// Last entered form values; persists across sessions.
    pub(crate) form: InputForm,
    pub(crate) language: String,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) session: Option<Session>,
    #[serde(skip)]
    startup_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: InputForm::default(),
            language: SERVER.default_language.to_string(),
            state: AppState::default(),
            session: None,
            startup_error: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(lang) = args.lang {
            app.language = lang;
        }
        app.state = AppState::Bootstrapping(BootstrapState::default());

        match Session::start(&args.server, &app.language, &cc.egui_ctx) {
            Ok(session) => app.session = Some(session),
            Err(e) => {
                log::error!("Failed to start session: {:#}", e);
                app.startup_error = Some(format!("{:#}", e));
            }
        }
        app
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        let Some(session) = &mut self.session else {
            return AppState::Running(RunningState);
        };
        session.pump();
        let waited = state.started.elapsed().as_millis();
        if session.controller.pending_language().is_none() || waited > LANGUAGE_GRACE_MS {
            if DF.log_lifecycle {
                log::info!("Bootstrap finished after {} ms", waited);
            }
            return AppState::Running(RunningState);
        }

        apply_visuals(ctx, session.theme());
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(Spinner::new().size(32.0));
            });
        });
        ctx.request_repaint();
        AppState::Bootstrapping(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let Some(session) = &mut self.session else {
            self.render_startup_error(ctx);
            return;
        };
        session.pump();
        if let Some(code) = session.catalog.code()
            && code != self.language
        {
            self.language = code.to_string();
        }

        let theme = session.theme();
        apply_visuals(ctx, theme);

        let mut actions = Vec::new();
        render_top_panel(ctx, &session.scene, &self.language, theme, &mut actions);
        render_input_panel(
            ctx,
            &session.scene,
            &mut self.form,
            theme,
            session.controller.is_loading(),
            &mut actions,
        );
        render_dashboard(ctx, &session.scene, theme);

        for action in actions {
            if DF.log_lifecycle {
                log::info!("UI action: {:?}", action);
            }
            session.perform(action, &self.form);
        }
    }

    fn render_startup_error(&self, ctx: &Context) {
        let message = self.startup_error.as_deref().unwrap_or("Session unavailable");
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(message).color(UI_CONFIG.colors(ThemeMode::Light).error));
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_lifecycle {
            log::info!("💾 SAVE [App]: language = {}", self.language);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn apply_visuals(ctx: &Context, theme: ThemeMode) {
    let colors = UI_CONFIG.colors(theme);
    let mut visuals = match theme {
        ThemeMode::Light => Visuals::light(),
        ThemeMode::Dark => Visuals::dark(),
    };
    visuals.window_fill = colors.central_panel;
    visuals.panel_fill = colors.side_panel;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
