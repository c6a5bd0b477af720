use {
    crate::{
        charts::ChartRegistry,
        data::HttpSimulatorApi,
        domain::InputForm,
        engine::{NetEvent, NetworkDispatcher, SessionContext, SessionController},
        locale::LanguageCatalog,
        theme::{ThemeMode, ThemeState},
        ui::{DashboardScene, UiAction},
    },
    eframe::egui,
    std::sync::{Arc, mpsc, mpsc::Receiver},
};

#[cfg(not(target_arch = "wasm32"))]
use crate::{config::PERSISTENCE, theme::FileStore};

#[cfg(target_arch = "wasm32")]
use crate::theme::LocalStorage;

/// Every service the dashboard runs on, owned by the UI thread.
pub(crate) struct Session {
    pub(crate) catalog: LanguageCatalog,
    pub(crate) theme: ThemeState,
    pub(crate) charts: ChartRegistry,
    pub(crate) scene: DashboardScene,
    pub(crate) controller: SessionController,
    dispatcher: NetworkDispatcher,
    events: Receiver<NetEvent>,
}

impl Session {
    pub(crate) fn start(
        server: &str,
        language: &str,
        repaint: &egui::Context,
    ) -> anyhow::Result<Self> {
        let api = Arc::new(HttpSimulatorApi::new(server));
        let (tx, events) = mpsc::channel();

        #[cfg(not(target_arch = "wasm32"))]
        let (dispatcher, store) = (
            NetworkDispatcher::new(api, tx, Some(repaint.clone()))?,
            FileStore::open(PERSISTENCE.prefs.prefs_path),
        );
        #[cfg(target_arch = "wasm32")]
        let (dispatcher, store) = (
            NetworkDispatcher::new(api, tx, Some(repaint.clone())),
            LocalStorage,
        );

        let mut session = Self {
            catalog: LanguageCatalog::default(),
            theme: ThemeState::load(Box::new(store)),
            charts: ChartRegistry::default(),
            scene: DashboardScene::new(),
            controller: SessionController::new(),
            dispatcher,
            events,
        };
        session.controller.show_idle(&mut session.scene);
        session
            .controller
            .switch_language(language, &mut session.dispatcher);
        Ok(session)
    }

    pub(crate) fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    /// Applies every network result that arrived since the last frame.
    pub(crate) fn pump(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            let mut ctx = SessionContext {
                catalog: &mut self.catalog,
                tokens: self.theme.tokens(),
                charts: &mut self.charts,
                renderer: &mut self.scene,
            };
            self.controller.handle(event, &mut ctx);
        }
    }

    pub(crate) fn perform(&mut self, action: UiAction, form: &InputForm) {
        let mut ctx = SessionContext {
            catalog: &mut self.catalog,
            tokens: self.theme.tokens(),
            charts: &mut self.charts,
            renderer: &mut self.scene,
        };
        match action {
            UiAction::RunSimulation => {
                self.controller
                    .submit(form, &mut ctx, &mut self.dispatcher);
            }
            UiAction::LocateCoordinates => {
                self.controller
                    .request_location(form, &mut ctx, &mut self.dispatcher);
            }
            UiAction::SwitchLanguage(code) => {
                self.controller.switch_language(&code, &mut self.dispatcher);
            }
            UiAction::ToggleTheme => {
                self.theme.toggle(&mut self.charts, &mut self.scene);
            }
        }
    }
}
