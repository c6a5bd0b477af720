use {
    crate::{
        charts::ChartRegistry,
        config::{DF, SERVER},
        domain::{FieldId, InputForm, SimulationRequest},
        error::DashboardError,
        locale::{LanguageCatalog, apply_static_bindings},
        models::SimulationResult,
        render::{Renderer, Section, TextSlot},
        theme::ThemeTokens,
        utils::{AppInstant, format_duration_ms},
    },
    strum_macros::Display,
};

use super::{
    interpreter::{interpret, log_plan},
    messages::{Dispatcher, NetEvent, Ticket},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum SessionPhase {
    /// Nothing submitted yet; the welcome placeholder is showing.
    #[default]
    Idle,
    Validating,
    Loading,
    Success,
    Error,
}

/// The services a controller turn operates on, borrowed from their single owner.
pub struct SessionContext<'a> {
    pub catalog: &'a mut LanguageCatalog,
    pub tokens: ThemeTokens,
    pub charts: &'a mut ChartRegistry,
    pub renderer: &'a mut dyn Renderer,
}

struct InFlight {
    ticket: Ticket,
    request: SimulationRequest,
    started: AppInstant,
}

/// Request Lifecycle Controller.
///
/// Every outgoing call gets a fresh ticket. Only the latest simulation, language and
/// location ticket is honoured; anything older is logged and dropped on arrival.
#[derive(Default)]
pub struct SessionController {
    phase: SessionPhase,
    next_ticket: Ticket,
    simulation: Option<InFlight>,
    language: Option<(Ticket, String)>,
    location: Option<Ticket>,
    last_error: Option<DashboardError>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&DashboardError> {
        self.last_error.as_ref()
    }

    /// Whether a simulation response is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.simulation.is_some()
    }

    /// Language requested most recently and not yet answered.
    pub fn pending_language(&self) -> Option<&str> {
        self.language.as_ref().map(|(_, code)| code.as_str())
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn enter(&mut self, phase: SessionPhase) {
        if DF.log_lifecycle && self.phase != phase {
            log::info!("Session: {} -> {}", self.phase, phase);
        }
        self.phase = phase;
    }

    /// Initial visibility: welcome placeholder only.
    pub fn show_idle(&mut self, renderer: &mut dyn Renderer) {
        self.enter(SessionPhase::Idle);
        renderer.set_visible(Section::Welcome, true);
        renderer.set_visible(Section::Loading, false);
        renderer.set_visible(Section::Results, false);
        renderer.set_visible(Section::Error, false);
    }

    /// Validates the form and, if complete, sends it. Returns the ticket of the call.
    ///
    /// Charts from the previous result are destroyed before the request leaves, so a
    /// failed run never leaves stale charts on screen.
    pub fn submit(
        &mut self,
        form: &InputForm,
        ctx: &mut SessionContext<'_>,
        dispatcher: &mut dyn Dispatcher,
    ) -> Option<Ticket> {
        self.enter(SessionPhase::Validating);
        if let Some(previous) = self.simulation.take()
            && DF.log_stale_responses
        {
            log::info!("New submission supersedes in-flight #{}", previous.ticket);
        }

        let lang = ctx
            .catalog
            .code()
            .unwrap_or(SERVER.default_language)
            .to_string();
        let request = match form.collect(&lang) {
            Ok(request) => request,
            Err(e) => {
                self.fail(DashboardError::from(e), ctx);
                return None;
            }
        };

        self.enter(SessionPhase::Loading);
        ctx.renderer.set_visible(Section::Welcome, false);
        ctx.renderer.set_visible(Section::Results, false);
        ctx.renderer.set_visible(Section::Error, false);
        ctx.renderer.set_visible(Section::Loading, true);
        ctx.charts.destroy_all(ctx.renderer);

        let ticket = self.issue_ticket();
        self.simulation = Some(InFlight {
            ticket,
            request: request.clone(),
            started: AppInstant::now(),
        });
        dispatcher.send_simulation(ticket, request);
        Some(ticket)
    }

    /// Routes a completed network call to its handler.
    pub fn handle(&mut self, event: NetEvent, ctx: &mut SessionContext<'_>) {
        match event {
            NetEvent::Simulation { ticket, outcome } => {
                self.on_simulation_response(ticket, outcome, ctx)
            }
            NetEvent::Language {
                ticket,
                code,
                outcome,
            } => self.on_language(ticket, &code, outcome, ctx),
            NetEvent::Location { ticket, outcome } => self.on_location(ticket, outcome, ctx),
        }
    }

    pub fn on_simulation_response(
        &mut self,
        ticket: Ticket,
        outcome: Result<SimulationResult, DashboardError>,
        ctx: &mut SessionContext<'_>,
    ) {
        let in_flight = match self.simulation.take() {
            Some(f) if f.ticket == ticket => f,
            other => {
                self.simulation = other;
                if DF.log_stale_responses {
                    log::info!("Dropping stale simulation response #{}", ticket);
                }
                return;
            }
        };
        if DF.log_network {
            log::info!(
                "Simulation #{} answered in {}",
                ticket,
                format_duration_ms(in_flight.started.elapsed().as_millis())
            );
        }

        let plan = outcome.and_then(|result| {
            crate::trace_time!("interpret results", 5_000, {
                interpret(&result, &in_flight.request, ctx.catalog)
            })
        });
        match plan {
            Ok(plan) => {
                log_plan(&plan);
                plan.apply(ctx.charts, ctx.tokens, ctx.renderer);
                self.last_error = None;
                self.enter(SessionPhase::Success);
                ctx.renderer.set_visible(Section::Loading, false);
                ctx.renderer.set_visible(Section::Results, true);
            }
            Err(e) => self.fail(e, ctx),
        }
    }

    fn fail(&mut self, error: DashboardError, ctx: &mut SessionContext<'_>) {
        match &error {
            DashboardError::Validation(e) => log::warn!("Submission rejected: {}", e),
            e => log::error!("Simulation failed: {}", e),
        }
        let message = error.user_message(ctx.catalog);
        self.enter(SessionPhase::Error);
        ctx.renderer.set_text(TextSlot::ErrorMessage, &message);
        ctx.renderer.set_visible(Section::Welcome, false);
        ctx.renderer.set_visible(Section::Loading, false);
        ctx.renderer.set_visible(Section::Results, false);
        ctx.renderer.set_visible(Section::Error, true);
        self.last_error = Some(error);
    }

    /// Requests a language resource. The catalog is only replaced once it arrives.
    pub fn switch_language(&mut self, code: &str, dispatcher: &mut dyn Dispatcher) -> Ticket {
        let ticket = self.issue_ticket();
        self.language = Some((ticket, code.to_string()));
        if DF.log_locale {
            log::info!("Requesting language '{}' (#{})", code, ticket);
        }
        dispatcher.fetch_language(ticket, code.to_string());
        ticket
    }

    pub fn on_language(
        &mut self,
        ticket: Ticket,
        code: &str,
        outcome: Result<String, DashboardError>,
        ctx: &mut SessionContext<'_>,
    ) {
        if !matches!(&self.language, Some((t, _)) if *t == ticket) {
            if DF.log_stale_responses {
                log::info!("Dropping stale language '{}' (#{})", code, ticket);
            }
            return;
        }
        self.language = None;

        // Failures are logged by the catalog, which keeps the current language.
        if ctx.catalog.load(code, outcome).is_ok() {
            let written = apply_static_bindings(ctx.catalog, ctx.renderer);
            if DF.log_locale {
                log::info!("Re-bound {} text elements for '{}'", written, code);
            }
        }
    }

    /// Looks up the place name for the entered coordinates.
    pub fn request_location(
        &mut self,
        form: &InputForm,
        ctx: &mut SessionContext<'_>,
        dispatcher: &mut dyn Dispatcher,
    ) -> Option<Ticket> {
        let lat = form.value(FieldId::Latitude).trim();
        let lon = form.value(FieldId::Longitude).trim();
        if lat.is_empty() || lon.is_empty() {
            let text = ctx
                .catalog
                .resolve("location_needs_coords", Some("Enter latitude and longitude first."));
            ctx.renderer.set_text(TextSlot::LocationName, &text);
            return None;
        }

        let ticket = self.issue_ticket();
        self.location = Some(ticket);
        let text = ctx.catalog.resolve("locating", Some("Locating..."));
        ctx.renderer.set_text(TextSlot::LocationName, &text);
        dispatcher.lookup_location(ticket, lat.to_string(), lon.to_string());
        Some(ticket)
    }

    pub fn on_location(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, DashboardError>,
        ctx: &mut SessionContext<'_>,
    ) {
        if self.location != Some(ticket) {
            if DF.log_stale_responses {
                log::info!("Dropping stale location response #{}", ticket);
            }
            return;
        }
        self.location = None;

        let text = match outcome {
            Ok(name) => name,
            Err(DashboardError::Application(Some(message))) => message,
            Err(e) => {
                log::warn!("Location lookup failed: {}", e);
                ctx.catalog
                    .resolve("location_not_found", Some("Location not found."))
            }
        };
        ctx.renderer.set_text(TextSlot::LocationName, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::SimulationMode,
        models::ChartId,
        testing::{RecordingDispatcher, RecordingRenderer, Sent, optimization_payload},
        theme::ThemeMode,
    };
    use serde_json::json;
    use std::collections::HashMap;

    struct Harness {
        catalog: LanguageCatalog,
        charts: ChartRegistry,
        renderer: RecordingRenderer,
        dispatcher: RecordingDispatcher,
        controller: SessionController,
    }

    impl Harness {
        fn new() -> Self {
            let mut harness = Self {
                catalog: LanguageCatalog::new(
                    "en",
                    HashMap::from([("run_simulation".to_string(), "Run simulation".to_string())]),
                ),
                charts: ChartRegistry::default(),
                renderer: RecordingRenderer::default(),
                dispatcher: RecordingDispatcher::default(),
                controller: SessionController::new(),
            };
            harness.controller.show_idle(&mut harness.renderer);
            harness
        }

        fn ctx(&mut self) -> (SessionContext<'_>, &mut RecordingDispatcher, &mut SessionController) {
            (
                SessionContext {
                    catalog: &mut self.catalog,
                    tokens: ThemeMode::Light.tokens(),
                    charts: &mut self.charts,
                    renderer: &mut self.renderer,
                },
                &mut self.dispatcher,
                &mut self.controller,
            )
        }

        fn submit(&mut self, form: &InputForm) -> Option<Ticket> {
            let (mut ctx, dispatcher, controller) = self.ctx();
            controller.submit(form, &mut ctx, dispatcher)
        }

        fn respond(&mut self, ticket: Ticket, outcome: Result<SimulationResult, DashboardError>) {
            let (mut ctx, _, controller) = self.ctx();
            controller.handle(NetEvent::Simulation { ticket, outcome }, &mut ctx);
        }

        fn switch_language(&mut self, code: &str) -> Ticket {
            let (_, dispatcher, controller) = self.ctx();
            controller.switch_language(code, dispatcher)
        }

        fn language_arrives(&mut self, ticket: Ticket, code: &str, outcome: Result<String, DashboardError>) {
            let (mut ctx, _, controller) = self.ctx();
            controller.handle(
                NetEvent::Language {
                    ticket,
                    code: code.to_string(),
                    outcome,
                },
                &mut ctx,
            );
        }
    }

    fn custom_form() -> InputForm {
        let mut form = InputForm::default();
        form.mode = SimulationMode::Custom;
        form.set(FieldId::CustomPitch, "5.0");
        form
    }

    fn custom_result() -> SimulationResult {
        serde_json::from_value(json!({
            "results": {
                "water_savings": 23.456,
                "dli_agri": 18.0,
                "dli_open": 27.0,
                "peak_temp_agri": 31.0,
                "peak_temp_open": 34.0
            },
            "graph_data": {},
            "analysis_comments": []
        }))
        .unwrap()
    }

    #[test]
    fn starts_idle_with_welcome_only() {
        let h = Harness::new();
        assert_eq!(h.controller.phase(), SessionPhase::Idle);
        assert_eq!(h.renderer.visible(Section::Welcome), Some(true));
        assert_eq!(h.renderer.visible(Section::Loading), Some(false));
    }

    #[test]
    fn empty_crop_name_never_reaches_network() {
        let mut h = Harness::new();
        let mut form = InputForm::default();
        form.set(FieldId::CropName, "");

        assert_eq!(h.submit(&form), None);
        assert!(h.dispatcher.sent.is_empty());
        assert_eq!(h.controller.phase(), SessionPhase::Error);
        assert_eq!(h.renderer.visible(Section::Error), Some(true));
        assert_eq!(h.renderer.text(TextSlot::ErrorMessage), Some("Please fill in all fields."));
        assert!(matches!(h.controller.last_error(), Some(DashboardError::Validation(_))));
    }

    #[test]
    fn any_empty_required_field_blocks_submission() {
        use strum::IntoEnumIterator;
        for field in FieldId::iter().filter(|f| f.is_always_required()) {
            let mut h = Harness::new();
            let mut form = InputForm::default();
            form.set(field, "  ");
            assert_eq!(h.submit(&form), None, "{:?}", field);
            assert!(h.dispatcher.sent.is_empty());
        }
    }

    #[test]
    fn custom_scenario_renders_two_decimal_savings() {
        let mut h = Harness::new();
        let ticket = h.submit(&custom_form()).unwrap();

        match &h.dispatcher.sent[..] {
            [Sent::Simulation(t, request)] => {
                assert_eq!(*t, ticket);
                assert_eq!(request.mode, SimulationMode::Custom);
                assert_eq!(request.custom_pitch, Some(5.0));
                assert_eq!(request.lang, "en");
            }
            other => panic!("unexpected dispatch: {:?}", other),
        }
        assert_eq!(h.controller.phase(), SessionPhase::Loading);
        assert_eq!(h.renderer.visible(Section::Loading), Some(true));
        assert_eq!(h.renderer.visible(Section::Welcome), Some(false));

        h.respond(ticket, Ok(custom_result()));
        assert_eq!(h.controller.phase(), SessionPhase::Success);
        assert_eq!(h.renderer.metrics.len(), 5);
        assert_eq!(h.renderer.metrics[0].value, "23.46 %");
        assert_eq!(h.renderer.visible(Section::Results), Some(true));
        assert_eq!(h.renderer.visible(Section::Loading), Some(false));
    }

    #[test]
    fn application_error_message_is_shown() {
        let mut h = Harness::new();
        let ticket = h.submit(&InputForm::default()).unwrap();
        h.respond(ticket, Err(DashboardError::Application(Some("bad latitude".into()))));

        assert_eq!(h.controller.phase(), SessionPhase::Error);
        let shown = h.renderer.text(TextSlot::ErrorMessage).unwrap();
        assert!(shown.contains("bad latitude"));
        assert!(!shown.contains("Unknown error"));
        assert_eq!(h.renderer.visible(Section::Results), Some(false));
        assert_eq!(h.renderer.visible(Section::Loading), Some(false));
    }

    #[test]
    fn transport_error_shows_generic_message() {
        let mut h = Harness::new();
        let ticket = h.submit(&InputForm::default()).unwrap();
        h.respond(ticket, Err(DashboardError::Transport("connection refused".into())));
        assert_eq!(
            h.renderer.text(TextSlot::ErrorMessage),
            Some("Simulation failed: Could not reach the simulation server.")
        );
    }

    #[test]
    fn resubmitting_destroys_charts_first_and_never_accumulates_markers() {
        let mut h = Harness::new();
        let first = h.submit(&InputForm::default()).unwrap();
        h.respond(first, Ok(optimization_payload()));
        assert_eq!(h.charts.get(ChartId::Optimization).unwrap().data.marker_count(), 1);

        let second = h.submit(&InputForm::default()).unwrap();
        assert!(h.charts.is_empty());
        assert_eq!(h.renderer.disposed.len(), 2);

        h.respond(second, Ok(optimization_payload()));
        assert_eq!(h.charts.get(ChartId::Optimization).unwrap().data.marker_count(), 1);
    }

    #[test]
    fn failed_request_leaves_no_charts() {
        let mut h = Harness::new();
        let first = h.submit(&InputForm::default()).unwrap();
        h.respond(first, Ok(optimization_payload()));
        let second = h.submit(&InputForm::default()).unwrap();
        h.respond(second, Err(DashboardError::Transport("timeout".into())));
        assert!(h.charts.is_empty());
        assert_eq!(h.renderer.visible(Section::Results), Some(false));
    }

    #[test]
    fn stale_simulation_response_is_dropped() {
        let mut h = Harness::new();
        let first = h.submit(&InputForm::default()).unwrap();
        let second = h.submit(&custom_form()).unwrap();

        h.respond(second, Ok(custom_result()));
        assert_eq!(h.renderer.metrics.len(), 5);

        h.respond(first, Ok(optimization_payload()));
        assert_eq!(h.renderer.metrics.len(), 5);
        assert!(h.charts.is_empty());
        assert_eq!(h.controller.phase(), SessionPhase::Success);
    }

    #[test]
    fn rejected_resubmission_also_retires_in_flight_request() {
        let mut h = Harness::new();
        let first = h.submit(&InputForm::default()).unwrap();
        h.submit(&InputForm::empty());
        h.respond(first, Ok(optimization_payload()));
        assert_eq!(h.controller.phase(), SessionPhase::Error);
        assert!(h.charts.is_empty());
        assert!(!h.controller.is_loading());
    }

    #[test]
    fn malformed_result_surfaces_error() {
        let mut h = Harness::new();
        let ticket = h.submit(&custom_form()).unwrap();
        let mut result = custom_result();
        result.results = json!({"pitch": 6.0});
        h.respond(ticket, Ok(result));
        assert_eq!(h.controller.phase(), SessionPhase::Error);
        assert!(matches!(h.controller.last_error(), Some(DashboardError::MalformedResult(_))));
    }

    #[test]
    fn failed_language_switch_keeps_english_text() {
        let mut h = Harness::new();
        crate::locale::apply_default_text(&mut h.renderer);
        apply_static_bindings(&h.catalog, &mut h.renderer);
        let before = h.renderer.texts.clone();

        let ticket = h.switch_language("fr");
        assert_eq!(h.dispatcher.sent, vec![Sent::Language(ticket, "fr".into())]);
        h.language_arrives(ticket, "fr", Err(DashboardError::Transport("offline".into())));

        assert_eq!(h.renderer.texts, before);
        assert_eq!(h.catalog.code(), Some("en"));
        assert_eq!(h.catalog.resolve("run_simulation", None), "Run simulation");
    }

    #[test]
    fn language_switch_rebinds_text() {
        let mut h = Harness::new();
        let ticket = h.switch_language("fr");
        h.language_arrives(ticket, "fr", Ok(r#"{"run_simulation": "Lancer la simulation"}"#.into()));
        assert_eq!(h.catalog.code(), Some("fr"));
        assert_eq!(h.renderer.text(TextSlot::RunButton), Some("Lancer la simulation"));

        // The next request is sent in the loaded language.
        h.submit(&InputForm::default());
        assert!(matches!(h.dispatcher.sent.last(), Some(Sent::Simulation(_, r)) if r.lang == "fr"));
    }

    #[test]
    fn latest_language_selection_wins() {
        let mut h = Harness::new();
        let fr = h.switch_language("fr");
        let it = h.switch_language("it");
        h.language_arrives(it, "it", Ok(r#"{"run_simulation": "Avvia"}"#.into()));
        h.language_arrives(fr, "fr", Ok(r#"{"run_simulation": "Lancer"}"#.into()));
        assert_eq!(h.catalog.code(), Some("it"));
        assert_eq!(h.renderer.text(TextSlot::RunButton), Some("Avvia"));
    }

    #[test]
    fn location_lookup_requires_coordinates() {
        let mut h = Harness::new();
        let mut form = InputForm::default();
        form.set(FieldId::Latitude, "");
        let (mut ctx, dispatcher, controller) = h.ctx();
        assert_eq!(controller.request_location(&form, &mut ctx, dispatcher), None);
        assert!(h.dispatcher.sent.is_empty());
        assert_eq!(
            h.renderer.text(TextSlot::LocationName),
            Some("Enter latitude and longitude first.")
        );
    }

    #[test]
    fn location_name_is_shown() {
        let mut h = Harness::new();
        let form = InputForm::default();
        let ticket = {
            let (mut ctx, dispatcher, controller) = h.ctx();
            controller.request_location(&form, &mut ctx, dispatcher).unwrap()
        };
        assert_eq!(
            h.dispatcher.sent,
            vec![Sent::Location(ticket, "33.57".into(), "-7.59".into())]
        );
        let (mut ctx, _, controller) = h.ctx();
        controller.handle(
            NetEvent::Location {
                ticket,
                outcome: Ok("Casablanca".into()),
            },
            &mut ctx,
        );
        assert_eq!(h.renderer.text(TextSlot::LocationName), Some("Casablanca"));
    }
}
