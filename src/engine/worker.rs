use {
    crate::{config::DF, data::SimulatorApi, domain::SimulationRequest},
    eframe::egui,
    std::{future::Future, sync::Arc, sync::mpsc::Sender},
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Result, tokio::runtime::Runtime};

use super::messages::{Dispatcher, NetEvent, Ticket};

#[cfg(not(target_arch = "wasm32"))]
pub type SharedApi = Arc<dyn SimulatorApi + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type SharedApi = Arc<dyn SimulatorApi>;

/// Runs network calls off the UI turn and posts each outcome back as a `NetEvent`.
///
/// NATIVE: jobs run on a private tokio runtime.
/// WASM: jobs run on the browser event loop via `spawn_local`.
pub struct NetworkDispatcher {
    api: SharedApi,
    tx: Sender<NetEvent>,
    /// Wakes the UI when a result lands; absent in headless use.
    repaint: Option<egui::Context>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<Runtime>,
}

impl NetworkDispatcher {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(api: SharedApi, tx: Sender<NetEvent>, repaint: Option<egui::Context>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("agrivolt-net")
            .enable_all()
            .build()?;
        Ok(Self {
            api,
            tx,
            repaint,
            runtime: Arc::new(runtime),
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(api: SharedApi, tx: Sender<NetEvent>, repaint: Option<egui::Context>) -> Self {
        Self { api, tx, repaint }
    }

    fn deliver(tx: &Sender<NetEvent>, repaint: Option<&egui::Context>, event: NetEvent) {
        if tx.send(event).is_err() {
            log::warn!("UI is gone; dropping network result");
            return;
        }
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&self, job: impl Future<Output = NetEvent> + Send + 'static) {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let event = job.await;
            Self::deliver(&tx, repaint.as_ref(), event);
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&self, job: impl Future<Output = NetEvent> + 'static) {
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let event = job.await;
            Self::deliver(&tx, repaint.as_ref(), event);
        });
    }
}

impl Dispatcher for NetworkDispatcher {
    fn send_simulation(&mut self, ticket: Ticket, request: SimulationRequest) {
        if DF.log_network {
            log::info!("POST simulate #{} ({} mode)", ticket, request.mode);
        }
        let api = self.api.clone();
        self.spawn(async move {
            NetEvent::Simulation {
                ticket,
                outcome: api.simulate(&request).await,
            }
        });
    }

    fn fetch_language(&mut self, ticket: Ticket, code: String) {
        if DF.log_network {
            log::info!("GET language '{}' #{}", code, ticket);
        }
        let api = self.api.clone();
        self.spawn(async move {
            let outcome = api.fetch_language(&code).await;
            NetEvent::Language {
                ticket,
                code,
                outcome,
            }
        });
    }

    fn lookup_location(&mut self, ticket: Ticket, lat: String, lon: String) {
        if DF.log_network {
            log::info!("POST location #{} ({}, {})", ticket, lat, lon);
        }
        let api = self.api.clone();
        self.spawn(async move {
            NetEvent::Location {
                ticket,
                outcome: api.location_name(&lat, &lon).await,
            }
        });
    }
}
