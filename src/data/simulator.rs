use {
    crate::{
        config::{DF, SERVER},
        domain::SimulationRequest,
        error::DashboardError,
        models::SimulationResult,
    },
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
};

/// The remote simulator and its companion endpoints.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SimulatorApi {
    async fn simulate(&self, request: &SimulationRequest)
    -> Result<SimulationResult, DashboardError>;

    /// Raw body of the language resource; parsing is the catalog's job.
    async fn fetch_language(&self, code: &str) -> Result<String, DashboardError>;

    async fn location_name(&self, lat: &str, lon: &str) -> Result<String, DashboardError>;
}

#[derive(Debug, Serialize)]
struct LocationQuery<'a> {
    lat: &'a str,
    lon: &'a str,
}

#[derive(Debug, Deserialize)]
struct LocationAnswer {
    location_name: String,
}

/// Body of every failure status.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: Option<String>,
}

/// JSON over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSimulatorApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSimulatorApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(e: reqwest::Error) -> DashboardError {
    DashboardError::Transport(e.to_string())
}

/// Pulls the `error` field out of a failure response, if it has one.
async fn application_error(response: reqwest::Response) -> DashboardError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|m| !m.is_empty());
    if DF.log_network {
        log::warn!("Simulator answered {} ({:?})", status, message);
    }
    DashboardError::Application(message)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SimulatorApi for HttpSimulatorApi {
    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, DashboardError> {
        let response = self
            .client
            .post(self.url(SERVER.simulate_path))
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(application_error(response).await);
        }
        response
            .json::<SimulationResult>()
            .await
            .map_err(|e| DashboardError::MalformedResult(e.to_string()))
    }

    async fn fetch_language(&self, code: &str) -> Result<String, DashboardError> {
        let response = self
            .client
            .get(self.url(&SERVER.language_path(code)))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::LocalizationLoad {
                code: code.to_string(),
                reason: format!("server answered {}", status),
            });
        }
        response.text().await.map_err(transport)
    }

    async fn location_name(&self, lat: &str, lon: &str) -> Result<String, DashboardError> {
        let response = self
            .client
            .post(self.url(SERVER.location_path))
            .json(&LocationQuery { lat, lon })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(application_error(response).await);
        }
        response
            .json::<LocationAnswer>()
            .await
            .map(|answer| answer.location_name)
            .map_err(|e| DashboardError::MalformedResult(e.to_string()))
    }
}
