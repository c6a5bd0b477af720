use crate::utils::AppInstant;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

/// Waiting for the first language resource before showing the form.
#[derive(Clone)]
pub(crate) struct BootstrapState {
    pub(crate) started: AppInstant,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
        }
    }
}
