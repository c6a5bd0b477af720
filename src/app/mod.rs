mod phases;
mod root;
mod session;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use session::Session;
pub(crate) use state::{AppState, BootstrapState, RunningState};

pub use root::App;
