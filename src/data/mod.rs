//! Network collaborators.

mod simulator;

pub use simulator::{HttpSimulatorApi, SimulatorApi};
