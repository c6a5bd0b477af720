use eframe::egui::Context;

use crate::app::{App, state::AppState};

/// One frame of a phase; returns the phase to run next frame.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
