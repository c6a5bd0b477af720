use crate::{domain::SimulationRequest, error::DashboardError, models::SimulationResult};

/// Sequence number tagging each outgoing call; only the newest one per kind is applied.
pub type Ticket = u64;

/// Completion of a background network call, delivered back to the UI thread.
#[derive(Debug)]
pub enum NetEvent {
    Simulation {
        ticket: Ticket,
        outcome: Result<SimulationResult, DashboardError>,
    },
    Language {
        ticket: Ticket,
        code: String,
        /// Raw resource body; parsed by the catalog.
        outcome: Result<String, DashboardError>,
    },
    Location {
        ticket: Ticket,
        outcome: Result<String, DashboardError>,
    },
}

/// Issues network calls without blocking. Every call eventually yields exactly one
/// `NetEvent` carrying the same ticket.
pub trait Dispatcher {
    fn send_simulation(&mut self, ticket: Ticket, request: SimulationRequest);
    fn fetch_language(&mut self, ticket: Ticket, code: String);
    fn lookup_location(&mut self, ticket: Ticket, lat: String, lon: String);
}
