mod core;
mod interpreter;
mod messages;
mod worker;

pub use core::{SessionContext, SessionController, SessionPhase};
pub use interpreter::{ChartPlan, MARKER_LABEL_KEY, RenderPlan, interpret, resolve_dataset_label};
pub use messages::{Dispatcher, NetEvent, Ticket};
pub use worker::NetworkDispatcher;
