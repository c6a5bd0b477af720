mod registry;

pub use registry::{ChartInstance, ChartRegistry};
