// Domain types and value objects
mod field;
mod input_form;
mod request;

pub use field::{FieldGroup, FieldId};
pub use input_form::InputForm;
pub use request::{CropParams, SimulationMode, SimulationRequest, SystemParams};
