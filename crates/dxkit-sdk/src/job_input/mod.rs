//! Job input handling: where input files land and what inputs a program declares.

mod plan;
mod spec;

pub use plan::{FileDownload, InputPlan, NameResolver, load_job_input, plan_job_inputs};
pub use spec::{InputSpec, discover_input_spec, load_dxapp_input_spec, parse_input_spec};
