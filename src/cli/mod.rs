pub mod orchestration;

pub use orchestration::{run_update_workflow, HookArguments, WorkflowOptions, WorkflowResult};
