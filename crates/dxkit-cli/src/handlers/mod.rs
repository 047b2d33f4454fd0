pub mod env;
pub mod find;
pub mod job_input;
