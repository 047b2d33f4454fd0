//! Testing infrastructure for dxkit integration tests.
//!
//! - `MockTransport`: scripted API server that records every request
//! - `FixedClock`: deterministic "now" for relative timestamps
//! - `TestWorld`: isolated home and config directories for CLI runs
//! - `assertions` / `fixtures`: JSON helpers and sample documents

pub mod assertions;
pub mod fixtures;
pub mod mock;
pub mod world;

pub use mock::{FixedClock, MockTransport, RecordedRequest};
pub use world::TestWorld;
