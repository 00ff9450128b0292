//! Observer adapters for game sessions.

pub mod tally;
pub mod tracing_observer;

pub use tally::{OutcomeTally, Tally};
pub use tracing_observer::TracingObserver;
