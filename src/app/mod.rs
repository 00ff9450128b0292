//! Application layer: configuration and session wiring.
//!
//! ```text
//! GameConfig ──> App ──creates──> GameSession ──notifies──> TracingObserver
//!                 │                                 └──────> OutcomeTally (shared)
//!                 └──creates──> StdRng (reveal delays)
//! ```

pub mod config;
pub mod container;

pub use config::GameConfig;
pub use container::App;
