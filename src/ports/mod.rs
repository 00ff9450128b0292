//! Ports (trait boundaries) between the game core and its presentation.

pub mod observer;

pub use observer::GameObserver;
