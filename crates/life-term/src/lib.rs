//! Terminal front end for life-core.
//!
//! Holds the driver-side state the engine leaves to its caller: the pause
//! flag, the step counter and limit, and the delay between generations.

pub mod app;
pub mod cli;
pub mod session;
pub mod term;

pub use cli::Args;
pub use session::{Cadence, Session, Tick};
