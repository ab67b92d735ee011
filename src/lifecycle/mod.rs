//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Bind wallet → Bridge + contract → Controller → On-load fetch
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Session loop exits → Process ends
//!
//! Signals (signals.rs):
//!     SIGINT → Trigger shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use startup::Application;
