//! View controller subsystem.
//!
//! # Data Flow
//! ```text
//! user action (console)
//!     → view.rs (validate, guard, call bridge / contract)
//!     → state.rs (new ViewState snapshot swapped in)
//!     → render.rs (snapshot → text page)
//! ```
//!
//! # Design Decisions
//! - Bridge and contract are injected, never global
//! - One in-flight guard per action (guard.rs)
//! - Dataset reloads carry a generation number; stale results are dropped
//! - Error `Display` text is the user-facing notice (error.rs)

pub mod error;
pub mod guard;
pub mod render;
pub mod state;
pub mod view;

pub use error::{Action, ActionError};
pub use state::{AccessStatus, Dataset, ViewState};
pub use view::{LoadOutcome, ViewController};
