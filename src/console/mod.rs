//! Interactive console: the terminal rendition of the page.
//!
//! # Data Flow
//! ```text
//! stdin line
//!     → command.rs (parse into Command)
//!     → session.rs (execute on ViewController, print notice)
//!     → controller::render (redraw page on stdout)
//!
//! CLI subcommand
//!     → oneshot.rs (one action, notice on stdout, exit status)
//! ```

pub mod command;
pub mod oneshot;
pub mod session;

pub use command::{Command, CommandError};
pub use oneshot::OneShot;
pub use session::Session;
