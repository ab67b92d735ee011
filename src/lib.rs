//! Paid dataset access client library.

pub mod blockchain;
pub mod config;
pub mod console;
pub mod controller;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use controller::ViewController;
pub use lifecycle::Shutdown;
