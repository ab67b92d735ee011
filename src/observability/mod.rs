//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Bridge, contract, controller and console produce:
//!     → logging.rs (structured log events, one span per user action)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (log lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
