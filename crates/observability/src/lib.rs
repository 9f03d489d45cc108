//! Reldeck observability - tracing setup shared by the binaries
//!
//! Composes an env-filtered subscriber from a console fmt layer and an
//! optional log sink that forwards each formatted line to the TUI debug
//! traces screen.
//!
//! # Quick Start
//!
//! ```no_run
//! use reldeck_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("reldeck")
//!     .with_log_level("info");
//!
//! init(config)?;
//!
//! tracing::info!("service started");
//! # Ok::<(), reldeck_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `SERVICE_NAME` - Service name
//! - `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
