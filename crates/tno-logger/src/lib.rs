//! Console logger factory on top of `tracing`.
//!
//! Build a logger from a list of options, then emit records with the usual
//! `tracing` macros while it is the active dispatcher:
//!
//! ```no_run
//! use tno_logger::{new_logger, with_color, with_log_level};
//!
//! let logger = new_logger([with_log_level("debug"), with_color(true)]);
//! logger.in_scope(|| {
//!     tracing::debug!(component = "database", "connection established");
//!     tno_logger::critical!("disk full");
//! });
//! ```
//!
//! Available levels: `debug`, `info`, `warn`, `error`, `critical`.
//! Anything else resolves to `info`.
mod logger;
mod macros;

pub use logger::*;

#[doc(hidden)]
pub use tracing as __tracing;
