//! Observability module for structured logging.

mod logging;

pub use logging::{LoggingError, init_logging};
