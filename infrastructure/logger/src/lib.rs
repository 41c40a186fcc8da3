mod tracing_logger;

pub use tracing_logger::{LOG_TARGET, TracingLogger};
