/// Logging port used by every use case.
///
/// Implemented in the `logger` infrastructure crate on top of `tracing`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
