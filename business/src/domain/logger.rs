/// Logging port used by the use cases.
///
/// Kept free of any logging framework so tests can count and inspect records.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
