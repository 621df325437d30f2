///
/// Receiver for progress updates of long running loops.
///
/// Methods take `&self` so one sink can be shared by reference with the code doing
/// the work; implementations handle their own interior mutability.
///
pub trait ProgressSink {
    /// Begin a unit of work. `total` is `None` when the amount of work isn't known upfront.
    fn start(&self, total: Option<u64>, message: &str);

    fn advance(&self, delta: u64);

    fn finish(&self, message: &str);
}

/// Sink that drops every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&self, _total: Option<u64>, _message: &str) {}

    fn advance(&self, _delta: u64) {}

    fn finish(&self, _message: &str) {}
}
