use std::fmt;

/// Loss observed at a training step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    /// Zero-based step index.
    pub step: usize,
    /// Loss of the step's forward pass, before its update.
    pub loss: f64,
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: loss = {:.6}", self.step, self.loss)
    }
}

/// Receives periodic progress from a training run.
///
/// Any `FnMut(&ProgressEvent)` closure is a reporter.
pub trait ProgressReporter {
    fn report(&mut self, event: &ProgressEvent);
}

impl<F> ProgressReporter for F
where
    F: FnMut(&ProgressEvent),
{
    fn report(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Forwards progress to the `log` facade at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&mut self, event: &ProgressEvent) {
        log::info!("{}", event);
    }
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report(&mut self, _event: &ProgressEvent) {}
}
