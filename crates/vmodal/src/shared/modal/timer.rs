use gloo_timers::callback::Timeout;
use std::any::Any;

/// A scheduled one-shot task. Dropping it cancels the task if it has not run yet.
#[must_use = "dropping a PendingTask cancels it"]
pub struct PendingTask {
    _guard: Box<dyn Any>,
}

impl PendingTask {
    /// Wraps whatever value cancels the task when dropped.
    pub fn new<G: 'static>(guard: G) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }

    pub fn cancel(self) {}
}

/// Defers work by a number of milliseconds on the UI event loop.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> PendingTask;
}

/// `setTimeout`-backed scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> PendingTask {
        // Dropping a Timeout clears it.
        PendingTask::new(Timeout::new(delay_ms, task))
    }
}
