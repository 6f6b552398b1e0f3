/// Progress notification emitted by long-running geometry computations.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A computation with a known number of steps has started.
    Started { total_steps: u64 },
    /// One step of the computation has completed.
    Advanced,
    /// The computation has finished.
    Finished,
    /// A free-form status message.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(ProgressEvent) + Send + Sync + 'a>;

/// Forwards progress events to an optional caller-supplied callback.
///
/// The reporter itself carries no threading or cancellation machinery:
/// callers that need either run the computation on an interruptible task
/// and discard its result.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: ProgressEvent) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
