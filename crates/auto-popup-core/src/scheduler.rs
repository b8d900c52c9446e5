use std::time::Duration;

/// Deferred work the controller asks its host to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// First display of the pop-up after page load.
    Open,
    /// Dismissal after the success message has been shown.
    AutoClose,
}

impl ScheduledTask {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::AutoClose => "auto_close",
        }
    }
}

/// One-shot timers. Scheduled tasks are never cancelled; when one comes due the host hands
/// it back through `PopupController::run_task`.
pub trait PopupScheduler {
    fn schedule(&mut self, task: ScheduledTask, delay: Duration);
}
