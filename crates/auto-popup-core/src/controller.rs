use serde::Serialize;
use std::time::Duration;

use crate::config::PopupConfig;
use crate::error::Result;
use crate::scheduler::{PopupScheduler, ScheduledTask};
use crate::surface::{CloseTarget, PopupElements, PopupSurface};

/// What the dialog body currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupContent {
    #[default]
    Form,
    Success,
}

/// Field names of a submitted form. Values stay on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSubmission {
    pub field_names: Vec<String>,
}

impl FormSubmission {
    pub fn new<I, S>(field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field_names: field_names.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupSnapshot {
    pub shown: bool,
    pub visible: bool,
    pub scroll_locked: bool,
    pub content: PopupContent,
    pub open_scheduled: bool,
    pub elements: PopupElements,
}

/// Owns the pop-up's state and drives a [`PopupSurface`].
///
/// `shown` flips to `true` on the first successful open and is never cleared, so the
/// pop-up appears at most once per page view no matter how often `open` is reached.
pub struct PopupController<S> {
    config: PopupConfig,
    surface: S,
    elements: PopupElements,
    shown: bool,
    visible: bool,
    scroll_locked: bool,
    content: PopupContent,
    open_scheduled: bool,
}

impl<S: PopupSurface> PopupController<S> {
    /// Element presence is sampled once here and not revisited.
    pub fn new(config: PopupConfig, surface: S) -> Self {
        let elements = surface.elements();
        tracing::debug!(
            container = elements.container,
            form = elements.form,
            success_message = elements.success_message,
            "auto popup elements resolved"
        );
        Self {
            config,
            surface,
            elements,
            shown: false,
            visible: false,
            scroll_locked: false,
            content: PopupContent::Form,
            open_scheduled: false,
        }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn snapshot(&self) -> PopupSnapshot {
        PopupSnapshot {
            shown: self.shown,
            visible: self.visible,
            scroll_locked: self.scroll_locked,
            content: self.content,
            open_scheduled: self.open_scheduled,
            elements: self.elements,
        }
    }

    /// Arms the first display using the configured delay.
    pub fn start(&mut self, scheduler: &mut impl PopupScheduler) -> bool {
        let delay = self.config.open_delay();
        self.schedule(scheduler, delay)
    }

    /// Arms the one-shot display timer. Later calls are ignored.
    pub fn schedule(&mut self, scheduler: &mut impl PopupScheduler, delay: Duration) -> bool {
        if self.open_scheduled {
            tracing::debug!("auto popup open already scheduled");
            return false;
        }
        self.open_scheduled = true;
        tracing::debug!(delay_ms = delay.as_millis() as u64, "auto popup open scheduled");
        scheduler.schedule(ScheduledTask::Open, delay);
        true
    }

    /// Shows the pop-up if it has never been shown and the container exists.
    pub fn open(&mut self) -> bool {
        if self.shown {
            tracing::debug!("auto popup already shown; skipping open");
            return false;
        }
        if !self.elements.container {
            tracing::debug!("auto popup container missing; skipping open");
            return false;
        }

        apply("reveal container", self.surface.reveal_container());
        apply("suppress page scroll", self.surface.suppress_page_scroll());
        self.shown = true;
        self.visible = true;
        self.scroll_locked = true;
        tracing::info!("auto popup displayed");
        true
    }

    /// Hides the pop-up when the click landed on the backdrop or the close control.
    pub fn close(&mut self, target: CloseTarget) -> bool {
        if !target.dismisses() {
            tracing::debug!(target = target.as_str(), "ignoring click outside close targets");
            return false;
        }
        if !self.elements.container {
            return false;
        }

        apply("conceal container", self.surface.conceal_container());
        apply("restore page scroll", self.surface.restore_page_scroll());
        self.visible = false;
        self.scroll_locked = false;
        tracing::info!(target = target.as_str(), "auto popup closed");
        true
    }

    /// Swaps the form for the success message and arms the auto-close. The host has already
    /// cancelled the browser's default submission by the time this runs.
    pub fn handle_submit(
        &mut self,
        submission: &FormSubmission,
        scheduler: &mut impl PopupScheduler,
    ) -> bool {
        tracing::info!(
            field_count = submission.field_names.len(),
            fields = ?submission.field_names,
            "auto popup form submitted"
        );
        if !self.elements.can_confirm_submit() {
            tracing::debug!("auto popup form or success message missing; no confirmation");
            return false;
        }

        apply("conceal form", self.surface.conceal_form());
        apply("reveal success message", self.surface.reveal_success_message());
        self.content = PopupContent::Success;

        let delay = self.config.auto_close_delay();
        tracing::debug!(delay_ms = delay.as_millis() as u64, "auto popup close scheduled");
        scheduler.schedule(ScheduledTask::AutoClose, delay);
        true
    }

    /// Entry point for timers armed through [`PopupScheduler`].
    pub fn run_task(&mut self, task: ScheduledTask) -> bool {
        match task {
            ScheduledTask::Open => self.open(),
            ScheduledTask::AutoClose => self.close(CloseTarget::Backdrop),
        }
    }
}

fn apply(step: &'static str, result: Result<()>) {
    if let Err(error) = result {
        tracing::warn!(step, error = %error, "auto popup dom update failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PopupError;

    #[derive(Default)]
    struct FailingSurface {
        elements: PopupElements,
        attempts: u32,
    }

    impl PopupSurface for FailingSurface {
        fn elements(&self) -> PopupElements {
            self.elements
        }

        fn reveal_container(&mut self) -> Result<()> {
            self.attempts += 1;
            Err(PopupError::dom("classList unavailable"))
        }

        fn conceal_container(&mut self) -> Result<()> {
            self.attempts += 1;
            Err(PopupError::dom("classList unavailable"))
        }

        fn suppress_page_scroll(&mut self) -> Result<()> {
            self.attempts += 1;
            Err(PopupError::dom("body style unavailable"))
        }

        fn restore_page_scroll(&mut self) -> Result<()> {
            self.attempts += 1;
            Err(PopupError::dom("body style unavailable"))
        }

        fn conceal_form(&mut self) -> Result<()> {
            self.attempts += 1;
            Ok(())
        }

        fn reveal_success_message(&mut self) -> Result<()> {
            self.attempts += 1;
            Ok(())
        }
    }

    #[test]
    fn dom_failures_do_not_reopen_the_popup() {
        let surface = FailingSurface {
            elements: PopupElements::all(),
            attempts: 0,
        };
        let mut controller = PopupController::new(PopupConfig::default(), surface);

        assert!(controller.open());
        assert!(controller.is_shown());
        assert_eq!(controller.surface().attempts, 2);

        assert!(!controller.open());
        assert_eq!(controller.surface().attempts, 2);
    }

    #[test]
    fn snapshot_serializes_with_snake_case_content() {
        let controller = PopupController::new(PopupConfig::default(), FailingSurface::default());
        let json = serde_json::to_value(controller.snapshot()).expect("snapshot serializes");

        assert_eq!(json["content"], "form");
        assert_eq!(json["shown"], false);
        assert_eq!(json["elements"]["container"], false);
    }

    #[test]
    fn run_task_dispatches_auto_close_as_backdrop_click() {
        let surface = FailingSurface {
            elements: PopupElements::all(),
            attempts: 0,
        };
        let mut controller = PopupController::new(PopupConfig::default(), surface);
        controller.open();

        assert!(controller.run_task(ScheduledTask::AutoClose));
        assert!(!controller.snapshot().visible);
    }
}
