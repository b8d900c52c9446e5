//! Host-independent core of the auto pop-up overlay.
//!
//! The browser module owns the DOM and the event loop; everything that decides *what* happens
//! lives here so it can be exercised without a browser.

pub mod config;
pub mod controller;
pub mod error;
pub mod scheduler;
pub mod surface;

pub use config::{
    DEFAULT_AUTO_CLOSE_DELAY_MS, DEFAULT_CLOSE_CONTROL_SELECTOR, DEFAULT_CONTAINER_ID,
    DEFAULT_FORM_ID, DEFAULT_HIDDEN_CLASS, DEFAULT_OPEN_DELAY_MS, DEFAULT_SUCCESS_MESSAGE_ID,
    MAX_TIMER_DELAY_MS, PopupConfig,
};
pub use controller::{FormSubmission, PopupContent, PopupController, PopupSnapshot};
pub use error::{PopupError, Result};
pub use scheduler::{PopupScheduler, ScheduledTask};
pub use surface::{CloseTarget, PopupElements, PopupSurface};
