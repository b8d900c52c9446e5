use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PopupError, Result};

pub const DEFAULT_OPEN_DELAY_MS: u64 = 1_500;
pub const DEFAULT_AUTO_CLOSE_DELAY_MS: u64 = 3_000;
pub const DEFAULT_CONTAINER_ID: &str = "auto-popup-modal";
pub const DEFAULT_FORM_ID: &str = "auto-popup-form";
pub const DEFAULT_SUCCESS_MESSAGE_ID: &str = "auto-popup-success-message";
pub const DEFAULT_CLOSE_CONTROL_SELECTOR: &str = "button.text-gray-500";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";
/// Longest delay a browser timer honors; anything above fires immediately.
pub const MAX_TIMER_DELAY_MS: u64 = 2_147_483_647;

/// Page-level settings for the pop-up. Every field falls back to its default when missing,
/// so a page only has to spell out what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopupConfig {
    pub open_delay_ms: u64,
    pub auto_close_delay_ms: u64,
    pub container_id: String,
    pub form_id: String,
    pub success_message_id: String,
    pub close_control_selector: String,
    pub hidden_class: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: DEFAULT_OPEN_DELAY_MS,
            auto_close_delay_ms: DEFAULT_AUTO_CLOSE_DELAY_MS,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            form_id: DEFAULT_FORM_ID.to_string(),
            success_message_id: DEFAULT_SUCCESS_MESSAGE_ID.to_string(),
            close_control_selector: DEFAULT_CLOSE_CONTROL_SELECTOR.to_string(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_string(),
        }
    }
}

impl PopupConfig {
    /// Decodes and validates a JSON config object.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("containerId", &self.container_id),
            ("formId", &self.form_id),
            ("successMessageId", &self.success_message_id),
            ("closeControlSelector", &self.close_control_selector),
            ("hiddenClass", &self.hidden_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PopupError::InvalidConfig {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        let delays = [
            ("openDelayMs", self.open_delay_ms),
            ("autoCloseDelayMs", self.auto_close_delay_ms),
        ];
        for (field, value) in delays {
            if value > MAX_TIMER_DELAY_MS {
                return Err(PopupError::InvalidConfig {
                    field,
                    reason: "exceeds the 2147483647 ms browser timer limit",
                });
            }
        }
        if self.hidden_class.contains(char::is_whitespace) {
            return Err(PopupError::InvalidConfig {
                field: "hiddenClass",
                reason: "must be a single class name",
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }

    #[must_use]
    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_delay_ms)
    }
}
