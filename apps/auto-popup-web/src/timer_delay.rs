use std::time::Duration;

use auto_popup_core::MAX_TIMER_DELAY_MS;

/// Milliseconds to hand to `setTimeout`, saturated at the largest delay browsers honor.
pub(crate) fn timeout_millis(delay: Duration) -> u32 {
    let millis = delay.as_millis().min(u128::from(MAX_TIMER_DELAY_MS));
    u32::try_from(millis).unwrap_or(0)
}
