use auto_popup_core::CloseTarget;

/// Outcome of `Element::closest` against the close control selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorMatch {
    Matched,
    Unmatched,
    InvalidSelector,
}

/// Decides what a click inside the container means for dismissal. `closest` is only
/// consulted when the click did not land on the container itself.
pub(crate) fn classify_click_target(
    on_container: bool,
    closest: impl FnOnce() -> SelectorMatch,
) -> CloseTarget {
    if on_container {
        return CloseTarget::Backdrop;
    }
    match closest() {
        SelectorMatch::Matched => CloseTarget::CloseControl,
        SelectorMatch::Unmatched => CloseTarget::Elsewhere,
        SelectorMatch::InvalidSelector => {
            tracing::warn!("close control selector is not valid CSS");
            CloseTarget::Elsewhere
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn backdrop_click_skips_selector_lookup() {
        let looked_up = Cell::new(false);
        let target = classify_click_target(true, || {
            looked_up.set(true);
            SelectorMatch::InvalidSelector
        });
        assert_eq!(target, CloseTarget::Backdrop);
        assert!(!looked_up.get());
    }

    #[test]
    fn click_on_icon_inside_close_button_dismisses() {
        // A `<span>` inside the button is not the container, but `closest` finds the button.
        let target = classify_click_target(false, || SelectorMatch::Matched);
        assert_eq!(target, CloseTarget::CloseControl);
        assert!(target.dismisses());
    }

    #[test]
    fn click_in_dialog_body_is_ignored() {
        let target = classify_click_target(false, || SelectorMatch::Unmatched);
        assert_eq!(target, CloseTarget::Elsewhere);
        assert!(!target.dismisses());
    }

    #[test]
    fn invalid_selector_never_dismisses() {
        let target = classify_click_target(false, || SelectorMatch::InvalidSelector);
        assert_eq!(target, CloseTarget::Elsewhere);
    }
}
