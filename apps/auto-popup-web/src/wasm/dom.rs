use super::*;

use auto_popup_core::{CloseTarget, FormSubmission, PopupElements, PopupError, PopupSurface};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Node};

use crate::click_target::{SelectorMatch, classify_click_target};
use crate::form_fields::summarize_field_names;

/// The pop-up's elements as found on the page at boot. Absent elements stay `None` for the
/// page view.
pub(super) struct WebPopupSurface {
    body: Option<HtmlElement>,
    container: Option<HtmlElement>,
    form: Option<HtmlElement>,
    success_message: Option<Element>,
    hidden_class: String,
}

impl WebPopupSurface {
    pub(super) fn resolve(document: &Document, config: &PopupConfig) -> Self {
        let container = document
            .get_element_by_id(&config.container_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let form = document
            .get_element_by_id(&config.form_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let success_message = document.get_element_by_id(&config.success_message_id);
        Self {
            body: document.body(),
            container,
            form,
            success_message,
            hidden_class: config.hidden_class.clone(),
        }
    }

    pub(super) fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    pub(super) fn form(&self) -> Option<&HtmlElement> {
        self.form.as_ref()
    }

    fn set_hidden(&self, element: Option<&Element>, hidden: bool) -> Result<(), PopupError> {
        let Some(element) = element else {
            return Ok(());
        };
        let classes = element.class_list();
        let result = if hidden {
            classes.add_1(&self.hidden_class)
        } else {
            classes.remove_1(&self.hidden_class)
        };
        result.map_err(|_| PopupError::dom(format!("failed to toggle `{}` class", self.hidden_class)))
    }

    fn body_style(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.body.as_ref().map(HtmlElement::style)
    }
}

impl PopupSurface for WebPopupSurface {
    fn elements(&self) -> PopupElements {
        PopupElements {
            container: self.container.is_some(),
            form: self.form.is_some(),
            success_message: self.success_message.is_some(),
        }
    }

    fn reveal_container(&mut self) -> Result<(), PopupError> {
        self.set_hidden(self.container.as_deref(), false)
    }

    fn conceal_container(&mut self) -> Result<(), PopupError> {
        self.set_hidden(self.container.as_deref(), true)
    }

    fn suppress_page_scroll(&mut self) -> Result<(), PopupError> {
        let Some(style) = self.body_style() else {
            return Err(PopupError::dom("document body is unavailable"));
        };
        style
            .set_property(BODY_OVERFLOW_PROPERTY, BODY_OVERFLOW_LOCKED)
            .map_err(|_| PopupError::dom("failed to lock body scroll"))
    }

    fn restore_page_scroll(&mut self) -> Result<(), PopupError> {
        let Some(style) = self.body_style() else {
            return Err(PopupError::dom("document body is unavailable"));
        };
        style
            .remove_property(BODY_OVERFLOW_PROPERTY)
            .map(|_| ())
            .map_err(|_| PopupError::dom("failed to restore body scroll"))
    }

    fn conceal_form(&mut self) -> Result<(), PopupError> {
        let Some(form) = self.form.as_ref() else {
            return Ok(());
        };
        form.style()
            .set_property(FORM_DISPLAY_PROPERTY, FORM_DISPLAY_CONCEALED)
            .map_err(|_| PopupError::dom("failed to hide form"))
    }

    fn reveal_success_message(&mut self) -> Result<(), PopupError> {
        self.set_hidden(self.success_message.as_ref(), false)
    }
}

/// Maps a click inside the container to what it means for dismissal.
pub(super) fn classify_click(
    event: &web_sys::Event,
    container: &HtmlElement,
    close_control_selector: &str,
) -> CloseTarget {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return CloseTarget::Elsewhere;
    };

    let container_node: &Node = container;
    classify_click_target(target.is_same_node(Some(container_node)), || {
        match target.closest(close_control_selector) {
            Ok(Some(_)) => SelectorMatch::Matched,
            Ok(None) => SelectorMatch::Unmatched,
            Err(_) => SelectorMatch::InvalidSelector,
        }
    })
}

/// Collects the submitted form's field names for logging.
pub(super) fn read_submission(event: &web_sys::Event) -> FormSubmission {
    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return FormSubmission::default();
    };
    let Ok(form_data) = web_sys::FormData::new_with_form(&form) else {
        return FormSubmission::default();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&form_data) else {
        return FormSubmission::default();
    };

    let raw_names = entries.filter_map(|entry| {
        let entry = entry.ok()?;
        js_sys::Array::from(&entry).get(0).as_string()
    });
    FormSubmission {
        field_names: summarize_field_names(raw_names),
    }
}
