use super::*;

use super::dom::{classify_click, read_submission};

pub(super) fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Boots immediately when the document is already parsed, otherwise on `DOMContentLoaded`.
pub(super) fn boot_when_dom_ready() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;

    if document.ready_state() != "loading" {
        boot();
        return Ok(());
    }

    DOM_READY_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            boot();
        }));
        let registered = document.add_event_listener_with_callback(
            DOM_CONTENT_LOADED_EVENT,
            callback.as_ref().unchecked_ref(),
        );
        if !listener_registered(DOM_CONTENT_LOADED_EVENT, registered) {
            return;
        }
        *slot.borrow_mut() = Some(callback);
    });
    Ok(())
}

fn boot() {
    let already_booted = CONTROLLER.with(|slot| slot.borrow().is_some());
    if already_booted {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        tracing::warn!("document is unavailable; auto popup disabled");
        return;
    };

    let config = page_config();
    let surface = WebPopupSurface::resolve(&document, &config);
    install_container_click_handler(&surface, &config.close_control_selector);
    install_form_submit_handler(&surface);

    let mut controller = PopupController::new(config, surface);
    controller.start(&mut BrowserScheduler);
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}

/// Reads `window.__AUTO_POPUP_CONFIG__`, falling back to defaults when it is absent or bad.
fn page_config() -> PopupConfig {
    let Some(window) = web_sys::window() else {
        return PopupConfig::default();
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(PAGE_CONFIG_GLOBAL)) else {
        return PopupConfig::default();
    };
    if value.is_undefined() || value.is_null() {
        return PopupConfig::default();
    }

    let raw = match js_sys::JSON::stringify(&value) {
        Ok(raw) => String::from(raw),
        Err(_) => {
            tracing::warn!(global = PAGE_CONFIG_GLOBAL, "page config is not serializable");
            return PopupConfig::default();
        }
    };
    match PopupConfig::from_json(&raw) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(global = PAGE_CONFIG_GLOBAL, error = %error, "ignoring page config");
            PopupConfig::default()
        }
    }
}

fn install_container_click_handler(surface: &WebPopupSurface, close_control_selector: &str) {
    let Some(container) = surface.container().cloned() else {
        return;
    };
    let selector = close_control_selector.to_string();

    CONTAINER_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let target_container = container.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                let target = classify_click(&event, &target_container, &selector);
                with_controller(|controller| {
                    controller.close(target);
                });
            },
        ));
        let registered = container
            .add_event_listener_with_callback(CLICK_EVENT, callback.as_ref().unchecked_ref());
        if !listener_registered(CLICK_EVENT, registered) {
            return;
        }
        *slot.borrow_mut() = Some(callback);
    });
}

fn install_form_submit_handler(surface: &WebPopupSurface) {
    let Some(form) = surface.form().cloned() else {
        return;
    };

    FORM_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                event.prevent_default();
                let submission = read_submission(&event);
                with_controller(|controller| {
                    controller.handle_submit(&submission, &mut BrowserScheduler);
                });
            },
        ));
        let registered =
            form.add_event_listener_with_callback(SUBMIT_EVENT, callback.as_ref().unchecked_ref());
        if !listener_registered(SUBMIT_EVENT, registered) {
            return;
        }
        *slot.borrow_mut() = Some(callback);
    });
}

fn listener_registered(event: &'static str, result: Result<(), JsValue>) -> bool {
    if result.is_err() {
        tracing::warn!(event, "failed to register auto popup listener");
        return false;
    }
    true
}
