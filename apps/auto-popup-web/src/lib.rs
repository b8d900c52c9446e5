#[cfg(any(target_arch = "wasm32", test))]
mod click_target;
#[cfg(any(target_arch = "wasm32", test))]
mod console_level;
#[cfg(any(target_arch = "wasm32", test))]
mod form_fields;
#[cfg(any(target_arch = "wasm32", test))]
mod timer_delay;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::time::Duration;

    use auto_popup_core::{PopupConfig, PopupController, PopupScheduler, ScheduledTask};
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::console_level::verbose_requested;
    use crate::timer_delay::timeout_millis;
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod logging;

    use dom::WebPopupSurface;
    use lifecycle::*;
    use logging::install_console_logging;

    thread_local! {
        static CONTROLLER: RefCell<Option<PopupController<WebPopupSurface>>> = const { RefCell::new(None) };
        static PENDING_TIMERS: RefCell<Vec<Timeout>> = const { RefCell::new(Vec::new()) };
        static DOM_READY_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static CONTAINER_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static FORM_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    /// Arms browser timeouts that hand their task back to the page's controller.
    struct BrowserScheduler;

    impl PopupScheduler for BrowserScheduler {
        fn schedule(&mut self, task: ScheduledTask, delay: Duration) {
            let timeout = Timeout::new(timeout_millis(delay), move || {
                with_controller(|controller| {
                    controller.run_task(task);
                });
            });
            // Dropping a Timeout cancels it, so handles live for the page view. At most one
            // open timer and one auto-close timer per confirmed submit are ever pushed.
            PENDING_TIMERS.with(|timers| timers.borrow_mut().push(timeout));
        }
    }

    fn with_controller(apply: impl FnOnce(&mut PopupController<WebPopupSurface>)) {
        CONTROLLER.with(|slot| {
            let Ok(mut slot) = slot.try_borrow_mut() else {
                tracing::warn!("auto popup controller busy; dropping event");
                return;
            };
            if let Some(controller) = slot.as_mut() {
                apply(controller);
            }
        });
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        install_console_logging(verbose_requested(&current_search()));
        if let Err(error) = boot_when_dom_ready() {
            tracing::warn!(error = %error, "auto popup boot skipped");
        }
    }

    #[wasm_bindgen]
    pub fn auto_popup_state_json() -> String {
        CONTROLLER.with(|slot| match slot.try_borrow() {
            Ok(slot) => slot
                .as_ref()
                .and_then(|controller| serde_json::to_string(&controller.snapshot()).ok())
                .unwrap_or_else(|| "null".to_string()),
            Err(_) => "null".to_string(),
        })
    }

    #[wasm_bindgen]
    pub fn auto_popup_config_json() -> String {
        CONTROLLER.with(|slot| {
            let config = slot
                .try_borrow()
                .ok()
                .and_then(|slot| slot.as_ref().map(|controller| controller.config().clone()))
                .unwrap_or_else(PopupConfig::default);
            serde_json::to_string(&config).unwrap_or_else(|_| "{}".to_string())
        })
    }
}
