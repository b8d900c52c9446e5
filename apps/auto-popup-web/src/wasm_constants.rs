pub(crate) const PAGE_CONFIG_GLOBAL: &str = "__AUTO_POPUP_CONFIG__";
pub(crate) const DOM_CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";
pub(crate) const CLICK_EVENT: &str = "click";
pub(crate) const SUBMIT_EVENT: &str = "submit";
pub(crate) const BODY_OVERFLOW_PROPERTY: &str = "overflow";
pub(crate) const BODY_OVERFLOW_LOCKED: &str = "hidden";
pub(crate) const FORM_DISPLAY_PROPERTY: &str = "display";
pub(crate) const FORM_DISPLAY_CONCEALED: &str = "none";
