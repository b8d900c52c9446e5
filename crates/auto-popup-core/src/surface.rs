use serde::Serialize;

use crate::error::Result;

/// Which of the pop-up's elements were found on the page at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PopupElements {
    pub container: bool,
    pub form: bool,
    pub success_message: bool,
}

impl PopupElements {
    #[must_use]
    pub fn all() -> Self {
        Self {
            container: true,
            form: true,
            success_message: true,
        }
    }

    /// Submit confirmation needs both halves of the swap.
    #[must_use]
    pub fn can_confirm_submit(self) -> bool {
        self.form && self.success_message
    }
}

/// Where a close-triggering click landed, classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTarget {
    /// The container itself, i.e. the full-screen backdrop.
    Backdrop,
    /// The close control or something inside it.
    CloseControl,
    /// Anywhere else, including the dialog body.
    Elsewhere,
}

impl CloseTarget {
    #[must_use]
    pub fn dismisses(self) -> bool {
        matches!(self, Self::Backdrop | Self::CloseControl)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::CloseControl => "close_control",
            Self::Elsewhere => "elsewhere",
        }
    }
}

/// Page-side mutations the controller drives. Implementations only touch elements that
/// [`PopupSurface::elements`] reports as present.
pub trait PopupSurface {
    fn elements(&self) -> PopupElements;

    fn reveal_container(&mut self) -> Result<()>;
    fn conceal_container(&mut self) -> Result<()>;

    fn suppress_page_scroll(&mut self) -> Result<()>;
    fn restore_page_scroll(&mut self) -> Result<()>;

    fn conceal_form(&mut self) -> Result<()>;
    fn reveal_success_message(&mut self) -> Result<()>;
}
