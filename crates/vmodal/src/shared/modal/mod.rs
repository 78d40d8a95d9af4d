//! Modal dialog attached to the page body.
//!
//! [`VModal`] is the control surface for Rust callers; [`js::JsModal`] exposes
//! the same operations to plain JavaScript and [`hook::use_modal`] ties a modal
//! to a Leptos component's lifetime.

mod error;
pub mod hook;
pub mod js;
pub mod lifecycle;
pub mod surface;
pub mod timer;

pub use error::ModalError;
pub use lifecycle::{CloseTrigger, ModalLifecycle, WeakModal};
pub use surface::{DomSurface, ModalSurface};
pub use timer::{GlooScheduler, PendingTask, Scheduler};

use contracts::modal::{ButtonOptions, ModalOptions, ModalState};
use std::rc::Rc;
use web_sys::Element;

use crate::shared::scroll_lock::page_scroll_lock;

/// A modal rendered into `document.body`.
///
/// Cloning yields another handle to the same modal.
#[derive(Clone)]
pub struct VModal {
    lifecycle: ModalLifecycle,
    node: Element,
}

impl VModal {
    /// Renders the modal (initially closed) and appends it to the page.
    pub fn new(options: ModalOptions) -> Result<Self, ModalError> {
        let options = options.normalized();
        let surface = DomSurface::mount(&options)?;
        let node = surface.root().clone();
        let scroll_lock = if options.lock_scroll {
            page_scroll_lock()
        } else {
            None
        };

        let lifecycle =
            ModalLifecycle::new(options, Box::new(surface), Rc::new(GlooScheduler), scroll_lock);
        Ok(Self { lifecycle, node })
    }

    /// Handle for callbacks stored in the modal itself, such as footer
    /// button handlers; it does not keep the modal alive.
    pub fn downgrade(&self) -> WeakModal {
        self.lifecycle.downgrade()
    }

    pub fn open(&self) {
        self.lifecycle.open();
    }

    pub fn close(&self) {
        self.lifecycle.close();
    }

    pub fn destroy(&self) {
        self.lifecycle.destroy();
    }

    pub fn set_content(&self, markup: &str) {
        self.lifecycle.set_content(markup);
    }

    pub fn set_title(&self, markup: &str) {
        self.lifecycle.set_title(markup);
    }

    pub fn set_buttons(&self, buttons: Vec<ButtonOptions>) {
        self.lifecycle.set_buttons(buttons);
    }

    pub fn remove_footer(&self) {
        self.lifecycle.remove_footer();
    }

    pub fn set_transition(&self, kind: &str) {
        self.lifecycle.set_transition(kind);
    }

    pub fn set_modal_centered(&self, centered: bool) {
        self.lifecycle.set_modal_centered(centered);
    }

    /// Root element of the modal, for DOM interop. Detached after `destroy`.
    pub fn modal_node(&self) -> &Element {
        &self.node
    }

    pub fn state(&self) -> ModalState {
        self.lifecycle.state()
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle.is_open()
    }
}
