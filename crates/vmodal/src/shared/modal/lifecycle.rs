//! Open/close/destroy state machine of a single modal.
//!
//! The lifecycle never touches the DOM directly: visual changes go through a
//! [`ModalSurface`], delays through a [`Scheduler`]. At most one timer is
//! pending at any time (open settling or close completion); replacing or
//! dropping it cancels the previous one.

use contracts::modal::classes::{self, hide_variant, open_variant};
use contracts::modal::{ButtonOptions, FooterOptions, ModalOptions, ModalState, TransitionOptions};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::surface::ModalSurface;
use super::timer::{PendingTask, Scheduler};
use crate::shared::scroll_lock::SharedScrollLock;

struct Inner {
    state: ModalState,
    options: ModalOptions,
    surface: Box<dyn ModalSurface>,
    scheduler: Rc<dyn Scheduler>,
    scroll_lock: Option<SharedScrollLock>,
    holds_lock: bool,
    /// Transition type whose `open-*`/`hide-*` classes are on the root.
    applied_kind: String,
    pending: Option<PendingTask>,
}

impl Inner {
    fn acquire_scroll_lock(&mut self) {
        if !self.options.lock_scroll || self.holds_lock {
            return;
        }
        if let Some(lock) = &self.scroll_lock {
            lock.borrow_mut().lock();
            self.holds_lock = true;
        }
    }

    fn release_scroll_lock(&mut self) {
        if !self.holds_lock {
            return;
        }
        if let Some(lock) = &self.scroll_lock {
            lock.borrow_mut().unlock();
        }
        self.holds_lock = false;
    }

    fn show(&mut self) {
        let kind = self.options.transition.kind.clone();
        self.surface.add_class(classes::OPEN);
        if !kind.is_empty() {
            self.surface.add_class(&open_variant(&kind));
        }
        self.applied_kind = kind;
        self.acquire_scroll_lock();
    }

    fn hide(&mut self) {
        self.surface.remove_class(classes::OPEN);
        self.surface.add_class(classes::HIDE);
        if !self.applied_kind.is_empty() {
            let kind = self.applied_kind.clone();
            self.surface.remove_class(&open_variant(&kind));
            self.surface.add_class(&hide_variant(&kind));
        }
    }

    fn clear_hide(&mut self) {
        self.surface.remove_class(classes::HIDE);
        if !self.applied_kind.is_empty() {
            let kind = std::mem::take(&mut self.applied_kind);
            self.surface.remove_class(&hide_variant(&kind));
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.release_scroll_lock();
    }
}

/// Handle to a modal's lifecycle. Clones share the same instance.
#[derive(Clone)]
pub struct ModalLifecycle {
    inner: Rc<RefCell<Inner>>,
}

/// Invokes `close()` on behalf of a close control, if closing by control is enabled.
///
/// Holds a weak reference; firing after the modal is gone does nothing.
#[derive(Clone)]
pub struct CloseTrigger {
    inner: Weak<RefCell<Inner>>,
}

impl CloseTrigger {
    pub fn fire(&self) {
        if let Some(inner) = self.inner.upgrade() {
            ModalLifecycle { inner }.trigger_close();
        }
    }
}

/// Non-owning handle to a modal.
///
/// Callbacks stored inside the modal itself (footer button handlers) should
/// capture this instead of a [`ModalLifecycle`], otherwise the modal keeps
/// itself alive and never releases the page scroll lock.
#[derive(Clone)]
pub struct WeakModal {
    inner: Weak<RefCell<Inner>>,
}

impl WeakModal {
    pub fn upgrade(&self) -> Option<ModalLifecycle> {
        self.inner.upgrade().map(|inner| ModalLifecycle { inner })
    }

    pub fn open(&self) {
        if let Some(modal) = self.upgrade() {
            modal.open();
        }
    }

    pub fn close(&self) {
        if let Some(modal) = self.upgrade() {
            modal.close();
        }
    }

    pub fn destroy(&self) {
        if let Some(modal) = self.upgrade() {
            modal.destroy();
        }
    }
}

impl ModalLifecycle {
    /// Wraps an already rendered surface. The close trigger is bound here when
    /// the configuration allows closing by control.
    pub fn new(
        options: ModalOptions,
        surface: Box<dyn ModalSurface>,
        scheduler: Rc<dyn Scheduler>,
        scroll_lock: Option<SharedScrollLock>,
    ) -> Self {
        let options = options.normalized();
        let close_enabled = options.close.is_enabled();

        let lifecycle = Self {
            inner: Rc::new(RefCell::new(Inner {
                state: ModalState::Closed,
                options,
                surface,
                scheduler,
                scroll_lock,
                holds_lock: false,
                applied_kind: String::new(),
                pending: None,
            })),
        };

        if close_enabled {
            let trigger = CloseTrigger {
                inner: Rc::downgrade(&lifecycle.inner),
            };
            lifecycle.inner.borrow_mut().surface.bind_close_trigger(trigger);
        }

        lifecycle
    }

    pub fn downgrade(&self) -> WeakModal {
        WeakModal {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn state(&self) -> ModalState {
        self.inner.borrow().state
    }

    pub fn is_open(&self) -> bool {
        self.state().is_visible()
    }

    pub fn transition(&self) -> TransitionOptions {
        self.inner.borrow().options.transition.clone()
    }

    pub fn open(&self) {
        let on_open = {
            let mut inner = self.inner.borrow_mut();
            let state = inner.state;
            match state {
                ModalState::Destroyed => return,
                ModalState::Opening | ModalState::Open => {
                    log::debug!("vmodal: open ignored, already {}", state);
                    return;
                }
                ModalState::Closing => {
                    // The pending close still completes; only the callback fires.
                    log::debug!("vmodal: open requested while closing");
                }
                ModalState::Closed => {
                    inner.show();
                    let delay = inner.options.transition.duration_ms;
                    if delay == 0 {
                        inner.state = ModalState::Open;
                    } else {
                        inner.state = ModalState::Opening;
                        let weak = Rc::downgrade(&self.inner);
                        let task = inner
                            .scheduler
                            .schedule(delay, Box::new(move || finish_open(&weak)));
                        inner.pending = Some(task);
                    }
                }
            }
            inner.options.on_open.clone()
        };

        if let Some(on_open) = on_open {
            on_open.run();
        }
    }

    pub fn close(&self) {
        let mut inner = self.inner.borrow_mut();
        let state = inner.state;
        match state {
            ModalState::Destroyed | ModalState::Closed => return,
            ModalState::Opening | ModalState::Open => {
                inner.state = ModalState::Closing;
                inner.hide();
            }
            ModalState::Closing => {
                log::debug!("vmodal: close already in flight, restarting timer");
            }
        }

        if let Some(previous) = inner.pending.take() {
            previous.cancel();
        }
        let delay = inner.options.transition.duration_ms;
        let weak = Rc::downgrade(&self.inner);
        let task = inner
            .scheduler
            .schedule(delay, Box::new(move || finish_close(&weak)));
        inner.pending = Some(task);
    }

    /// Terminal. Cancels the pending timer, releases the scroll lock and
    /// removes the node. No callbacks fire.
    pub fn destroy(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_terminal() {
            return;
        }

        if let Some(pending) = inner.pending.take() {
            pending.cancel();
        }
        inner.release_scroll_lock();
        inner.surface.detach();
        inner.state = ModalState::Destroyed;
        log::debug!("vmodal: destroyed");
    }

    pub fn set_content(&self, markup: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_terminal() {
            return;
        }
        inner.surface.set_body(markup);
        inner.options.content = markup.to_string();
    }

    pub fn set_title(&self, markup: &str) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_terminal() {
            return;
        }
        inner.surface.set_title(markup);
        inner.options.title = markup.to_string();
    }

    /// Rebuilds the footer from `buttons`, keeping the footer's extra classes.
    pub fn set_buttons(&self, buttons: Vec<ButtonOptions>) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_terminal() {
            return;
        }

        let footer = inner
            .options
            .footer
            .get_or_insert_with(FooterOptions::default);
        footer.buttons = buttons;
        let footer = footer.clone();
        inner.surface.render_footer(&footer);
    }

    pub fn remove_footer(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_terminal() {
            return;
        }
        inner.surface.remove_footer();
    }

    /// Swaps the container's transition type. Ignored unless the modal is
    /// closed or closing.
    pub fn set_transition(&self, kind: &str) {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.accepts_transition_change() {
            log::debug!("vmodal: set_transition ignored while {}", inner.state);
            return;
        }

        let next = kind.trim().to_string();
        let previous = std::mem::replace(&mut inner.options.transition.kind, next.clone());
        inner.surface.swap_container_transition(&previous, &next);
    }

    pub fn set_modal_centered(&self, centered: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.is_terminal() {
            return;
        }
        inner.options.modal_centered = centered;
        inner.surface.set_centered(centered);
    }

    /// Close requested by a close control.
    pub fn trigger_close(&self) {
        if !self.inner.borrow().options.close.is_enabled() {
            return;
        }
        self.close();
    }
}

fn finish_open(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    if inner.state == ModalState::Opening {
        inner.pending = None;
        inner.state = ModalState::Open;
    }
}

fn finish_close(weak: &Weak<RefCell<Inner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let on_close = {
        let mut inner = inner.borrow_mut();
        if inner.state != ModalState::Closing {
            return;
        }
        inner.pending = None;
        inner.state = ModalState::Closed;
        inner.clear_hide();
        inner.release_scroll_lock();
        inner.options.on_close.clone()
    };

    if let Some(on_close) = on_close {
        on_close.run();
    }
}
