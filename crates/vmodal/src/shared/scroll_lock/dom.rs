use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use super::{PageLayout, ScrollLock, SharedScrollLock};

thread_local! {
    // One lock per page; every modal that opts into scroll locking shares it.
    static PAGE_SCROLL_LOCK: RefCell<Option<SharedScrollLock>> = const { RefCell::new(None) };
}

/// Returns the page-wide scroll lock, creating it on first use.
///
/// `None` when there is no document body to act on.
pub fn page_scroll_lock() -> Option<SharedScrollLock> {
    PAGE_SCROLL_LOCK.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let layout = BodyLayout::from_window()?;
            *slot = Some(ScrollLock::shared(Box::new(layout)));
        }
        slot.clone()
    })
}

/// [`PageLayout`] over `document.body`.
pub struct BodyLayout {
    document: Document,
    body: HtmlElement,
}

impl BodyLayout {
    pub fn from_window() -> Option<Self> {
        let document = window()?.document()?;
        let body = document.body()?;
        Some(Self { document, body })
    }
}

impl PageLayout for BodyLayout {
    fn page_overflows(&self) -> bool {
        let inner_width = window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64());
        let client_width = self
            .document
            .document_element()
            .map(|el| el.client_width() as f64);

        match (client_width, inner_width) {
            (Some(client), Some(inner)) => client < inner,
            _ => false,
        }
    }

    fn padding_right(&self) -> String {
        self.body
            .style()
            .get_property_value("padding-right")
            .unwrap_or_default()
    }

    fn computed_padding_right(&self) -> String {
        window()
            .and_then(|w| w.get_computed_style(&self.body).ok().flatten())
            .and_then(|style| style.get_property_value("padding-right").ok())
            .unwrap_or_default()
    }

    fn set_padding_right(&mut self, value: &str) {
        set_inline(&self.body, "padding-right", value);
    }

    fn overflow_y(&self) -> String {
        self.body
            .style()
            .get_property_value("overflow-y")
            .unwrap_or_default()
    }

    fn set_overflow_y(&mut self, value: &str) {
        set_inline(&self.body, "overflow-y", value);
    }

    fn measure_scrollbar_width(&self) -> f64 {
        let probe = match self
            .document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(el) => el,
            None => {
                log::warn!("scroll lock: could not create scrollbar probe");
                return 0.0;
            }
        };

        let _ = probe.set_attribute(
            "style",
            "position:absolute;top:-9999px;width:100px;height:100px;overflow-y:scroll;",
        );
        if self.body.append_child(&probe).is_err() {
            return 0.0;
        }

        let width = (probe.offset_width() - probe.client_width()).max(0) as f64;
        probe.remove();
        width
    }
}

/// Writes an inline style property; an empty value removes it.
fn set_inline(el: &HtmlElement, property: &str, value: &str) {
    let style = el.style();
    if value.is_empty() {
        let _ = style.remove_property(property);
    } else {
        let _ = style.set_property(property, value);
    }
}
