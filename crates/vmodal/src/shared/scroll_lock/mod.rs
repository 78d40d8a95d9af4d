//! Page scroll lock used while a modal is shown.
//!
//! The lock is shared by every modal on the page and reference counted: the
//! first holder captures the body's right padding, the last release restores it.

mod dom;

pub use dom::{page_scroll_lock, BodyLayout};

use std::cell::RefCell;
use std::rc::Rc;

pub type SharedScrollLock = Rc<RefCell<ScrollLock>>;

/// Page-level layout properties the lock reads and writes.
pub trait PageLayout {
    /// The page content is wider than the viewport's client area, i.e. a
    /// vertical scrollbar is taking up room.
    fn page_overflows(&self) -> bool;
    /// Inline `padding-right` of the body, empty when unset.
    fn padding_right(&self) -> String;
    /// Resolved `padding-right`, stylesheets included.
    fn computed_padding_right(&self) -> String;
    fn set_padding_right(&mut self, value: &str);
    /// Inline `overflow-y` of the body, empty when unset.
    fn overflow_y(&self) -> String;
    fn set_overflow_y(&mut self, value: &str);
    /// Width of a platform scrollbar in CSS pixels.
    fn measure_scrollbar_width(&self) -> f64;
}

/// Inline body styles captured by the first holder.
struct SavedStyle {
    padding_right: String,
    overflow_y: String,
}

pub struct ScrollLock {
    layout: Box<dyn PageLayout>,
    holders: usize,
    saved: Option<SavedStyle>,
    scrollbar_width: Option<f64>,
}

impl ScrollLock {
    pub fn new(layout: Box<dyn PageLayout>) -> Self {
        Self {
            layout,
            holders: 0,
            saved: None,
            scrollbar_width: None,
        }
    }

    pub fn shared(layout: Box<dyn PageLayout>) -> SharedScrollLock {
        Rc::new(RefCell::new(Self::new(layout)))
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }

    /// Measured once, then cached for the lifetime of the lock.
    pub fn scrollbar_width(&mut self) -> f64 {
        match self.scrollbar_width {
            Some(width) => width,
            None => {
                let width = self.layout.measure_scrollbar_width();
                log::debug!("scroll lock: scrollbar width {}px", width);
                self.scrollbar_width = Some(width);
                width
            }
        }
    }

    pub fn lock(&mut self) {
        self.holders += 1;
        if self.holders > 1 {
            return;
        }

        let saved = SavedStyle {
            padding_right: self.layout.padding_right(),
            overflow_y: self.layout.overflow_y(),
        };
        if self.layout.page_overflows() {
            let width = self.scrollbar_width();
            let base = self.layout.computed_padding_right();
            self.layout.set_padding_right(&padded_value(&base, width));
            self.layout.set_overflow_y("hidden");
        }
        self.saved = Some(saved);
    }

    pub fn unlock(&mut self) {
        if self.holders == 0 {
            log::debug!("scroll lock: unlock without a matching lock ignored");
            return;
        }

        self.holders -= 1;
        if self.holders > 0 {
            return;
        }

        if let Some(saved) = self.saved.take() {
            self.layout.set_padding_right(&saved.padding_right);
            self.layout.set_overflow_y(&saved.overflow_y);
        }
    }
}

/// Right padding that compensates for a hidden scrollbar of `width` pixels.
///
/// Pixel and empty values are summed, anything else falls back to `calc()`.
pub fn padded_value(saved: &str, width: f64) -> String {
    let saved = saved.trim();
    if saved.is_empty() {
        return format_px(width);
    }

    match saved.strip_suffix("px").map(|n| n.trim().parse::<f64>()) {
        Some(Ok(current)) => format_px(current + width),
        _ => match saved.parse::<f64>() {
            Ok(zero) if zero == 0.0 => format_px(width),
            _ => format!("calc({} + {})", saved, format_px(width)),
        },
    }
}

fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::FakePage;

    #[test]
    fn test_padded_value() {
        assert_eq!(padded_value("", 17.0), "17px");
        assert_eq!(padded_value("10px", 17.0), "27px");
        assert_eq!(padded_value("0", 15.0), "15px");
        assert_eq!(padded_value("2.5px", 15.0), "17.5px");
        assert_eq!(padded_value("1em", 15.0), "calc(1em + 15px)");
    }

    #[test]
    fn test_lock_pads_overflowing_page() {
        let page = FakePage::overflowing("10px", 17.0);
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        lock.lock();
        assert_eq!(page.padding(), "27px");
        assert!(page.scroll_suppressed());

        lock.unlock();
        assert_eq!(page.padding(), "10px");
        assert!(!page.scroll_suppressed());
    }

    #[test]
    fn test_lock_pads_on_top_of_stylesheet_padding() {
        let page = FakePage::overflowing("", 17.0).with_stylesheet_padding("20px");
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        lock.lock();
        assert_eq!(page.padding(), "37px");
        assert_eq!(page.effective_padding(), "37px");

        lock.unlock();
        assert_eq!(page.padding(), "");
        assert_eq!(page.effective_padding(), "20px");
    }

    #[test]
    fn test_unlock_restores_inline_overflow() {
        let page = FakePage::overflowing("", 15.0).with_overflow_y("scroll");
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        lock.lock();
        assert_eq!(page.overflow(), "hidden");

        lock.unlock();
        assert_eq!(page.overflow(), "scroll");
    }

    #[test]
    fn test_lock_leaves_non_overflowing_page_alone() {
        let page = FakePage::fitting("4px");
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        lock.lock();
        assert_eq!(page.padding(), "4px");
        assert!(!page.scroll_suppressed());
        assert_eq!(page.measurements(), 0);

        lock.unlock();
        assert_eq!(page.padding(), "4px");
    }

    #[test]
    fn test_second_lock_does_not_recapture_padding() {
        let page = FakePage::overflowing("", 15.0);
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        lock.lock();
        lock.lock();
        assert_eq!(page.padding(), "15px");
        assert_eq!(lock.holders(), 2);

        lock.unlock();
        assert!(lock.is_locked());
        assert_eq!(page.padding(), "15px");

        lock.unlock();
        assert!(!lock.is_locked());
        assert_eq!(page.padding(), "");
    }

    #[test]
    fn test_unbalanced_unlock_is_ignored() {
        let page = FakePage::overflowing("8px", 15.0);
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        lock.unlock();
        assert_eq!(page.padding(), "8px");
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn test_scrollbar_width_measured_once() {
        let page = FakePage::overflowing("", 17.0);
        let mut lock = ScrollLock::new(Box::new(page.clone()));

        for _ in 0..3 {
            lock.lock();
            lock.unlock();
        }

        assert_eq!(page.measurements(), 1);
        assert_eq!(lock.scrollbar_width(), 17.0);
    }
}
