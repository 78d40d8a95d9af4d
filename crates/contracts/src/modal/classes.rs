//! Class names and data attributes shared between the lifecycle and the renderer.

pub const ROOT: &str = "vmodal";
pub const OVERLAY: &str = "vmodal__overlay";
pub const CONTAINER: &str = "vmodal__container";
pub const HEADER: &str = "vmodal__header";
pub const TITLE: &str = "vmodal__title";
pub const CLOSE: &str = "vmodal__close";
pub const CLOSE_TEXT: &str = "vmodal__close--text";
pub const BODY: &str = "vmodal__body";
pub const FOOTER: &str = "vmodal__footer";
pub const CENTERED: &str = "vmodal--centered";

pub const OPEN: &str = "open";
pub const HIDE: &str = "hide";

pub const DATA_CLOSE: &str = "data-close";
pub const DATA_CONTAINER: &str = "data-container";
pub const DATA_TITLE: &str = "data-title";
pub const DATA_BODY: &str = "data-body";
pub const DATA_FOOTER: &str = "data-footer";

/// `open-<type>`, applied to the root next to `open`.
pub fn open_variant(kind: &str) -> String {
    format!("{OPEN}-{kind}")
}

/// `hide-<type>`, applied to the root next to `hide`.
pub fn hide_variant(kind: &str) -> String {
    format!("{HIDE}-{kind}")
}

/// `vmodal__container--<type>`, applied to the container.
pub fn container_variant(kind: &str) -> String {
    format!("{CONTAINER}--{kind}")
}

/// Selector matching the element carrying the given data attribute.
pub fn selector(data_attr: &str) -> String {
    format!("[{data_attr}]")
}

/// Splits a whitespace separated class list, skipping empty entries.
pub fn split_classes(list: &str) -> impl Iterator<Item = &str> {
    list.split_whitespace()
}
