pub mod app;
pub mod shared;

pub use shared::modal::{ModalError, VModal};
pub use shared::scroll_lock::{page_scroll_lock, ScrollLock};

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the element the demo page mounts into.
pub const DEMO_MOUNT_ID: &str = "vmodal-demo";

/// Mounts the demo page into `mount`.
pub fn hydrate(mount: HtmlElement) {
    leptos::mount::mount_to(mount, app::App).forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Pages that only use the `VModal` JS class carry no mount point.
    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DEMO_MOUNT_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(mount) = mount {
        hydrate(mount);
    }
}
