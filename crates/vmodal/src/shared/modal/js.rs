//! JavaScript binding: `new VModal({...})` with the same operations as [`VModal`].

use contracts::modal::{ButtonOptions, ModalCallback, ModalOptions};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::{ModalError, VModal};

#[wasm_bindgen(js_name = VModal)]
pub struct JsModal {
    modal: VModal,
}

#[wasm_bindgen(js_class = VModal)]
impl JsModal {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsModal, JsValue> {
        let mut parsed: ModalOptions = if options.is_undefined() || options.is_null() {
            ModalOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options.clone())
                .map_err(|err| ModalError::InvalidOptions(err.to_string()))?
        };

        parsed.on_open = callback_field(&options, "onOpen");
        parsed.on_close = callback_field(&options, "onClose");
        if let Some(footer) = parsed.footer.as_mut() {
            let buttons = get_field(&options, "footer")
                .map(|footer| get_field(&footer, "buttons").unwrap_or(JsValue::UNDEFINED))
                .unwrap_or(JsValue::UNDEFINED);
            attach_handlers(&mut footer.buttons, &buttons);
        }

        let modal = VModal::new(parsed)?;
        Ok(JsModal { modal })
    }

    pub fn open(&self) {
        self.modal.open();
    }

    pub fn close(&self) {
        self.modal.close();
    }

    pub fn destroy(&self) {
        self.modal.destroy();
    }

    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&self, html: &str) {
        self.modal.set_content(html);
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&self, html: &str) {
        self.modal.set_title(html);
    }

    #[wasm_bindgen(js_name = setButtons)]
    pub fn set_buttons(&self, buttons: JsValue) -> Result<(), JsValue> {
        let mut parsed: Vec<ButtonOptions> = serde_wasm_bindgen::from_value(buttons.clone())
            .map_err(|err| ModalError::InvalidOptions(err.to_string()))?;
        attach_handlers(&mut parsed, &buttons);
        self.modal.set_buttons(parsed);
        Ok(())
    }

    #[wasm_bindgen(js_name = removeFooter)]
    pub fn remove_footer(&self) {
        self.modal.remove_footer();
    }

    #[wasm_bindgen(js_name = setTransition)]
    pub fn set_transition(&self, transition: &str) {
        self.modal.set_transition(transition);
    }

    #[wasm_bindgen(js_name = setModalCentered)]
    pub fn set_modal_centered(&self, centered: bool) {
        self.modal.set_modal_centered(centered);
    }

    #[wasm_bindgen(js_name = getModalNode)]
    pub fn modal_node(&self) -> Element {
        self.modal.modal_node().clone()
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.modal.state().as_str().to_string()
    }
}

fn get_field(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn callback_field(target: &JsValue, key: &str) -> Option<ModalCallback> {
    let function = get_field(target, key)?.dyn_into::<Function>().ok()?;
    Some(ModalCallback::new(move || {
        if let Err(err) = function.call0(&JsValue::NULL) {
            log::error!("vmodal: callback threw: {:?}", err);
        }
    }))
}

/// Copies `handler` functions from the JS button list onto the parsed buttons.
fn attach_handlers(buttons: &mut [ButtonOptions], source: &JsValue) {
    if !Array::is_array(source) {
        return;
    }
    let source = Array::from(source);
    for (index, button) in buttons.iter_mut().enumerate() {
        button.handler = callback_field(&source.get(index as u32), "handler");
    }
}
