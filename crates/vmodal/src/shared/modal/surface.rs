use contracts::modal::classes::{self, container_variant, selector, split_classes};
use contracts::modal::{CloseBehavior, FooterOptions, ModalOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, HtmlElement};

use super::error::ModalError;
use super::lifecycle::CloseTrigger;

/// Visual collaborator of the lifecycle: owns the rendered subtree and
/// toggles its classes and regions.
pub trait ModalSurface {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_title(&mut self, markup: &str);
    fn set_body(&mut self, markup: &str);
    /// Replaces the footer region (if any) with one built from `footer`.
    fn render_footer(&mut self, footer: &FooterOptions);
    fn remove_footer(&mut self);
    fn swap_container_transition(&mut self, previous: &str, next: &str);
    fn set_centered(&mut self, centered: bool);
    /// Routes interactions with close controls to `trigger`.
    fn bind_close_trigger(&mut self, trigger: CloseTrigger);
    /// Removes the subtree from the page and drops every listener.
    fn detach(&mut self);
}

type EventClosure = Closure<dyn FnMut(Event)>;

/// Markup of the overlay, container, header and body.
///
/// The footer is built separately so its buttons can carry Rust handlers.
pub fn render_markup(options: &ModalOptions) -> String {
    let duration = options.transition.css_duration();
    let container_class = if options.transition.has_kind() {
        format!(
            "{} {}",
            classes::CONTAINER,
            container_variant(&options.transition.kind)
        )
    } else {
        classes::CONTAINER.to_string()
    };

    let close_control = match &options.close {
        CloseBehavior::Disabled => String::new(),
        CloseBehavior::DefaultControl => format!(
            r#"<div class="{} {}" {}="close">&#215;</div>"#,
            classes::CLOSE,
            classes::CLOSE_TEXT,
            classes::DATA_CLOSE
        ),
        CloseBehavior::CustomControl { markup } => markup.clone(),
    };

    format!(
        concat!(
            r#"<div class="{overlay}" {data_close}="close" style="transition-duration:{duration}"></div>"#,
            r#"<div class="{container_class}" {data_container}>"#,
            r#"<div class="{header}">"#,
            r#"<div class="{title_class}" {data_title}>{title}</div>"#,
            "{close_control}",
            "</div>",
            r#"<div class="{body_class}" {data_body}>{content}</div>"#,
            "</div>"
        ),
        overlay = classes::OVERLAY,
        data_close = classes::DATA_CLOSE,
        duration = duration,
        container_class = container_class,
        data_container = classes::DATA_CONTAINER,
        header = classes::HEADER,
        title_class = classes::TITLE,
        data_title = classes::DATA_TITLE,
        title = options.title,
        close_control = close_control,
        body_class = classes::BODY,
        data_body = classes::DATA_BODY,
        content = options.content,
    )
}

/// [`ModalSurface`] rendered into `document.body` with web-sys.
pub struct DomSurface {
    document: Document,
    root: Element,
    footer: Option<Element>,
    button_handlers: Vec<(Element, EventClosure)>,
    close_listener: Option<EventClosure>,
}

impl DomSurface {
    /// Renders the modal for `options` and appends it to the page body.
    pub fn mount(options: &ModalOptions) -> Result<Self, ModalError> {
        let document = window()
            .ok_or(ModalError::NoWindow)?
            .document()
            .ok_or(ModalError::NoDocument)?;
        let body = document.body().ok_or(ModalError::NoBody)?;

        let root = document.create_element("div")?;
        root.class_list().add_1(classes::ROOT)?;
        if options.modal_centered {
            root.class_list().add_1(classes::CENTERED)?;
        }
        root.set_inner_html(&render_markup(options));

        let mut surface = Self {
            document,
            root,
            footer: None,
            button_handlers: Vec::new(),
            close_listener: None,
        };

        if let Some(container) = surface.region(classes::DATA_CONTAINER) {
            if let Ok(container) = container.dyn_into::<HtmlElement>() {
                let style = container.style();
                if !options.width.is_empty() {
                    style.set_property("width", &options.width)?;
                }
                if !options.margin.is_empty() {
                    style.set_property("margin", &options.margin)?;
                }
                style.set_property("transition-duration", &options.transition.css_duration())?;
            }
        }

        if let Some(footer) = &options.footer {
            surface.render_footer(footer);
        }

        body.append_child(&surface.root)?;
        Ok(surface)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    fn region(&self, data_attr: &str) -> Option<Element> {
        let found = self.root.query_selector(&selector(data_attr)).ok().flatten();
        if found.is_none() {
            log::warn!("vmodal: region {} not found", data_attr);
        }
        found
    }

    fn build_footer(&mut self, footer: &FooterOptions) -> Result<Element, ModalError> {
        let wrap = self.document.create_element("div")?;
        wrap.set_attribute(classes::DATA_FOOTER, "")?;
        wrap.class_list().add_1(classes::FOOTER)?;
        for class in split_classes(&footer.add_class) {
            wrap.class_list().add_1(class)?;
        }

        for button in &footer.buttons {
            let el = self.document.create_element("button")?;
            el.set_text_content(Some(&button.text));
            for class in split_classes(&button.class) {
                el.class_list().add_1(class)?;
            }

            if let Some(handler) = button.handler.clone() {
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    handler.run();
                }) as Box<dyn FnMut(_)>);
                el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
                self.button_handlers.push((el.clone(), closure));
            }

            wrap.append_child(&el)?;
        }

        Ok(wrap)
    }

    fn unbind_listeners(&mut self) {
        for (el, closure) in self.button_handlers.drain(..) {
            let _ = el.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.close_listener.take() {
            let _ = self
                .root
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

impl ModalSurface for DomSurface {
    fn add_class(&mut self, class: &str) {
        let _ = self.root.class_list().add_1(class);
    }

    fn remove_class(&mut self, class: &str) {
        let _ = self.root.class_list().remove_1(class);
    }

    fn set_title(&mut self, markup: &str) {
        if let Some(title) = self.region(classes::DATA_TITLE) {
            title.set_inner_html(markup);
        }
    }

    fn set_body(&mut self, markup: &str) {
        if let Some(body) = self.region(classes::DATA_BODY) {
            body.set_inner_html(markup);
        }
    }

    fn render_footer(&mut self, footer: &FooterOptions) {
        self.remove_footer();

        let Some(body) = self.region(classes::DATA_BODY) else {
            return;
        };
        let wrap = match self.build_footer(footer) {
            Ok(wrap) => wrap,
            Err(err) => {
                log::warn!("vmodal: failed to build footer: {}", err);
                return;
            }
        };

        // Footer goes right after the body region.
        if let Some(parent) = body.parent_node() {
            let _ = parent.insert_before(&wrap, body.next_sibling().as_ref());
        }
        self.footer = Some(wrap);
    }

    fn remove_footer(&mut self) {
        for (el, closure) in self.button_handlers.drain(..) {
            let _ = el.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        if let Some(footer) = self.footer.take() {
            footer.remove();
        }
    }

    fn swap_container_transition(&mut self, previous: &str, next: &str) {
        let Some(container) = self.region(classes::DATA_CONTAINER) else {
            return;
        };
        let class_list = container.class_list();
        if !previous.is_empty() {
            let _ = class_list.remove_1(&container_variant(previous));
        }
        if !next.is_empty() {
            let _ = class_list.add_1(&container_variant(next));
        }
    }

    fn set_centered(&mut self, centered: bool) {
        let _ = self
            .root
            .class_list()
            .toggle_with_force(classes::CENTERED, centered);
    }

    fn bind_close_trigger(&mut self, trigger: CloseTrigger) {
        let close_selector = selector(classes::DATA_CLOSE);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let is_close_control = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(&close_selector).ok().flatten())
                .is_some();
            if is_close_control {
                trigger.fire();
            }
        }) as Box<dyn FnMut(_)>);

        if self
            .root
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.close_listener = Some(closure);
        }
    }

    fn detach(&mut self) {
        self.unbind_listeners();
        self.footer = None;
        self.root.remove();
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        // The node may outlive us in the page; leave it inert.
        self.unbind_listeners();
    }
}
