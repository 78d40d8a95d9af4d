use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::callback::ModalCallback;

/// Transition length used when none is configured.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Whether clicks on a close control are honoured and which control is rendered.
///
/// Besides the tagged form, the widget's older shapes are accepted on input:
/// `true`/`false`, and `{ isClose, element, isCloseDisabled }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", from = "CloseWire")]
pub enum CloseBehavior {
    /// No close affordance and no click listener.
    Disabled,
    /// Renders the default `×` control.
    #[default]
    DefaultControl,
    /// Renders caller markup; any element inside it carrying `data-close` closes the modal.
    CustomControl { markup: String },
}

impl CloseBehavior {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, CloseBehavior::Disabled)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CloseWire {
    Flag(bool),
    Tagged(TaggedClose),
    Legacy(LegacyClose),
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum TaggedClose {
    Disabled,
    DefaultControl,
    CustomControl { markup: String },
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LegacyClose {
    is_close: bool,
    element: Option<String>,
    is_close_disabled: bool,
}

impl From<CloseWire> for CloseBehavior {
    fn from(wire: CloseWire) -> Self {
        match wire {
            CloseWire::Flag(true) => CloseBehavior::DefaultControl,
            // Clicks on the overlay still close; no control is rendered.
            CloseWire::Flag(false) => CloseBehavior::CustomControl {
                markup: String::new(),
            },
            CloseWire::Tagged(TaggedClose::Disabled) => CloseBehavior::Disabled,
            CloseWire::Tagged(TaggedClose::DefaultControl) => CloseBehavior::DefaultControl,
            CloseWire::Tagged(TaggedClose::CustomControl { markup }) => {
                CloseBehavior::CustomControl { markup }
            }
            CloseWire::Legacy(legacy) if legacy.is_close_disabled => CloseBehavior::Disabled,
            CloseWire::Legacy(LegacyClose {
                is_close: true,
                element: Some(markup),
                ..
            }) if !markup.is_empty() => CloseBehavior::CustomControl { markup },
            CloseWire::Legacy(LegacyClose { is_close: true, .. }) => CloseBehavior::DefaultControl,
            CloseWire::Legacy(_) => CloseBehavior::CustomControl {
                markup: String::new(),
            },
        }
    }
}

/// Visual transition: a type name (empty means none) and its duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionOptions {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(alias = "time")]
    pub duration_ms: u32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            kind: String::new(),
            duration_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl TransitionOptions {
    pub fn new(kind: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            kind: kind.into().trim().to_string(),
            duration_ms,
        }
    }

    pub fn has_kind(&self) -> bool {
        !self.kind.is_empty()
    }

    /// CSS `transition-duration` value, e.g. `0.3s`.
    pub fn css_duration(&self) -> String {
        format!("{}s", self.duration_ms as f64 / 1000.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonOptions {
    pub text: String,
    /// Whitespace separated class list.
    pub class: String,
    #[serde(skip)]
    pub handler: Option<ModalCallback>,
}

impl ButtonOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_handler(mut self, handler: impl Fn() + 'static) -> Self {
        self.handler = Some(ModalCallback::new(handler));
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterOptions {
    /// Whitespace separated class list added to the footer wrapper.
    pub add_class: String,
    pub buttons: Vec<ButtonOptions>,
}

impl FooterOptions {
    pub fn with_buttons(buttons: Vec<ButtonOptions>) -> Self {
        Self {
            add_class: String::new(),
            buttons,
        }
    }
}

/// Construction-time configuration of a modal.
///
/// Every field is optional on the wire; missing values fall back to
/// [`ModalOptions::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalOptions {
    pub title: String,
    pub content: String,
    pub width: String,
    pub margin: String,
    pub close: CloseBehavior,
    pub transition: TransitionOptions,
    pub footer: Option<FooterOptions>,
    /// Engage the page scroll lock while the modal is shown.
    pub lock_scroll: bool,
    pub modal_centered: bool,
    #[serde(skip)]
    pub on_open: Option<ModalCallback>,
    #[serde(skip)]
    pub on_close: Option<ModalCallback>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            width: String::new(),
            margin: String::new(),
            close: CloseBehavior::default(),
            transition: TransitionOptions::default(),
            footer: None,
            lock_scroll: true,
            modal_centered: false,
            on_open: None,
            on_close: None,
        }
    }
}

impl ModalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options kept as JSON text. Callbacks are never part of the text.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let options: ModalOptions =
            serde_json::from_str(json).context("Failed to parse modal options")?;
        Ok(options.normalized())
    }

    /// Trims the transition type so `" fade "` and `"fade"` name the same class.
    pub fn normalized(mut self) -> Self {
        self.transition.kind = self.transition.kind.trim().to_string();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn with_close(mut self, close: CloseBehavior) -> Self {
        self.close = close;
        self
    }

    pub fn with_transition(mut self, kind: impl Into<String>, duration_ms: u32) -> Self {
        self.transition = TransitionOptions::new(kind, duration_ms);
        self
    }

    pub fn with_footer(mut self, footer: FooterOptions) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_lock_scroll(mut self, lock_scroll: bool) -> Self {
        self.lock_scroll = lock_scroll;
        self
    }

    pub fn with_centered(mut self, centered: bool) -> Self {
        self.modal_centered = centered;
        self
    }

    pub fn on_open(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_open = Some(ModalCallback::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close = Some(ModalCallback::new(callback));
        self
    }
}
