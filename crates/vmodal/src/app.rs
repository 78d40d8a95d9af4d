//! Demo page exercising every modal operation.

use contracts::modal::{ButtonOptions, ModalOptions};
use leptos::prelude::*;

use crate::shared::modal::hook::{use_modal, with_modal};

const TRANSITIONS: [&str; 3] = ["", "fade", "slide"];

#[component]
pub fn App() -> impl IntoView {
    let (log_lines, set_log_lines) = signal(Vec::<String>::new());
    let push_log = move |line: &str| {
        let line = line.to_string();
        set_log_lines.update(|lines| lines.push(line));
    };

    let options = ModalOptions::new()
        .with_title("Demo modal")
        .with_content("<p>Click the overlay, the &#215; or a footer button to close.</p>")
        .with_width("480px")
        .with_transition("fade", 300)
        .on_open(move || push_log("onOpen"))
        .on_close(move || push_log("onClose"));
    let modal = use_modal(options);

    with_modal(modal, |m| {
        let handle = m.downgrade();
        m.set_buttons(vec![
            ButtonOptions::new("OK")
                .with_class("button button--primary")
                .with_handler(move || handle.close()),
        ]);
    });

    let transition_index = RwSignal::new(1usize);
    let centered = RwSignal::new(false);

    let open = move |_| with_modal(modal, |m| m.open());

    let next_transition = move |_| {
        let next = (transition_index.get_untracked() + 1) % TRANSITIONS.len();
        transition_index.set(next);
        with_modal(modal, |m| m.set_transition(TRANSITIONS[next]));
    };

    let toggle_centered = move |_| {
        centered.update(|c| *c = !*c);
        with_modal(modal, |m| m.set_modal_centered(centered.get_untracked()));
    };

    let swap_buttons = move |_| {
        with_modal(modal, |m| {
            let handle = m.downgrade();
            m.set_buttons(vec![
                ButtonOptions::new("Cancel")
                    .with_class("button")
                    .with_handler(move || handle.close()),
            ]);
        });
    };

    let drop_footer = move |_| with_modal(modal, |m| m.remove_footer());

    let destroy = move |_| {
        with_modal(modal, |m| m.destroy());
        push_log("destroyed");
    };

    view! {
        <div class="vmodal-demo">
            <div class="vmodal-demo__actions">
                <button class="button button--primary" on:click=open>"Open"</button>
                <button class="button" on:click=next_transition>
                    {move || {
                        let name = TRANSITIONS[transition_index.get()];
                        if name.is_empty() { "Transition: none".to_string() } else { format!("Transition: {name}") }
                    }}
                </button>
                <button class="button" on:click=toggle_centered>
                    {move || if centered.get() { "Centered: on" } else { "Centered: off" }}
                </button>
                <button class="button" on:click=swap_buttons>"Swap buttons"</button>
                <button class="button" on:click=drop_footer>"Remove footer"</button>
                <button class="button" on:click=destroy>"Destroy"</button>
            </div>
            <ul class="vmodal-demo__log">
                {move || log_lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </div>
    }
}
