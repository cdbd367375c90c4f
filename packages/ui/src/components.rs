//! Small shared widgets the views compose.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = String::new())] title: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let type_attr = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{type_attr}",
            disabled: disabled,
            title: "{title}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = false)] autofocus: bool,
    oninput: EventHandler<FormEvent>,
    #[props(default)] onkeydown: EventHandler<KeyboardEvent>,
) -> Element {
    let type_attr = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{type_attr}",
            placeholder: "{placeholder}",
            value: "{value}",
            autofocus: autofocus,
            oninput: move |evt| oninput.call(evt),
            onkeydown: move |evt| onkeydown.call(evt),
        }
    }
}

/// Inline error banner shown above forms and lists.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner-error",
            role: "alert",
            strong { "Error! " }
            span { "{message}" }
        }
    }
}
