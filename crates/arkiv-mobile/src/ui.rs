//! Shared mobile UI primitives and the app stylesheet.

use dioxus::prelude::*;

/// Shared styles for the mobile shell: form primitives, list cards,
/// modal overlays, and the bottom tab bar.
pub const MOBILE_UI_STYLES: &str = r"
body {
    margin: 0;
    background: #f5f5f5;
    font-family: system-ui, sans-serif;
}

.screen {
    display: flex;
    flex-direction: column;
    height: 100vh;
    padding: 16px;
    box-sizing: border-box;
}

.screen-title {
    margin: 0 0 16px 0;
    font-size: 22px;
    font-weight: 700;
    color: #333333;
}

.ui-button {
    border-radius: 6px;
    padding: 10px 14px;
    font-size: 14px;
    font-weight: 600;
    border: 1px solid transparent;
}

.ui-button:disabled {
    opacity: 0.55;
}

.ui-button--block {
    width: 100%;
}

.ui-button--primary {
    background: #007bff;
    color: #ffffff;
    border-color: #007bff;
}

.ui-button--outline {
    background: #ffffff;
    color: #333333;
    border-color: #cccccc;
}

.ui-button--ghost {
    background: transparent;
    color: #333333;
    border-color: transparent;
}

.ui-button--danger {
    background: #ff0000;
    color: #ffffff;
    border-color: #ff0000;
}

.ui-input,
.ui-select {
    width: 100%;
    border: 1px solid #808080;
    border-radius: 5px;
    padding: 10px 8px;
    font-size: 14px;
    background: #ffffff;
    color: #333333;
    box-sizing: border-box;
}

.ui-textarea {
    width: 100%;
    min-height: 180px;
    border: 1px solid #808080;
    border-radius: 5px;
    padding: 10px 8px;
    font-size: 14px;
    background: #ffffff;
    color: #333333;
    box-sizing: border-box;
    resize: none;
}

.list-scroll {
    flex: 1;
    overflow-y: auto;
}

.list-card {
    padding: 10px;
    margin-bottom: 10px;
    border-radius: 5px;
    border-bottom: 1px solid #808080;
    background: #ffffff;
    box-shadow: 0 2px 2px rgba(0, 0, 0, 0.2);
}

.list-card-actions {
    display: flex;
    justify-content: space-between;
    margin-top: 10px;
}

.status-banner {
    margin: 0 0 12px 0;
    padding: 8px 10px;
    border-radius: 5px;
    background: #fff3cd;
    color: #664d03;
    font-size: 13px;
}

.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.35);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 20px;
}

.modal-card {
    width: 100%;
    max-width: 420px;
    background: #ffffff;
    border-radius: 10px;
    padding: 20px;
    box-shadow: 0 2px 2px rgba(0, 0, 0, 0.2);
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.modal-buttons {
    display: flex;
    justify-content: space-between;
    gap: 10px;
}

.tab-bar {
    display: flex;
    border-top: 1px solid #cccccc;
    background: #ffffff;
}

.tab-button {
    flex: 1;
    padding: 12px 0;
    border: none;
    background: transparent;
    font-size: 13px;
    color: #808080;
}

.tab-button--active {
    color: tomato;
    font-weight: 700;
}

.fab {
    position: fixed;
    bottom: 76px;
    right: 20px;
    border-radius: 50%;
    width: 52px;
    height: 52px;
    font-size: 24px;
    line-height: 1;
}

.info-button {
    position: fixed;
    bottom: 76px;
    left: 20px;
    border-radius: 50%;
    width: 44px;
    height: 44px;
    font-size: 18px;
}

.checkbox-row {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 12px;
    color: #333333;
    font-size: 14px;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("ui-button {}", variant.class());
    if block {
        class_name.push_str(" ui-button--block");
    }

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            onchange: move |event| _ = onchange.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-textarea",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiSelect(
    onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = select)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        select {
            class: "ui-select",
            onchange: move |event| _ = onchange.map(|handler| handler(event)),
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiCheckbox(
    label: String,
    checked: bool,
    onchange: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        label {
            class: "checkbox-row",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |event| _ = onchange.map(|handler| handler(event)),
            }
            "{label}"
        }
    }
}
