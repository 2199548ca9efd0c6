use dioxus::prelude::*;

/// Bordered content card used across pages.
#[component]
pub fn Card(children: Element, #[props(default)] class: String) -> Element {
    rsx! {
        div { class: "card {class}", {children} }
    }
}
