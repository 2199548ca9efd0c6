use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { class: "site-footer__credit",
                "Made with "
                span { class: "site-footer__heart", "♥" }
                " by "
                span { class: "site-footer__author", "Koshish" }
            }
        }
    }
}
