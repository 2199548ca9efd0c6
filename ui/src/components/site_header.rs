use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platform crates register a `NavBuilder` providing fully constructed
/// `Link` elements, so `ui` never needs to know the platform's `Route` enum.
///
/// Each closure receives the content to wrap (a label, or a card body for
/// article links) and returns a link that already contains it. If no builder
/// is registered, the helpers below fall back to plain anchors so the crate
/// stays usable outside a router.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub docs: fn(label: &str) -> Element,
    pub article: fn(id: &str, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub fn home_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(label),
        None => rsx! {
            a { class: "site-header__brand-link", href: "/", "{label}" }
        },
    }
}

pub fn docs_link(label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.docs)(label),
        None => rsx! {
            a { class: "site-header__link", href: "/docs", "{label}" }
        },
    }
}

pub fn article_link(id: &str, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.article)(id, children),
        None => rsx! {
            a { class: "article-link", href: "/articles/{id}", {children} }
        },
    }
}

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    {home_link("The Bias Lab")}
                }
                nav { class: "site-header__links",
                    {docs_link("Docs")}
                    span { class: "site-header__divider", "|" }
                    {docs_link("API reference")}
                }
            }
        }
    }
}
