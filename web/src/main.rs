use dioxus::prelude::*;

use ui::components::site_header::{register_nav, NavBuilder};
use ui::components::{SiteFooter, SiteHeader};
use ui::views::{Article, Docs, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/articles/:id")]
    Article { id: String },
    #[route("/docs")]
    Docs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__brand-link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_docs(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__link",
        to: Route::Docs {},
        "{label}"
    })
}
fn nav_article(id: &str, children: Element) -> Element {
    rsx!(Link {
        class: "article-link",
        to: Route::Article { id: id.to_string() },
        {children}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        docs: nav_docs,
        article: nav_article,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web shell wrapping every page with the shared header and footer.
#[component]
fn SiteShell() -> Element {
    rsx! {
        SiteHeader {}
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter {}
    }
}
