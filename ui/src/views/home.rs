use dioxus::prelude::*;

use api::{ArticleSummary, NarrativeCluster};

use crate::components::site_header::{article_link, docs_link};
use crate::core::format;

/// Landing page: narrative-cluster grid on top, the article index below.
#[component]
pub fn Home() -> Element {
    let narratives = use_resource(|| async move { api::fetch_narratives().await });
    let articles = use_resource(|| async move { api::fetch_articles().await });

    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero",
                h1 { "News" }
                p { class: "page-home__tagline",
                    "Explore how different narratives are being covered across news sources, "
                    "with AI-powered bias detection and transparency insights."
                }
            }

            match &*narratives.read_unchecked() {
                Some(Ok(clusters)) => rsx! {
                    div { class: "narrative-grid",
                        for (index, cluster) in clusters.iter().enumerate() {
                            {narrative_card(cluster, index)}
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "page__error", "Failed to load narratives: {err}" }
                },
                None => rsx! {
                    div { class: "narrative-grid",
                        for index in 0..6 {
                            div { key: "{index}", class: "narrative-card narrative-card--skeleton" }
                        }
                    }
                },
            }

            section { class: "page-home__articles",
                h2 { "Latest articles" }
                match &*articles.read_unchecked() {
                    Some(Ok(list)) => rsx! {
                        ul { class: "article-list",
                            for article in list.iter() {
                                {article_row(article)}
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "page__error", "Failed to load articles: {err}" }
                    },
                    None => rsx! {
                        p { class: "page__placeholder", "Loading coverage…" }
                    },
                }
            }

            section { class: "page-home__methodology",
                h2 { "Understanding Media Bias" }
                p {
                    "Our AI-powered analysis identifies five key dimensions of bias: ideological stance, "
                    "factual grounding, framing choices, emotional tone, and source transparency. "
                    "Each article is scored and highlighted to make bias patterns visible and understandable."
                }
                {docs_link("Learn more about our methodology")}
            }
        }
    }
}

fn narrative_card(cluster: &NarrativeCluster, index: usize) -> Element {
    let divergence = format::format_percent(cluster.divergence_index);
    let variant = index % 6;
    let target = cluster
        .top_articles
        .first()
        .map(|article| article.id.clone())
        .unwrap_or_default();

    let body = rsx! {
        article { class: "narrative-card narrative-card--v{variant}",
            div { class: "narrative-card__kicker", "Analysis" }
            h2 { class: "narrative-card__title", "{cluster.title}" }
            p { class: "narrative-card__description", "{cluster.description}" }
            span { class: "narrative-card__badge", "{divergence} divergence" }
        }
    };

    rsx! {
        div { key: "{cluster.id}", class: "narrative-grid__cell",
            {article_link(&target, body)}
        }
    }
}

fn article_row(article: &ArticleSummary) -> Element {
    let date = format::format_article_date(&article.date);
    let title = rsx! {
        span { class: "article-list__title", "{article.title}" }
    };

    rsx! {
        li { key: "{article.id}", class: "article-list__item",
            {article_link(&article.id, title)}
            span { class: "article-list__meta", "{article.source} · {date}" }
            if let Some(excerpt) = article.excerpt.as_ref() {
                p { class: "article-list__excerpt", "{excerpt}" }
            }
        }
    }
}
