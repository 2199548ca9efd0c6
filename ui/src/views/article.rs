use dioxus::prelude::*;

use api::{ArticleDetail, BiasDimension, BiasScores, BiasTimePoint};

use crate::charts::{BiasOverTime, BiasRadar};
use crate::components::Card;
use crate::core::format;
use crate::core::highlight::{self, Segment};

/// Article detail page: highlighted content on the left, bias analysis
/// (radar, score bars, sources, trend) in the aside.
#[component]
pub fn Article(id: String) -> Element {
    let article = use_resource(use_reactive!(|(id,)| async move {
        api::fetch_article(&id).await
    }));

    rsx! {
        section { class: "page page-article",
            match &*article.read_unchecked() {
                Some(Ok(detail)) => render_article(detail),
                Some(Err(err)) if err.is_not_found() => rsx! {
                    div { class: "page__notice",
                        h1 { "Article not found" }
                        p { "No analysis exists for this article. It may have been removed from the index." }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "page__notice",
                        p { class: "page__error", "Failed to load article: {err}" }
                    }
                },
                None => article_skeleton(),
            }
        }
    }
}

fn render_article(detail: &ArticleDetail) -> Element {
    let date = format::format_article_date(&detail.date);
    let segments = highlight::split_segments(&detail.content, &detail.highlights);
    let has_highlights = !detail.highlights.is_empty();
    let trend = recent_coverage_samples();

    rsx! {
        div { class: "page-article__layout",
            article { class: "page-article__body",
                h1 { class: "page-article__title", "{detail.title}" }
                div { class: "page-article__meta",
                    span { class: "page-article__source", "{detail.source}" }
                    span { "•" }
                    time { "{date}" }
                }

                if let Some(excerpt) = detail.excerpt.as_ref() {
                    Card { class: "page-article__excerpt",
                        p { "{excerpt}" }
                    }
                }

                p { class: "page-article__content",
                    for segment in segments.iter() {
                        {render_segment(segment)}
                    }
                }

                if has_highlights {
                    Card { class: "page-article__legend",
                        h3 { "Bias Indicators" }
                        ul { class: "legend",
                            for dimension in BiasDimension::ALL {
                                li { class: "legend__item",
                                    span { class: "legend__swatch legend__swatch--{dimension.as_str()}" }
                                    span { class: "legend__name", "{dimension.display_name()}" }
                                }
                            }
                        }
                        p { class: "legend__hint",
                            "Hover over highlighted phrases to see detailed bias analysis."
                        }
                    }
                }
            }

            aside { class: "page-article__aside",
                Card { class: "aside-card",
                    h2 { "Bias Analysis" }
                    BiasRadar { scores: detail.bias }
                    div { class: "score-bars",
                        for dimension in BiasDimension::ALL {
                            {score_bar(dimension, detail.bias)}
                        }
                    }
                }

                if !detail.primary_sources.is_empty() {
                    Card { class: "aside-card",
                        h3 { "Primary Sources" }
                        ul { class: "sources",
                            for source in detail.primary_sources.iter() {
                                li { key: "{source.url}", class: "sources__item",
                                    a {
                                        href: "{source.url}",
                                        target: "_blank",
                                        rel: "noreferrer",
                                        "{source.title}"
                                    }
                                }
                            }
                        }
                    }
                }

                Card { class: "aside-card",
                    h3 { "Bias Trend Analysis" }
                    BiasOverTime {
                        data: trend,
                        dimension: BiasDimension::IdeologicalStance,
                    }
                }
            }
        }
    }
}

fn render_segment(segment: &Segment) -> Element {
    match segment {
        Segment::Plain { text } => rsx! {
            span { "{text}" }
        },
        Segment::Annotated {
            text,
            dimension,
            note,
        } => {
            let mut tooltip = dimension.display_name().to_uppercase();
            if let Some(note) = note {
                tooltip.push_str(": ");
                tooltip.push_str(note);
            }
            let class = format!(
                "article-highlight article-highlight--{}",
                dimension.as_str()
            );
            rsx! {
                span { class: "{class}", title: "{tooltip}", "{text}" }
            }
        }
    }
}

fn score_bar(dimension: BiasDimension, scores: BiasScores) -> Element {
    let score = scores.get(dimension);
    let percent = format::format_percent(score);
    let width = (score.clamp(0.0, 1.0) * 100.0).round();

    rsx! {
        div { class: "score-bar",
            div { class: "score-bar__header",
                span { class: "score-bar__name", "{dimension.display_name()}" }
                span { class: "score-bar__value", "{percent}" }
            }
            div { class: "score-bar__track",
                div { class: "score-bar__fill", style: "width: {width}%" }
            }
        }
    }
}

fn article_skeleton() -> Element {
    rsx! {
        div { class: "page-article__skeleton",
            div { class: "skeleton skeleton--title" }
            div { class: "skeleton skeleton--meta" }
            div { class: "skeleton skeleton--line" }
            div { class: "skeleton skeleton--line" }
            div { class: "skeleton skeleton--line skeleton--short" }
        }
    }
}

/// Recent coverage samples for the trend panel.
// TODO: swap for a narrative history endpoint once the backend exposes one.
fn recent_coverage_samples() -> Vec<BiasTimePoint> {
    let samples = [
        ("2024-10-20", 0.2, 0.7, 0.3, 0.1, 0.6),
        ("2024-10-22", 0.25, 0.65, 0.35, 0.15, 0.55),
        ("2024-10-24", 0.3, 0.6, 0.4, 0.2, 0.5),
        ("2024-10-26", 0.35, 0.65, 0.45, 0.25, 0.55),
    ];

    samples
        .iter()
        .map(
            |&(date, ideological, factual, framing, emotional, transparency)| BiasTimePoint {
                date: date.to_string(),
                bias: BiasScores {
                    ideological_stance: ideological,
                    factual_grounding: factual,
                    framing_choices: framing,
                    emotional_tone: emotional,
                    source_transparency: transparency,
                },
            },
        )
        .collect()
}
