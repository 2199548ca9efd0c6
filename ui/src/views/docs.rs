use dioxus::prelude::*;

use api::BiasDimension;

use crate::components::Card;

/// Methodology and API reference page. Static content; the live OpenAPI
/// schema is served by the backend itself.
#[component]
pub fn Docs() -> Element {
    rsx! {
        section { class: "page page-docs",
            h1 { "Methodology & API" }
            p { class: "page-docs__intro",
                "Every article is scored along five dimensions of narrative framing. "
                "Scores range from 0 to 1; highlighted phrases mark where each dimension was detected in the text."
            }

            Card { class: "page-docs__section",
                h2 { "Bias dimensions" }
                ul { class: "page-docs__dimensions",
                    for dimension in BiasDimension::ALL {
                        li { key: "{dimension.as_str()}",
                            strong { "{dimension.display_name()}" }
                            " — "
                            span { "{dimension_summary(dimension)}" }
                        }
                    }
                }
            }

            Card { class: "page-docs__section",
                h2 { "Endpoints" }
                ul { class: "page-docs__endpoints",
                    li {
                        code { "GET /articles" }
                        p { "Every analyzed article with its bias scores, newest first." }
                    }
                    li {
                        code { "GET /articles/:id" }
                        p { "Full article detail: content, highlight spans, and primary sources. Returns 404 for unknown ids." }
                    }
                    li {
                        code { "GET /narratives" }
                        p { "Narrative clusters with a divergence index and the top articles in each." }
                    }
                }
                p { class: "page-docs__note",
                    "Responses are plain JSON. Failed requests surface as a message in the page; nothing is retried automatically."
                }
            }
        }
    }
}

fn dimension_summary(dimension: BiasDimension) -> &'static str {
    match dimension {
        BiasDimension::IdeologicalStance => {
            "how strongly the framing leans toward a political position"
        }
        BiasDimension::FactualGrounding => "how well claims are anchored to verifiable evidence",
        BiasDimension::FramingChoices => "which aspects of the story are emphasized or downplayed",
        BiasDimension::EmotionalTone => "how much loaded or intensifying language is used",
        BiasDimension::SourceTransparency => "how openly underlying sources are disclosed",
    }
}
