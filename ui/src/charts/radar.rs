use dioxus::prelude::*;

use api::{BiasDimension, BiasScores};

use crate::core::format;
use crate::core::radar::{self, RadarOptions};

/// Space reserved around the chart so axis labels stay inside the viewport.
const LABEL_MARGIN: f64 = 60.0;

/// Radar polygon over the five bias dimensions. All geometry comes from
/// `core::radar::project`; this component only writes SVG.
#[component]
pub fn BiasRadar(scores: BiasScores, #[props(default = 280.0)] size: f64) -> Element {
    let center = size / 2.0;
    let radius = center - LABEL_MARGIN;
    let options = RadarOptions::default();
    let geometry = radar::project(&scores, &BiasDimension::ALL, radius, &options);

    let polygon_points = geometry
        .vertices
        .iter()
        .map(|v| format!("{:.2},{:.2}", center + v.x, center + v.y))
        .collect::<Vec<_>>()
        .join(" ");

    let dots: Vec<(f64, f64)> = geometry
        .vertices
        .iter()
        .map(|v| (center + v.x, center + v.y))
        .collect();

    let spoke_ends: Vec<(f64, f64)> = geometry
        .spokes
        .iter()
        .map(|&angle| {
            let end = radar::polar(radius, angle);
            (end.x, end.y)
        })
        .collect();

    let scale_ticks: Vec<(f64, String)> = [0.5, 1.0]
        .iter()
        .map(|&scale| (-radius * scale + 3.0, format::format_percent(scale)))
        .collect();

    rsx! {
        div { class: "chart chart--radar",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",

                g { transform: "translate({center}, {center})",
                    for ring in geometry.grid_rings {
                        circle {
                            cx: "0",
                            cy: "0",
                            r: "{ring}",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "0.5",
                            opacity: "0.15",
                        }
                    }
                    for (x, y) in spoke_ends {
                        line {
                            x1: "0",
                            y1: "0",
                            x2: "{x}",
                            y2: "{y}",
                            stroke: "currentColor",
                            stroke_width: "0.5",
                            opacity: "0.15",
                        }
                    }
                }

                polygon {
                    points: "{polygon_points}",
                    fill: "rgba(255, 255, 255, 0.02)",
                    stroke: "rgba(255, 255, 255, 0.3)",
                    stroke_width: "1.5",
                }

                for (x, y) in dots {
                    circle {
                        cx: "{x}",
                        cy: "{y}",
                        r: "3",
                        class: "chart__dot",
                        stroke: "rgba(255, 255, 255, 0.6)",
                        stroke_width: "1.5",
                    }
                }

                g { transform: "translate({center}, {center})",
                    for label in geometry.labels {
                        text {
                            x: "{label.position.x}",
                            y: "{label.position.y}",
                            text_anchor: "middle",
                            dominant_baseline: "middle",
                            class: "chart__axis-label",
                            "{label.text}"
                        }
                    }

                    for (y, label) in scale_ticks {
                        text {
                            x: "-10",
                            y: "{y}",
                            text_anchor: "end",
                            class: "chart__scale-label",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
