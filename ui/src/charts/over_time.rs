use dioxus::prelude::*;

use api::{BiasDimension, BiasTimePoint};

use crate::core::format;
use crate::core::series;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 200.0;
const PADDING: f64 = 40.0;

/// Polyline of one bias dimension across a narrative's coverage over time.
/// Samples are plotted in the order supplied; geometry comes from
/// `core::series::project`.
#[component]
pub fn BiasOverTime(data: Vec<BiasTimePoint>, dimension: BiasDimension) -> Element {
    if data.is_empty() {
        return rsx! {};
    }

    let values: Vec<f64> = data.iter().map(|point| point.bias.get(dimension)).collect();
    let geometry = series::project(&values, WIDTH, HEIGHT, PADDING);

    let polyline_points = geometry
        .points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    // (gridline y, label y, label) per y tick; (x, date badge) per x tick.
    let y_ticks: Vec<(f64, f64, String)> = geometry
        .y_ticks
        .iter()
        .map(|tick| (tick.y, tick.y + 4.0, format::format_percent(tick.fraction)))
        .collect();
    let x_ticks: Vec<(f64, String)> = geometry
        .x_ticks
        .iter()
        .map(|tick| (tick.x, format::format_date_badge(&data[tick.index].date)))
        .collect();

    let tick_x_start = PADDING - 5.0;
    let label_x = PADDING - 10.0;
    let label_row_y = HEIGHT - 10.0;

    rsx! {
        div { class: "chart chart--series",
            p { class: "chart__caption",
                "Shows how {dimension.display_name()} has evolved in coverage of this narrative over time."
            }

            svg {
                width: "{WIDTH}",
                height: "{HEIGHT}",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                class: "chart__svg",

                for (line_y, text_y, label) in y_ticks {
                    g {
                        line {
                            x1: "{tick_x_start}",
                            y1: "{line_y}",
                            x2: "{PADDING}",
                            y2: "{line_y}",
                            stroke: "currentColor",
                            opacity: "0.4",
                        }
                        text {
                            x: "{label_x}",
                            y: "{text_y}",
                            text_anchor: "end",
                            class: "chart__scale-label",
                            "{label}"
                        }
                    }
                }

                polyline {
                    points: "{polyline_points}",
                    fill: "none",
                    class: "chart__line",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }

                for point in geometry.points {
                    circle {
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "3",
                        class: "chart__dot",
                        stroke_width: "2",
                    }
                }

                for (x, badge) in x_ticks {
                    text {
                        x: "{x}",
                        y: "{label_row_y}",
                        text_anchor: "middle",
                        class: "chart__scale-label",
                        "{badge}"
                    }
                }
            }
        }
    }
}
