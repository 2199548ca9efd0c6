//! Radar-polygon projection for per-article bias scores.
//!
//! The full circle is split into equal angular steps, one per dimension,
//! starting at -π/2 (pointing up) and proceeding clockwise. Dimension order
//! defines angular position, so callers must pass the same order on every
//! render; `BiasDimension::ALL` is the canonical one.

use std::f64::consts::{FRAC_PI_2, TAU};

use api::{BiasDimension, BiasScores};

use super::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarOptions {
    /// Scale fractions of the radius at which concentric gridlines sit.
    pub grid_scales: Vec<f64>,
    /// Distance past the outer radius at which axis labels sit.
    pub label_offset: f64,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            grid_scales: vec![0.2, 0.4, 0.6, 0.8, 1.0],
            label_offset: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpokeLabel {
    pub position: Point,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarGeometry {
    /// One vertex per dimension, relative to the chart center. The drawing
    /// layer connects the last vertex back to the first.
    pub vertices: Vec<Point>,
    /// Radii of the concentric gridline rings.
    pub grid_rings: Vec<f64>,
    /// Spoke angles in radians.
    pub spokes: Vec<f64>,
    /// Axis labels, placed past the outer radius along each spoke.
    pub labels: Vec<SpokeLabel>,
}

/// Polar to Cartesian, relative to the chart center.
pub fn polar(radius: f64, angle: f64) -> Point {
    Point {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
    }
}

pub fn project(
    scores: &BiasScores,
    order: &[BiasDimension],
    radius: f64,
    options: &RadarOptions,
) -> RadarGeometry {
    let grid_rings: Vec<f64> = options.grid_scales.iter().map(|s| radius * s).collect();
    if order.is_empty() {
        return RadarGeometry {
            vertices: Vec::new(),
            grid_rings,
            spokes: Vec::new(),
            labels: Vec::new(),
        };
    }

    let step = TAU / order.len() as f64;

    let mut vertices = Vec::with_capacity(order.len());
    let mut spokes = Vec::with_capacity(order.len());
    let mut labels = Vec::with_capacity(order.len());

    for (i, dimension) in order.iter().enumerate() {
        let angle = -FRAC_PI_2 + step * i as f64;
        let value = scores.get(*dimension).clamp(0.0, 1.0);

        vertices.push(polar(radius * value, angle));
        spokes.push(angle);
        labels.push(SpokeLabel {
            position: polar(radius + options.label_offset, angle),
            text: dimension.label(),
        });
    }

    RadarGeometry {
        vertices,
        grid_rings,
        spokes,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn scores() -> BiasScores {
        BiasScores {
            ideological_stance: 1.0,
            factual_grounding: 0.0,
            framing_choices: 0.5,
            emotional_tone: 0.5,
            source_transparency: 0.5,
        }
    }

    #[test]
    fn full_score_vertex_points_straight_up() {
        let geometry = project(
            &scores(),
            &BiasDimension::ALL,
            100.0,
            &RadarOptions::default(),
        );
        let first = geometry.vertices[0];
        assert!(first.x.abs() < EPSILON, "x was {}", first.x);
        assert!((first.y + 100.0).abs() < EPSILON, "y was {}", first.y);
    }

    #[test]
    fn zero_score_vertex_sits_at_center() {
        let geometry = project(
            &scores(),
            &BiasDimension::ALL,
            100.0,
            &RadarOptions::default(),
        );
        let second = geometry.vertices[1];
        assert!(second.x.abs() < EPSILON);
        assert!(second.y.abs() < EPSILON);
    }

    #[test]
    fn one_vertex_per_dimension() {
        let geometry = project(
            &scores(),
            &BiasDimension::ALL,
            120.0,
            &RadarOptions::default(),
        );
        assert_eq!(geometry.vertices.len(), BiasDimension::ALL.len());
        assert_eq!(geometry.spokes.len(), BiasDimension::ALL.len());
        assert_eq!(geometry.labels.len(), BiasDimension::ALL.len());
    }

    #[test]
    fn grid_rings_follow_configured_scales() {
        let options = RadarOptions {
            grid_scales: vec![0.5, 1.0],
            label_offset: 30.0,
        };
        let geometry = project(&scores(), &BiasDimension::ALL, 200.0, &options);
        assert_eq!(geometry.grid_rings, vec![100.0, 200.0]);
    }

    #[test]
    fn labels_sit_past_the_outer_radius() {
        let options = RadarOptions {
            grid_scales: vec![1.0],
            label_offset: 30.0,
        };
        let geometry = project(&scores(), &BiasDimension::ALL, 100.0, &options);
        let first = &geometry.labels[0];
        assert!(first.position.x.abs() < EPSILON);
        assert!((first.position.y + 130.0).abs() < EPSILON);
        assert_eq!(first.text, "Ideological");
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let wild = BiasScores {
            ideological_stance: 7.5,
            factual_grounding: -2.0,
            ..BiasScores::default()
        };
        let geometry = project(&wild, &BiasDimension::ALL, 100.0, &RadarOptions::default());
        assert!((geometry.vertices[0].y + 100.0).abs() < EPSILON);
        assert!(geometry.vertices[1].x.abs() < EPSILON);
        assert!(geometry.vertices[1].y.abs() < EPSILON);
    }

    #[test]
    fn spokes_divide_the_circle_evenly() {
        let geometry = project(
            &scores(),
            &BiasDimension::ALL,
            100.0,
            &RadarOptions::default(),
        );
        let step = TAU / 5.0;
        for (i, angle) in geometry.spokes.iter().enumerate() {
            assert!((angle - (-FRAC_PI_2 + step * i as f64)).abs() < EPSILON);
        }
    }

    #[test]
    fn empty_order_yields_no_polygon() {
        let geometry = project(&scores(), &[], 100.0, &RadarOptions::default());
        assert!(geometry.vertices.is_empty());
        assert_eq!(geometry.grid_rings.len(), 5);
    }
}
