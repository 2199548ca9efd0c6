//! Record shapes served by the backend. All of these deserialize straight
//! from JSON responses and are never mutated after that.

use serde::{Deserialize, Serialize};

/// The five axes of narrative framing the backend scores, in their canonical
/// presentation order. The order matters: the radar chart assigns angular
/// position by index, so it must be identical across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasDimension {
    IdeologicalStance,
    FactualGrounding,
    FramingChoices,
    EmotionalTone,
    SourceTransparency,
}

impl BiasDimension {
    pub const ALL: [BiasDimension; 5] = [
        BiasDimension::IdeologicalStance,
        BiasDimension::FactualGrounding,
        BiasDimension::FramingChoices,
        BiasDimension::EmotionalTone,
        BiasDimension::SourceTransparency,
    ];

    /// Short label used next to chart axes.
    pub fn label(self) -> &'static str {
        match self {
            BiasDimension::IdeologicalStance => "Ideological",
            BiasDimension::FactualGrounding => "Factual",
            BiasDimension::FramingChoices => "Framing",
            BiasDimension::EmotionalTone => "Emotional",
            BiasDimension::SourceTransparency => "Transparency",
        }
    }

    /// Prose name for legends and tooltips.
    pub fn display_name(self) -> &'static str {
        match self {
            BiasDimension::IdeologicalStance => "ideological stance",
            BiasDimension::FactualGrounding => "factual grounding",
            BiasDimension::FramingChoices => "framing choices",
            BiasDimension::EmotionalTone => "emotional tone",
            BiasDimension::SourceTransparency => "source transparency",
        }
    }

    /// Wire identifier, doubling as a CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            BiasDimension::IdeologicalStance => "ideological_stance",
            BiasDimension::FactualGrounding => "factual_grounding",
            BiasDimension::FramingChoices => "framing_choices",
            BiasDimension::EmotionalTone => "emotional_tone",
            BiasDimension::SourceTransparency => "source_transparency",
        }
    }
}

/// Per-article bias scores, one per dimension, each in [0, 1]. A field the
/// backend omits deserializes to 0.0 rather than failing the whole payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasScores {
    #[serde(default)]
    pub ideological_stance: f64,
    #[serde(default)]
    pub factual_grounding: f64,
    #[serde(default)]
    pub framing_choices: f64,
    #[serde(default)]
    pub emotional_tone: f64,
    #[serde(default)]
    pub source_transparency: f64,
}

impl BiasScores {
    pub fn get(&self, dimension: BiasDimension) -> f64 {
        match dimension {
            BiasDimension::IdeologicalStance => self.ideological_stance,
            BiasDimension::FactualGrounding => self.factual_grounding,
            BiasDimension::FramingChoices => self.framing_choices,
            BiasDimension::EmotionalTone => self.emotional_tone,
            BiasDimension::SourceTransparency => self.source_transparency,
        }
    }
}

/// A labeled character-offset span inside an article's content string marking
/// where a dimension was detected. Offsets are char offsets; the backend is
/// responsible for keeping `end <= content.chars().count()`, the renderer
/// clips rather than validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub dimension: BiasDimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimarySource {
    pub title: String,
    pub url: String,
}

/// Article as it appears in list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub source: String,
    /// RFC 3339 timestamp; parsed lazily where a formatted date is needed.
    pub date: String,
    pub bias: BiasScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Full article payload for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: String,
    pub title: String,
    pub source: String,
    pub date: String,
    pub bias: BiasScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub primary_sources: Vec<PrimarySource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterArticle {
    pub id: String,
    pub title: String,
}

/// A group of articles covering the same underlying story, with a single
/// scalar summarizing how much outlet coverage diverges within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeCluster {
    pub id: String,
    pub title: String,
    pub description: String,
    pub divergence_index: f64,
    #[serde(default)]
    pub top_articles: Vec<ClusterArticle>,
}

/// One sample of a narrative's bias scores at a point in time. Sequence order
/// is supplied by the caller; the series projector indexes by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasTimePoint {
    pub date: String,
    pub bias: BiasScores,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_bias_fields_default_to_zero() {
        let scores: BiasScores =
            serde_json::from_value(json!({ "ideological_stance": 0.45 })).unwrap();
        assert_eq!(scores.ideological_stance, 0.45);
        assert_eq!(scores.factual_grounding, 0.0);
        assert_eq!(scores.source_transparency, 0.0);
    }

    #[test]
    fn highlight_note_is_optional() {
        let highlight: Highlight = serde_json::from_value(json!({
            "start": 4,
            "end": 13,
            "dimension": "ideological_stance"
        }))
        .unwrap();
        assert_eq!(highlight.dimension, BiasDimension::IdeologicalStance);
        assert!(highlight.note.is_none());
    }

    #[test]
    fn article_detail_parses_backend_payload() {
        let detail: ArticleDetail = serde_json::from_value(json!({
            "id": "a1",
            "title": "Committee Releases Preliminary Findings Amid Debate",
            "source": "Civic Daily",
            "date": "2024-11-03T09:00:00Z",
            "bias": {
                "ideological_stance": 0.45,
                "factual_grounding": 0.82,
                "framing_choices": 0.61,
                "emotional_tone": 0.35,
                "source_transparency": 0.9
            },
            "excerpt": "Preliminary findings spark debate...",
            "content": "The committee released its preliminary findings on Tuesday.",
            "highlights": [
                { "start": 4, "end": 13, "dimension": "ideological_stance", "note": "Ambiguous agency" }
            ],
            "primary_sources": [
                { "title": "Hearing Transcript", "url": "https://example.org/transcript.pdf" }
            ]
        }))
        .unwrap();

        assert_eq!(detail.highlights.len(), 1);
        assert_eq!(detail.primary_sources[0].title, "Hearing Transcript");
    }

    #[test]
    fn cluster_tolerates_missing_top_articles() {
        let cluster: NarrativeCluster = serde_json::from_value(json!({
            "id": "n4",
            "title": "Economic Indicators Show Cautious Optimism",
            "description": "Financial experts interpret market signals differently.",
            "divergence_index": 0.39
        }))
        .unwrap();
        assert!(cluster.top_articles.is_empty());
    }

    #[test]
    fn dimension_round_trips_through_wire_name() {
        for dimension in BiasDimension::ALL {
            let encoded = serde_json::to_string(&dimension).unwrap();
            assert_eq!(encoded, format!("\"{}\"", dimension.as_str()));
            let decoded: BiasDimension = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, dimension);
        }
    }
}
