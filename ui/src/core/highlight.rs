//! Partitions article text into plain and annotated segments from the
//! backend's highlight spans.
//!
//! Spans may arrive unsorted and may overlap. After a stable sort by start
//! offset, a cursor advances through the content: a span starting behind the
//! cursor is clipped against it (never merged with, never duplicating, the
//! span before it). This is deliberately not a general interval-merge;
//! malformed offsets degrade to best-effort clipping rather than an error.
//!
//! Offsets are char offsets, clamped to the content length. Zero-length
//! segments are skipped rather than emitted.

use api::{BiasDimension, Highlight};

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Plain {
        text: String,
    },
    Annotated {
        text: String,
        dimension: BiasDimension,
        note: Option<String>,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Annotated { text, .. } => text,
        }
    }
}

pub fn split_segments(content: &str, spans: &[Highlight]) -> Vec<Segment> {
    if spans.is_empty() {
        if content.is_empty() {
            return Vec::new();
        }
        return vec![Segment::Plain {
            text: content.to_string(),
        }];
    }

    // Char-offset to byte-offset table; the extra entry maps the
    // one-past-end offset to content.len().
    let mut boundaries: Vec<usize> = content.char_indices().map(|(i, _)| i).collect();
    boundaries.push(content.len());
    let byte_at = |char_offset: usize| boundaries[char_offset.min(boundaries.len() - 1)];

    let mut sorted: Vec<&Highlight> = spans.iter().collect();
    // Stable sort: spans sharing a start offset keep their arrival order.
    sorted.sort_by_key(|span| span.start);

    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for span in sorted {
        let start = span.start.max(cursor);
        if span.end <= start {
            // Either an inverted span or one fully swallowed by the cursor.
            continue;
        }

        if start > cursor {
            push_plain(&mut segments, &content[byte_at(cursor)..byte_at(start)]);
        }

        let text = &content[byte_at(start)..byte_at(span.end)];
        if !text.is_empty() {
            segments.push(Segment::Annotated {
                text: text.to_string(),
                dimension: span.dimension,
                note: span.note.clone(),
            });
        }

        cursor = span.end;
    }

    push_plain(&mut segments, &content[byte_at(cursor)..]);

    segments
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Plain {
            text: text.to_string(),
        });
    }
}
