// src/parser.rs
//! Fixed-width batch line scanner
//!
//! Classifies one line at a time as header, detail, or footer and
//! extracts fields at fixed byte offsets (see `consts`), with a
//! whitespace-tokenizer fallback for detail lines too short for the
//! fixed layout. The scanner carries the running batch number across
//! lines; everything else is per-line.
//!
//! Offsets address the original, untrimmed line — trimming never shifts
//! them. A field whose offsets fall outside the line (or off a UTF-8
//! char boundary) reads as an empty field.

use tracing::{debug, warn};

use crate::aliases::Pan;
use crate::consts::{
    DETAIL_CARD_END, DETAIL_CARD_MAX_END, DETAIL_CARD_START, DETAIL_FIXED_MIN_LEN, DETAIL_MARKER,
    DETAIL_SEQ_END, DETAIL_SEQ_START, FOOTER_BATCH_END, FOOTER_MIN_LEN, FOOTER_PREFIX,
    HEADER_BATCH_END, HEADER_BATCH_START, HEADER_MIN_LEN,
};

/// Per-file scanning state: running batch number + current line number
#[derive(Default)]
pub struct BatchScanner {
    batch_number: Option<String>,
    line_number: u32,
}

/// What one scanned line produced. Header, footer, and blank lines are
/// consumed silently (`scan_line` returns `None` for them).
pub enum LineEvent {
    Detail(DetailLine),
    Malformed(MalformedLine),
}

/// A detail line ready for registration
pub struct DetailLine {
    pub line_number: u32,
    pub pan: Pan,
    pub batch_number: Option<String>,
    pub sequence_number: Option<i64>,
}

/// A detail line whose card field failed validation — recorded, never fatal
#[derive(Debug, Clone)]
pub struct MalformedLine {
    pub line_number: u32,
    pub reason: String,
}

impl BatchScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch number seen so far, carried forward until overridden
    pub fn batch_number(&self) -> Option<&str> {
        self.batch_number.as_deref()
    }

    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Classify and extract one raw line. First match wins:
    /// blank → header → detail → footer.
    pub fn scan_line(&mut self, raw: &str) -> Option<LineEvent> {
        self.line_number += 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return None;
        }

        // Header: long metadata line that is neither detail nor footer
        if raw.len() >= HEADER_MIN_LEN
            && !trimmed.starts_with(DETAIL_MARKER)
            && !trimmed.starts_with(FOOTER_PREFIX)
        {
            let batch = field(raw, HEADER_BATCH_START, HEADER_BATCH_END);
            if !batch.is_empty() {
                debug!(line = self.line_number, batch, "batch number from header");
                self.batch_number = Some(batch.to_string());
            }
            return None;
        }

        if trimmed.starts_with(DETAIL_MARKER) {
            return Some(self.scan_detail(raw, trimmed));
        }

        if trimmed.starts_with(FOOTER_PREFIX) && raw.len() >= FOOTER_MIN_LEN {
            let batch = field(raw, 0, FOOTER_BATCH_END);
            if !batch.is_empty() {
                debug!(line = self.line_number, batch, "batch number from footer");
                self.batch_number = Some(batch.to_string());
            }
        }

        // Anything else is noise between records
        None
    }

    fn scan_detail(&mut self, raw: &str, trimmed: &str) -> LineEvent {
        let (sequence_field, card_field) = if raw.len() >= DETAIL_FIXED_MIN_LEN {
            split_fixed(raw)
        } else {
            split_flexible(trimmed)
        };

        if card_field.is_empty() || !card_field.bytes().all(|b| b.is_ascii_digit()) {
            warn!(
                line = self.line_number,
                "detail line skipped: card field is empty or not all digits"
            );
            return LineEvent::Malformed(MalformedLine {
                line_number: self.line_number,
                reason: "card number field is empty or not all digits".into(),
            });
        }

        LineEvent::Detail(DetailLine {
            line_number: self.line_number,
            pan: Pan::new(card_field.to_string()),
            batch_number: self.batch_number.clone(),
            sequence_number: parse_sequence(sequence_field),
        })
    }
}

/// Fixed-offset branch: sequence at [1,7); card from byte 7 to the
/// nominal end at 26, extended to the first space at or after byte 7
/// (capped at 30) when the line runs long.
fn split_fixed(raw: &str) -> (&str, &str) {
    let sequence = field(raw, DETAIL_SEQ_START, DETAIL_SEQ_END);

    let mut card_end = raw.len().min(DETAIL_CARD_END);
    if raw.len() > DETAIL_CARD_END {
        card_end = match raw.bytes().skip(DETAIL_CARD_START).position(|b| b == b' ') {
            Some(offset) if DETAIL_CARD_START + offset <= DETAIL_CARD_MAX_END => {
                DETAIL_CARD_START + offset
            }
            _ => raw.len().min(DETAIL_CARD_MAX_END),
        };
    }

    (sequence, field(raw, DETAIL_CARD_START, card_end))
}

/// Flexible fallback for detail lines shorter than the fixed layout:
/// strip the leading marker, split the rest on whitespace runs. Two or
/// more tokens → sequence + card; exactly one token → card only.
fn split_flexible(trimmed: &str) -> (&str, &str) {
    let without_marker = trimmed[1..].trim();
    let mut parts = without_marker.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(_)) => (first, without_marker[first.len()..].trim()),
        (Some(only), None) => ("", only),
        (None, _) => ("", ""),
    }
}

/// Sequence tokens keep only their digits; an empty or unparsable
/// remainder is a null sequence, not an error.
fn parse_sequence(token: &str) -> Option<i64> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Byte-offset field read on the untrimmed line, trimmed of surrounding
/// whitespace. Out-of-range or non-char-boundary offsets read as empty.
fn field(raw: &str, start: usize, end: usize) -> &str {
    let end = end.min(raw.len());
    if start >= end {
        return "";
    }
    raw.get(start..end).unwrap_or("").trim()
}
