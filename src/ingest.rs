// src/ingest.rs
//! Per-file ingestion pipeline
//!
//! One sequential pass over a file's lines: the scanner classifies,
//! every detail line goes through the registration gate, and each
//! attempted line yields one `LineOutcome` in input order. Malformed
//! lines are recorded and skipped; store/crypto failures abort the
//! whole file with line + batch context attached.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::crypto::CardCodec;
use crate::error::{CoreError, Result};
use crate::parser::{BatchScanner, LineEvent};
use crate::register::register_if_absent;

/// Cooperative cancellation handle for one pipeline run.
///
/// Cancelling stops the pipeline before its next registration call;
/// rows already committed stay committed.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One parse+registration result for an attempted detail line
#[derive(Debug, Clone, Serialize)]
pub struct LineOutcome {
    pub line_number: u32,
    pub sequence_number: Option<i64>,
    #[serde(flatten)]
    pub status: LineStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineStatus {
    Registered {
        card_id: i64,
        already_registered: bool,
        message: String,
    },
    Skipped {
        reason: String,
    },
}

/// Aggregated result of processing one file
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
    pub lines_read: u32,
    pub registered: usize,
    pub duplicates: usize,
    pub skipped: usize,
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Process one batch file from disk
pub fn process_file<P: AsRef<Path>>(
    conn: &Connection,
    codec: &CardCodec,
    path: P,
    cancel: &CancelFlag,
) -> Result<BatchReport> {
    info!(file = %path.as_ref().display(), "starting file processing");
    let reader = BufReader::new(File::open(path.as_ref())?);
    let report = process_reader(conn, codec, reader, cancel)?;
    info!(
        file = %path.as_ref().display(),
        registered = report.registered,
        duplicates = report.duplicates,
        skipped = report.skipped,
        cancelled = report.cancelled,
        "file processing completed"
    );
    Ok(report)
}

/// Process a stream of lines from any buffered reader
pub fn process_reader<R: BufRead>(
    conn: &Connection,
    codec: &CardCodec,
    reader: R,
    cancel: &CancelFlag,
) -> Result<BatchReport> {
    process_inner(conn, codec, reader.lines(), cancel)
}

/// Process lines already held in memory; outcomes keep input order
pub fn process_lines<I, S>(
    conn: &Connection,
    codec: &CardCodec,
    lines: I,
) -> Result<Vec<LineOutcome>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter().map(|s| Ok(s.as_ref().to_string()));
    let report = process_inner(conn, codec, lines, &CancelFlag::new())?;
    Ok(report.outcomes)
}

fn process_inner<I>(
    conn: &Connection,
    codec: &CardCodec,
    lines: I,
    cancel: &CancelFlag,
) -> Result<BatchReport>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let started_at = Utc::now();
    let mut scanner = BatchScanner::new();
    let mut outcomes = Vec::new();
    let (mut registered, mut duplicates, mut skipped) = (0usize, 0usize, 0usize);
    let mut cancelled = false;

    for line in lines {
        if cancel.is_cancelled() {
            warn!(line = scanner.line_number(), "ingestion cancelled");
            cancelled = true;
            break;
        }

        let line = line?;
        match scanner.scan_line(&line) {
            None => {}
            Some(LineEvent::Malformed(bad)) => {
                skipped += 1;
                outcomes.push(LineOutcome {
                    line_number: bad.line_number,
                    sequence_number: None,
                    status: LineStatus::Skipped { reason: bad.reason },
                });
            }
            Some(LineEvent::Detail(detail)) => {
                let registration = register_if_absent(
                    conn,
                    codec,
                    &detail.pan,
                    detail.batch_number.as_deref(),
                    detail.sequence_number,
                )
                .map_err(|source| {
                    error!(
                        line = detail.line_number,
                        batch = ?detail.batch_number,
                        "registration failed, aborting file"
                    );
                    CoreError::Ingest {
                        line_number: detail.line_number,
                        batch_number: detail.batch_number.clone(),
                        source: Box::new(source),
                    }
                })?;

                if registration.already_registered {
                    duplicates += 1;
                } else {
                    registered += 1;
                }
                outcomes.push(LineOutcome {
                    line_number: detail.line_number,
                    sequence_number: detail.sequence_number,
                    status: LineStatus::Registered {
                        card_id: registration.card_id,
                        already_registered: registration.already_registered,
                        message: registration.message,
                    },
                });
            }
        }
    }

    Ok(BatchReport {
        outcomes,
        lines_read: scanner.line_number(),
        registered,
        duplicates,
        skipped,
        cancelled,
        started_at,
        finished_at: Utc::now(),
    })
}
