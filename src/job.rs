// src/job.rs
//! Background ingest jobs
//!
//! One worker thread per file. The worker owns its store connection
//! (pipeline invocations share nothing but the store itself); the
//! caller keeps a cancellation flag and can await the result with or
//! without a timeout. Cancellation stops new registrations — rows
//! already committed stay committed.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rusqlite::Connection;
use tracing::warn;

use crate::crypto::CardCodec;
use crate::error::{CoreError, Result};
use crate::ingest::{process_file, BatchReport, CancelFlag};

pub struct IngestJob {
    cancel: CancelFlag,
    rx: Receiver<Result<BatchReport>>,
    worker: Option<JoinHandle<()>>,
}

impl IngestJob {
    /// Spawn a worker that processes `path` against `conn`.
    ///
    /// The connection moves into the worker; open a fresh one per job
    /// (see `db::open_card_db`).
    pub fn spawn(conn: Connection, codec: CardCodec, path: PathBuf) -> Self {
        let cancel = CancelFlag::new();
        let flag = cancel.clone();
        let (tx, rx) = mpsc::channel();

        let worker = thread::spawn(move || {
            let result = process_file(&conn, &codec, &path, &flag);
            if tx.send(result).is_err() {
                warn!(file = %path.display(), "ingest result dropped: caller went away");
            }
        });

        Self {
            cancel,
            rx,
            worker: Some(worker),
        }
    }

    /// Stop the worker before its next registration call
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Clone of the job's cancellation flag, usable after `wait`
    /// consumes the job
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Block until the worker finishes
    pub fn wait(mut self) -> Result<BatchReport> {
        let result = self.rx.recv().map_err(|_| CoreError::WorkerGone)?;
        self.join_worker();
        result
    }

    /// Wait up to `timeout`. On timeout the job is handed back so the
    /// caller can keep waiting, or cancel and then wait.
    pub fn wait_timeout(
        mut self,
        timeout: Duration,
    ) -> std::result::Result<Result<BatchReport>, IngestJob> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.join_worker();
                Ok(result)
            }
            Err(RecvTimeoutError::Timeout) => Err(self),
            Err(RecvTimeoutError::Disconnected) => Ok(Err(CoreError::WorkerGone)),
        }
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
