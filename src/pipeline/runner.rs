//! Background pipeline runs
//!
//! The interactive mode must keep drawing while files are parsed, so each
//! run happens on its own thread and reports back over a channel. The UI
//! polls once per frame.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use super::{Report, Settings, run_discovered};
use crate::error::StatsError;
use crate::input::discover;

/// Handle to one in-flight run
pub struct PipelineRunner {
    rx: Option<Receiver<Report>>,
}

impl PipelineRunner {
    /// Discover and run `paths` on a background thread
    pub fn spawn(paths: Vec<PathBuf>, settings: Settings) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let report = run_discovered(discover(&paths), &settings);
            let _ = tx.send(report);
        });

        Self { rx: Some(rx) }
    }

    /// Non-blocking check for the finished report.
    ///
    /// Returns `Some` exactly once per run.
    pub fn poll(&mut self) -> Option<Report> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(report) => {
                self.rx = None;
                Some(report)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                log::error!("Pipeline thread exited without a report");
                Some(Report::failed(
                    Vec::new(),
                    0,
                    StatsError::WorkerPool("pipeline thread disconnected".to_string()),
                ))
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.rx.is_some()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
