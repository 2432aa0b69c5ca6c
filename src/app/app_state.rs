use std::path::PathBuf;

use crate::input::InputState;
use crate::notification::{NotificationState, NotificationType};
use crate::pipeline::{self, PipelineRunner, Report, Settings};
use crate::scroll::ScrollState;
use crate::stats::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FolderInput,
    Results,
}

pub struct App {
    pub input: InputState,
    pub focus: Focus,
    pub settings: Settings,
    pub precision: usize,
    pub sort_key: SortKey,
    pub runner: Option<PipelineRunner>,
    /// Outcome of the last finished run
    pub report: Option<Report>,
    pub results_scroll: ScrollState,
    pub notification: NotificationState,
    pub should_quit: bool,
}

impl App {
    pub fn new(folder: &str, settings: Settings, precision: usize, sort_key: SortKey) -> Self {
        Self {
            input: InputState::new(folder),
            focus: Focus::FolderInput,
            settings,
            precision,
            sort_key,
            runner: None,
            report: None,
            results_scroll: ScrollState::new(),
            notification: NotificationState::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_calculating(&self) -> bool {
        self.runner.as_ref().is_some_and(|r| r.is_running())
    }

    /// Start a run over the folder in the input field.
    ///
    /// Ignored while a run is in flight. An empty field fails immediately
    /// without touching the background thread.
    pub fn calculate(&mut self) {
        if self.is_calculating() {
            log::debug!("Calculation already running, ignoring request");
            return;
        }

        let folder = self.input.folder().to_string();
        if folder.is_empty() {
            self.apply_report(pipeline::run(&[], &self.settings));
            return;
        }

        log::info!("Calculating stats for {}", folder);
        self.runner = Some(PipelineRunner::spawn(
            vec![PathBuf::from(folder)],
            self.settings.clone(),
        ));
    }

    /// Pick up a finished run, if any
    pub fn poll_runner(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };
        if let Some(report) = runner.poll() {
            self.runner = None;
            self.apply_report(report);
        }
    }

    /// Show a finished run: sort the table, reset scrolling and notify
    pub fn apply_report(&mut self, mut report: Report) {
        if let Ok(table) = report.outcome.as_mut() {
            table.sort_by(self.sort_key);
        }

        match &report.outcome {
            Ok(table) => {
                self.notification.show(&format!(
                    "{} players from {} of {} files",
                    table.len(),
                    report.sources_used,
                    report.sources_total
                ));
                self.focus = Focus::Results;
            }
            Err(e) => self.notification.show_error(&e.to_string()),
        }

        self.results_scroll.reset();
        self.report = Some(report);
    }

    /// Error notifications stay until the user reacts to them
    pub(super) fn dismiss_error_notification(&mut self) {
        if self
            .notification
            .current()
            .is_some_and(|n| n.notification_type == NotificationType::Error)
        {
            self.notification.dismiss();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
