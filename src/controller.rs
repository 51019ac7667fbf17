use crate::api::TaskApi;
use crate::fence::{Endpoint, RequestFence};
use crate::input::{self, InputError};
use crate::models::{ProcessRequest, ProcessingOptions, Task};
use crate::view::{Download, ToastKind, ViewState};
use chrono::Local;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all tasks?";

/// Tasks as last returned by the server, plus the single-flight flag for
/// processing.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub tasks: Vec<Task>,
    pub is_processing: bool,
}

#[derive(Debug, Default)]
struct Session {
    options: ProcessingOptions,
    client: ClientState,
    view: ViewState,
}

impl Session {
    fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.view.render_tasks(&tasks);
        self.view.update_button_states(!tasks.is_empty());
        self.client.tasks = tasks;
    }

    fn set_input(&mut self, text: &str) -> usize {
        let count = input::count_tasks(text);
        self.view.input = text.to_string();
        self.view.task_count_label = input::count_label(count);
        count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Another process request was still outstanding.
    InFlight,
    Rejected(InputError),
    Processed(usize),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    Declined,
    Cleared,
    Failed(String),
}

/// Owns the client state and turns user actions into Task API calls.
pub struct Controller<A> {
    api: A,
    session: Mutex<Session>,
    fence: RequestFence,
}

impl<A> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: Mutex::new(Session::default()),
            fence: RequestFence::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // Never held across an await.
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current view with expired toasts dropped.
    pub fn view(&self) -> ViewState {
        let mut session = self.session();
        session.view.prune_toasts(Local::now());
        session.view.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.session().client.tasks.clone()
    }

    pub fn is_processing(&self) -> bool {
        self.session().client.is_processing
    }

    pub fn options(&self) -> ProcessingOptions {
        self.session().options
    }

    pub fn set_options(&self, options: ProcessingOptions) {
        self.session().options = options;
    }

    pub fn set_skeleton(&self, enabled: bool) {
        self.session().view.show_skeleton = enabled;
    }

    pub fn load_sample_tasks(&self) {
        self.session().set_input(&input::sample_input());
    }

    /// Stores the input text and refreshes the live count label.
    pub fn update_task_count(&self, text: &str) -> usize {
        self.session().set_input(text)
    }
}

struct ProcessingGuard<'a, A> {
    controller: &'a Controller<A>,
}

impl<A> Drop for ProcessingGuard<'_, A> {
    fn drop(&mut self) {
        let mut session = self.controller.session();
        session.client.is_processing = false;
        session.view.hide_loading();
    }
}

impl<A: TaskApi> Controller<A> {
    pub async fn process_tasks(&self) -> ProcessOutcome {
        let request = {
            let mut session = self.session();
            if session.client.is_processing {
                debug!("process request already in flight");
                return ProcessOutcome::InFlight;
            }

            let lines = input::task_lines(&session.view.input);
            if let Err(err) = input::validate(&lines) {
                session
                    .view
                    .push_toast(ToastKind::Error, err.title(), err.message());
                return ProcessOutcome::Rejected(err);
            }

            session.client.is_processing = true;
            session.view.show_loading();
            ProcessRequest::new(lines, session.options)
        };

        let outcome = {
            let _guard = ProcessingGuard { controller: self };
            match self.api.process_tasks(&request).await {
                Ok(list) => {
                    let count = list.tasks.len();
                    let mut session = self.session();
                    // Any task list still in flight predates this result.
                    self.fence.invalidate(Endpoint::Tasks);
                    session.replace_tasks(list.tasks);
                    session.view.mark_updated(Local::now());
                    session.view.push_toast(
                        ToastKind::Success,
                        "Tasks processed successfully",
                        "Your tasks have been analyzed and organized by AI.",
                    );
                    info!(submitted = request.raw_tasks.len(), returned = count, "tasks processed");
                    ProcessOutcome::Processed(count)
                }
                Err(err) => {
                    let message = err.to_string();
                    warn!("processing failed: {message}");
                    self.session()
                        .view
                        .push_toast(ToastKind::Error, "Processing failed", &message);
                    ProcessOutcome::Failed(message)
                }
            }
        };

        if matches!(outcome, ProcessOutcome::Processed(_)) {
            self.load_stats().await;
        }
        outcome
    }

    /// Background load; failures are logged only.
    pub async fn load_tasks(&self) {
        let ticket = self.fence.issue(Endpoint::Tasks);
        match self.api.list_tasks().await {
            Ok(list) => {
                let mut session = self.session();
                if !self.fence.is_current(ticket) {
                    debug!("discarding stale task list response");
                    return;
                }
                session.replace_tasks(list.tasks);
            }
            Err(err) => error!("failed to load tasks: {err}"),
        }
    }

    /// Background load; failures are logged only.
    pub async fn load_stats(&self) {
        let ticket = self.fence.issue(Endpoint::Stats);
        match self.api.stats().await {
            Ok(stats) => {
                let mut session = self.session();
                if !self.fence.is_current(ticket) {
                    debug!("discarding stale stats response");
                    return;
                }
                session.view.render_stats(&stats);
            }
            Err(err) => error!("failed to load stats: {err}"),
        }
    }

    pub async fn export_tasks(&self) -> Option<Download> {
        match self.api.export_csv().await {
            Ok(bytes) => {
                self.session().view.push_toast(
                    ToastKind::Success,
                    "Export successful",
                    "Tasks have been exported to CSV.",
                );
                Some(Download::csv(bytes))
            }
            Err(err) => {
                warn!("export failed: {err}");
                self.session().view.push_toast(
                    ToastKind::Error,
                    "Export failed",
                    "Failed to export tasks to CSV.",
                );
                None
            }
        }
    }

    /// Clears server-side tasks once `confirm` accepts [`CLEAR_PROMPT`].
    pub async fn clear_tasks(&self, confirm: impl FnOnce(&str) -> bool) -> ClearOutcome {
        if !confirm(CLEAR_PROMPT) {
            return ClearOutcome::Declined;
        }

        match self.api.clear_tasks().await {
            Ok(()) => {
                {
                    let mut session = self.session();
                    self.fence.invalidate(Endpoint::Tasks);
                    session.replace_tasks(Vec::new());
                    session.view.last_updated.clear();
                    session.view.push_toast(
                        ToastKind::Success,
                        "Tasks cleared",
                        "All tasks have been removed.",
                    );
                }
                info!("tasks cleared");
                self.load_stats().await;
                ClearOutcome::Cleared
            }
            Err(err) => {
                let message = err.to_string();
                warn!("clear failed: {message}");
                self.session()
                    .view
                    .push_toast(ToastKind::Error, "Clear failed", &message);
                ClearOutcome::Failed(message)
            }
        }
    }

    /// Initial task and stats loads, run concurrently.
    pub async fn refresh(&self) {
        tokio::join!(self.load_tasks(), self.load_stats());
    }
}
