use crate::models::{Stats, Task};
use crate::render::{self, StatSlot};
use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use std::collections::BTreeMap;

pub const TOAST_TTL_SECS: i64 = 5;
pub const EXPORT_FILENAME: &str = "processed-tasks.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    #[serde(skip)]
    pub created_at: DateTime<Local>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.created_at >= Duration::seconds(TOAST_TTL_SECS)
    }
}

/// A file handed to the browser as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn csv(bytes: Vec<u8>) -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
            content_type: "text/csv",
            bytes,
        }
    }
}

/// Everything the page shows. Derived from client state by the controller.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub input: String,
    pub task_count_label: String,
    pub tasks_html: String,
    pub stats: BTreeMap<StatSlot, String>,
    pub last_updated: String,
    pub loading: bool,
    pub show_skeleton: bool,
    pub process_enabled: bool,
    pub export_enabled: bool,
    pub clear_enabled: bool,
    pub toasts: Vec<Toast>,
}

impl Default for ViewState {
    fn default() -> Self {
        let mut view = Self {
            input: String::new(),
            task_count_label: crate::input::count_label(0),
            tasks_html: String::new(),
            stats: BTreeMap::new(),
            last_updated: String::new(),
            loading: false,
            show_skeleton: false,
            process_enabled: true,
            export_enabled: false,
            clear_enabled: false,
            toasts: Vec::new(),
        };
        view.render_tasks(&[]);
        view.render_stats(&Stats::default());
        view
    }
}

impl ViewState {
    pub fn render_tasks(&mut self, tasks: &[Task]) {
        self.tasks_html = render::render_tasks(tasks);
    }

    /// Task list markup for the page. Skeleton blocks replace it only while
    /// loading and only when the skeleton has been switched on.
    pub fn task_list_html(&self) -> String {
        if self.show_skeleton && self.loading {
            render::render_loading_tasks()
        } else {
            self.tasks_html.clone()
        }
    }

    pub fn render_stats(&mut self, stats: &Stats) {
        for slot in StatSlot::ALL {
            self.stats.insert(slot, slot.value(stats));
        }
    }

    pub fn stat(&self, slot: StatSlot) -> &str {
        self.stats.get(&slot).map(String::as_str).unwrap_or_default()
    }

    pub fn update_button_states(&mut self, has_tasks: bool) {
        self.export_enabled = has_tasks;
        self.clear_enabled = has_tasks;
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
        self.process_enabled = false;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
        self.process_enabled = true;
    }

    pub fn push_toast(&mut self, kind: ToastKind, title: &str, message: &str) {
        self.toasts.push(Toast {
            title: title.to_string(),
            message: message.to_string(),
            kind,
            created_at: Local::now(),
        });
    }

    pub fn prune_toasts(&mut self, now: DateTime<Local>) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    pub fn mark_updated(&mut self, at: DateTime<Local>) {
        self.last_updated = format!("Last updated: {}", at.format("%Y-%m-%d %H:%M:%S"));
    }
}
