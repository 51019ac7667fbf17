#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use task_tamer::models::{ProcessRequest, Stats, Task, TaskList};

pub const FAILING_MARKER: &str = "explode";
pub const FAILURE_MESSAGE: &str = "Failed to process tasks with Gemini: quota exceeded";

/// In-memory stand-in for the Task API server.
#[derive(Clone, Default)]
pub struct StubApi {
    pub tasks: Arc<Mutex<Vec<Task>>>,
    pub requests: Arc<Mutex<Vec<ProcessRequest>>>,
    pub list_delay: Arc<Mutex<Option<Duration>>>,
}

impl StubApi {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ProcessRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/tasks", get(list).delete(clear))
            .route("/api/tasks/process", post(process))
            .route("/api/tasks/stats", get(stats))
            .route("/api/tasks/export", get(export))
            .with_state(self.clone())
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn list(State(stub): State<StubApi>) -> Json<TaskList> {
    let delay = *stub.list_delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    let tasks = stub.tasks.lock().unwrap().clone();
    Json(TaskList { tasks })
}

async fn process(State(stub): State<StubApi>, Json(request): Json<ProcessRequest>) -> Response {
    stub.requests.lock().unwrap().push(request.clone());

    if request.raw_tasks.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No tasks provided");
    }
    if request.raw_tasks.len() > 20 {
        return error(StatusCode::BAD_REQUEST, "Too many tasks (max 20)");
    }
    if request.raw_tasks.iter().any(|line| line.contains(FAILING_MARKER)) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE);
    }

    let tasks: Vec<Task> = request
        .raw_tasks
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let urgent = line.to_lowercase().contains("urgent");
            let mut tags = vec![if urgent { "urgent" } else { "general" }.to_string(), "stub".to_string()];
            tags.truncate(request.max_tags as usize);
            Task {
                id: Some(format!("task-{i}")),
                raw_text: line.clone(),
                summary: line.trim().chars().take(50).collect(),
                priority: if urgent { 5 } else { 2 },
                tags,
                time_estimate: request
                    .include_time_estimates
                    .then(|| "30 minutes".to_string()),
                created_at: Some("2026-01-05T10:00:00".to_string()),
            }
        })
        .collect();

    *stub.tasks.lock().unwrap() = tasks.clone();
    Json(TaskList { tasks }).into_response()
}

async fn stats(State(stub): State<StubApi>) -> Json<Stats> {
    let tasks = stub.tasks.lock().unwrap();
    let count = |pred: fn(i64) -> bool| tasks.iter().filter(|t| pred(t.priority)).count() as u64;
    let minutes: u64 = tasks.iter().filter(|t| t.time_estimate.is_some()).count() as u64 * 30;
    Json(Stats {
        high_priority: count(|p| p >= 4),
        medium_priority: count(|p| p == 3),
        low_priority: count(|p| p <= 2),
        total_estimated_time: format!("{}h", (minutes + 30) / 60),
        total_tasks: tasks.len() as u64,
        most_common_tags: Vec::new(),
    })
}

async fn export(State(stub): State<StubApi>) -> Response {
    let tasks = stub.tasks.lock().unwrap().clone();
    let mut csv = String::from("ID,Summary,Original Text,Priority,Tags,Time Estimate,Created At\n");
    for task in &tasks {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            task.id.clone().unwrap_or_default(),
            task.summary,
            task.raw_text,
            task.priority,
            task.tags.join("; "),
            task.time_estimate.clone().unwrap_or_default(),
            task.created_at.clone().unwrap_or_default(),
        ));
    }
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"processed-tasks.csv\""),
        ],
        csv,
    )
        .into_response()
}

async fn clear(State(stub): State<StubApi>) -> Json<serde_json::Value> {
    stub.tasks.lock().unwrap().clear();
    Json(serde_json::json!({ "message": "All tasks cleared successfully" }))
}

/// Serves the stub on the current runtime.
pub async fn spawn_stub() -> (String, StubApi) {
    let stub = StubApi::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().unwrap();
    let app = stub.router();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), stub)
}

/// Serves the stub on its own thread so it outlives any single test runtime.
pub fn spawn_stub_thread() -> (String, StubApi) {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("stub runtime");
        runtime.block_on(async move {
            let (base_url, stub) = spawn_stub().await;
            tx.send((base_url, stub)).unwrap();
            std::future::pending::<()>().await;
        });
    });
    rx.recv().expect("stub did not start")
}
