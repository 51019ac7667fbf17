use crate::controller::{ClearOutcome, ProcessOutcome};
use crate::errors::AppError;
use crate::models::{PriorityScale, ProcessingOptions, Task};
use crate::state::AppState;
use crate::ui::{render_confirm, render_index};
use crate::view::ViewState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let controller = &state.controller;
    Html(render_index(&controller.view(), controller.options()))
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub tasks: Vec<Task>,
    pub is_processing: bool,
    pub view: ViewState,
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let controller = &state.controller;
    Json(StateResponse {
        tasks: controller.tasks(),
        is_processing: controller.is_processing(),
        view: controller.view(),
    })
}

#[derive(Debug, Deserialize)]
pub struct CountRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
    pub label: String,
}

pub async fn count(
    State(state): State<AppState>,
    Json(payload): Json<CountRequest>,
) -> Json<CountResponse> {
    let count = state.controller.update_task_count(&payload.text);
    Json(CountResponse {
        count,
        label: crate::input::count_label(count),
    })
}

pub async fn load_sample(State(state): State<AppState>) -> Redirect {
    state.controller.load_sample_tasks();
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct ProcessForm {
    pub input: String,
    pub priority_scale: Option<String>,
    pub max_tags: Option<String>,
    /// Checkbox: present when ticked.
    pub include_time_estimates: Option<String>,
}

impl ProcessForm {
    fn options(&self) -> Result<ProcessingOptions, AppError> {
        let defaults = ProcessingOptions::default();

        let priority_scale = match self.priority_scale.as_deref() {
            None => defaults.priority_scale,
            Some(value) => PriorityScale::parse(value)
                .ok_or_else(|| AppError::bad_request(format!("unknown priority scale '{value}'")))?,
        };

        let max_tags = match self.max_tags.as_deref() {
            None => defaults.max_tags,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if (1..=5).contains(&n) => n,
                _ => return Err(AppError::bad_request("max_tags must be between 1 and 5")),
            },
        };

        Ok(ProcessingOptions {
            priority_scale,
            max_tags,
            include_time_estimates: self.include_time_estimates.is_some(),
        })
    }
}

pub async fn process(
    State(state): State<AppState>,
    Form(form): Form<ProcessForm>,
) -> Result<Redirect, AppError> {
    let options = form.options()?;
    let controller = &state.controller;
    controller.update_task_count(&form.input);
    controller.set_options(options);

    match controller.process_tasks().await {
        ProcessOutcome::Processed(count) => info!(count, "process request completed"),
        outcome => debug!(?outcome, "process request not applied"),
    }
    Ok(Redirect::to("/"))
}

pub async fn export(State(state): State<AppState>) -> Response {
    match state.controller.export_tasks().await {
        Some(download) => {
            let disposition = format!("attachment; filename=\"{}\"", download.filename);
            (
                [
                    (header::CONTENT_TYPE, download.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                download.bytes,
            )
                .into_response()
        }
        None => Redirect::to("/").into_response(),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ClearForm {
    pub confirm: Option<String>,
}

pub async fn clear(State(state): State<AppState>, Form(form): Form<ClearForm>) -> Response {
    let confirmed = form.confirm.as_deref() == Some("yes");
    let mut prompt = String::new();
    let outcome = state
        .controller
        .clear_tasks(|question| {
            prompt = question.to_string();
            confirmed
        })
        .await;

    match outcome {
        ClearOutcome::Declined => Html(render_confirm(&prompt)).into_response(),
        ClearOutcome::Cleared | ClearOutcome::Failed(_) => Redirect::to("/").into_response(),
    }
}

pub async fn reload(State(state): State<AppState>) -> Redirect {
    state.controller.refresh().await;
    Redirect::to("/")
}
