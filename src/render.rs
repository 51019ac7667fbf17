//! Pure state to HTML fragment rendering.

use crate::models::{Stats, Task};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn of(priority: i64) -> Self {
        match priority {
            p if p >= 4 => Self::High,
            3 => Self::Medium,
            _ => Self::Low,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::High => "priority-high",
            Self::Medium => "priority-medium",
            Self::Low => "priority-low",
        }
    }
}

/// Stat positions on the page, each bound to its own element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatSlot {
    HighPriority,
    MediumPriority,
    LowPriority,
    TotalEstimatedTime,
}

impl StatSlot {
    pub const ALL: [StatSlot; 4] = [
        Self::HighPriority,
        Self::MediumPriority,
        Self::LowPriority,
        Self::TotalEstimatedTime,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Self::HighPriority => "stat-high-priority",
            Self::MediumPriority => "stat-medium-priority",
            Self::LowPriority => "stat-low-priority",
            Self::TotalEstimatedTime => "stat-total-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighPriority => "High priority",
            Self::MediumPriority => "Medium priority",
            Self::LowPriority => "Low priority",
            Self::TotalEstimatedTime => "Estimated time",
        }
    }

    pub fn value(self, stats: &Stats) -> String {
        match self {
            Self::HighPriority => stats.high_priority.to_string(),
            Self::MediumPriority => stats.medium_priority.to_string(),
            Self::LowPriority => stats.low_priority.to_string(),
            Self::TotalEstimatedTime => stats.total_estimated_time.clone(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn priority_badge(priority: i64) -> String {
    format!(
        r#"<span class="badge {}">Priority {priority}</span>"#,
        PriorityTier::of(priority).class()
    )
}

pub fn tag_badge(tag: &str) -> String {
    format!(r#"<span class="badge tag">#{}</span>"#, escape_html(tag))
}

pub const EMPTY_STATE_HTML: &str = r#"<div class="empty-state">
  <div class="empty-icon">&#10024;</div>
  <h3>No processed tasks yet</h3>
  <p>Add some tasks above and click "Process Tasks" to get started.</p>
</div>"#;

pub fn render_task(task: &Task) -> String {
    let mut badges = priority_badge(task.priority);
    for tag in &task.tags {
        badges.push_str(&tag_badge(tag));
    }

    let mut html = format!(
        r#"<div class="task-item">
  <div class="task-header"><div class="task-badges">{badges}</div></div>
  <div class="task-title">{}</div>
  <div class="task-original">Original: "{}"</div>
"#,
        escape_html(&task.summary),
        escape_html(&task.raw_text),
    );
    if let Some(estimate) = &task.time_estimate {
        html.push_str(&format!(
            "  <div class=\"task-time\">Estimated time: {}</div>\n",
            escape_html(estimate)
        ));
    }
    html.push_str("</div>");
    html
}

pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_STATE_HTML.to_string();
    }
    tasks.iter().map(render_task).collect::<Vec<_>>().join("\n")
}

/// One element per slot, looked up by key rather than position.
pub fn render_stats(value_of: impl Fn(StatSlot) -> String) -> String {
    StatSlot::ALL
        .iter()
        .map(|&slot| {
            format!(
                r#"<div class="stat-item" id="{}"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
                slot.element_id(),
                escape_html(&value_of(slot)),
                slot.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shimmer placeholders for a loading task list.
pub fn render_loading_tasks() -> String {
    const SKELETON: &str = r#"<div class="loading-skeleton">
  <div class="skeleton-badges">
    <div class="skeleton-badge" style="width: 4rem;"></div>
    <div class="skeleton-badge" style="width: 3rem;"></div>
  </div>
  <div class="skeleton-title"></div>
  <div class="skeleton-text"></div>
</div>"#;
    [SKELETON; 3].join("\n")
}
