use serde::{Deserialize, Serialize};

/// A structured task as produced by the Task API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub raw_text: String,
    pub summary: String,
    pub priority: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub time_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub high_priority: u64,
    pub medium_priority: u64,
    pub low_priority: u64,
    pub total_estimated_time: String,
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub most_common_tags: Vec<TagCount>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            high_priority: 0,
            medium_priority: 0,
            low_priority: 0,
            total_estimated_time: "0h".to_string(),
            total_tasks: 0,
            most_common_tags: Vec::new(),
        }
    }
}

/// Priority scale forwarded to the server; never interpreted locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityScale {
    #[default]
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "low-med-high")]
    LowMedHigh,
}

impl PriorityScale {
    pub const ALL: [PriorityScale; 3] = [Self::OneToFive, Self::OneToThree, Self::LowMedHigh];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneToFive => "1-5",
            Self::OneToThree => "1-3",
            Self::LowMedHigh => "low-med-high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.as_str() == value.trim())
    }
}

/// Current values of the processing form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub priority_scale: PriorityScale,
    pub max_tags: u32,
    pub include_time_estimates: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            priority_scale: PriorityScale::default(),
            max_tags: 2,
            include_time_estimates: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub raw_tasks: Vec<String>,
    pub priority_scale: PriorityScale,
    pub max_tags: u32,
    pub include_time_estimates: bool,
}

impl ProcessRequest {
    pub fn new(raw_tasks: Vec<String>, options: ProcessingOptions) -> Self {
        Self {
            raw_tasks,
            priority_scale: options.priority_scale,
            max_tags: options.max_tags,
            include_time_estimates: options.include_time_estimates,
        }
    }
}

/// Body the Task API attaches to any non-2xx response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
