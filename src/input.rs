//! Raw task input as typed into the text field.

/// Most raw tasks accepted in one process request.
pub const MAX_TASKS: usize = 20;

pub const SAMPLE_TASKS: [&str; 8] = [
    "Fix the login bug that users reported yesterday urgent",
    "Meeting with client about new homepage design next week",
    "Update database schema for user profiles",
    "Review pull requests from frontend team before deployment",
    "Call Sarah about budget approval for Q4 marketing campaign",
    "Test mobile responsiveness on new product pages",
    "Documentation needs updating for API endpoints",
    "Backup server maintenance scheduled for weekend",
];

pub fn sample_input() -> String {
    SAMPLE_TASKS.join("\n")
}

/// Non-blank lines in input order, kept exactly as typed.
pub fn task_lines(input: &str) -> Vec<String> {
    input
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn count_tasks(input: &str) -> usize {
    input.split('\n').filter(|line| !line.trim().is_empty()).count()
}

pub fn count_label(count: usize) -> String {
    format!("{count} tasks detected")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooMany(usize),
}

impl InputError {
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "No tasks to process",
            Self::TooMany(_) => "Too many tasks",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "Please add some task descriptions first.",
            Self::TooMany(_) => "Please limit to 20 tasks or fewer.",
        }
    }
}

pub fn validate(lines: &[String]) -> Result<(), InputError> {
    match lines.len() {
        0 => Err(InputError::Empty),
        n if n > MAX_TASKS => Err(InputError::TooMany(n)),
        _ => Ok(()),
    }
}
