//! JSON response shapes returned by `deck` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, Project, Task};
use crate::progress::ProjectProgress;
use crate::sections::{Section, Sections};
use crate::stats::TaskStats;

/// Number of tasks in each display bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionCounts {
    pub overdue: usize,
    pub today: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub other: usize,
}

impl From<&Sections<'_>> for SectionCounts {
    fn from(sections: &Sections<'_>) -> Self {
        Self {
            overdue: sections.get(Section::Overdue).len(),
            today: sections.get(Section::Today).len(),
            upcoming: sections.get(Section::Upcoming).len(),
            completed: sections.get(Section::Completed).len(),
            other: sections.get(Section::Other).len(),
        }
    }
}

/// Response from `deck dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardSummary {
    pub greeting_name: String,
    pub stats: TaskStats,
    pub sections: SectionCounts,
    /// Where the task collection came from (`remote`, `cache`, `empty`).
    pub source: String,
}

/// Response from `deck project get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectDetail {
    pub project: Project,
    pub progress: ProjectProgress,
    pub tasks: Vec<Task>,
}

/// One row of `deck category list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub task_count: usize,
}

/// Response from any create command, carrying the optimistic-save notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Created<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
