use serde::{Deserialize, Serialize};

use super::{require, ContentValidationError, SettingsDocument, Validate};
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Done,
    #[default]
    Progress,
    Planned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapTask {
    pub id: String,
    pub name_en: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub order: i64,
}

impl RoadmapTask {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_en, &self.name_ru)
    }
}

/// Roadmap section header plus its tasks. Tasks are edited through the
/// dedicated task endpoints; the header through `PUT /roadmap`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapSettings {
    pub section_badge_en: String,
    pub section_badge_ru: String,
    pub section_title_en: String,
    pub section_title_ru: String,
    pub section_subtitle_en: String,
    pub section_subtitle_ru: String,
    pub tasks: Vec<RoadmapTask>,
}

impl RoadmapSettings {
    /// Share of tasks marked done, in whole percent.
    pub fn progress_percent(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Done)
            .count();
        ((done * 100) / self.tasks.len()) as u8
    }

    pub fn sorted_tasks(&self) -> Vec<&RoadmapTask> {
        let mut tasks: Vec<&RoadmapTask> = self.tasks.iter().collect();
        tasks.sort_by_key(|task| task.order);
        tasks
    }
}

impl SettingsDocument for RoadmapSettings {
    const NAME: &'static str = "roadmap";
    const PATH: &'static str = "/roadmap";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapTaskDraft {
    pub name_en: String,
    pub name_ru: String,
    pub status: TaskStatus,
    pub category: String,
    /// Appended after the last task when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoadmapTaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for RoadmapTaskDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("name_en", &self.name_en)?;
        require("name_ru", &self.name_ru)?;
        require("category", &self.category)
    }
}
