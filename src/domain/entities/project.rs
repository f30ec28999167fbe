use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    constants::DESCRIPTION_LIMIT,
    utils::{image_url::normalize_image_url, project_url::project_detail_path, truncate::truncate_description},
};

/// One portfolio entry as stored. Read-only from this service's perspective;
/// creation and edits happen through the external admin surface.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub project_date: Option<String>,
    pub featured: bool,
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

impl Project {
    /// Date used for the date-based sort orders. `project_date` is free text,
    /// so unparsable or missing values sort as earliest.
    pub fn sort_date(&self) -> NaiveDate {
        self.project_date
            .as_deref()
            .and_then(parse_project_date)
            .unwrap_or(NaiveDate::MIN)
    }
}

fn parse_project_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    // Bare year, e.g. "2024"
    raw.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

/// What the work page shows for one project.
#[derive(Debug, Serialize, PartialEq)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub featured: bool,
    pub image_url: String,
    pub project_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub detail_url: String,
    pub github_url: Option<String>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        ProjectCard {
            id: project.id,
            title: project.title.clone(),
            featured: project.featured,
            image_url: normalize_image_url(project.image_url.as_deref()),
            project_date: project.project_date.clone(),
            description: truncate_description(&project.description, DESCRIPTION_LIMIT),
            technologies: project.technologies.clone(),
            detail_url: project_detail_path(project),
            github_url: project.github_url.clone(),
        }
    }
}
