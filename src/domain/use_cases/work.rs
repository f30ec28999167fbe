use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::{
    constants::ALL_TECHNOLOGIES,
    entities::project::{Project, ProjectCard},
    repositories::project::ProjectRepository,
};

/// Sort orders offered on the work page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    Title,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(SortKey::DateDesc),
            "date-asc" => Ok(SortKey::DateAsc),
            "title" => Ok(SortKey::Title),
            _ => Err(()),
        }
    }
}

/// Defaults a "clear filters" action restores.
#[derive(Debug, Serialize, PartialEq)]
pub struct ResetDefaults {
    pub selected_tech: &'static str,
    pub sort_by: SortKey,
}

impl Default for ResetDefaults {
    fn default() -> Self {
        ResetDefaults {
            selected_tech: ALL_TECHNOLOGIES,
            sort_by: SortKey::default(),
        }
    }
}

/// Terminal display states of the listing. Neither is an error.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyState {
    NoneAvailable {
        message: &'static str,
    },
    NoMatch {
        message: &'static str,
        reset: ResetDefaults,
    },
}

impl EmptyState {
    fn none_available() -> Self {
        EmptyState::NoneAvailable {
            message: "No projects available yet.",
        }
    }

    fn no_match() -> Self {
        EmptyState::NoMatch {
            message: "No Projects Found",
            reset: ResetDefaults::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkPageResponse {
    pub projects: Vec<ProjectCard>,
    pub technologies: Vec<String>,
    pub selected_tech: String,
    pub sort_by: SortKey,
    pub total: usize,
    pub matched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

pub struct WorkHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> WorkHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        WorkHandler { project_repo }
    }

    /// Builds the work page listing: load everything, derive the distinct
    /// technologies set, then filter and sort into the visible view.
    ///
    /// A data-store failure is swallowed on purpose: the page degrades to
    /// the "no projects available" state rather than surfacing an error.
    pub async fn list_projects(&self, selected_tech: &str, sort_by: SortKey) -> WorkPageResponse {
        let projects = match self.project_repo.list_projects().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Project fetch failed, serving empty listing: {}", e);
                Vec::new()
            }
        };

        let technologies = distinct_technologies(&projects);
        let total = projects.len();

        let view = derive_view(projects, selected_tech, sort_by);
        let matched = view.len();

        let empty_state = if total == 0 {
            Some(EmptyState::none_available())
        } else if matched == 0 {
            Some(EmptyState::no_match())
        } else {
            None
        };

        WorkPageResponse {
            projects: view.iter().map(ProjectCard::from).collect(),
            technologies,
            selected_tech: selected_tech.to_string(),
            sort_by,
            total,
            matched,
            empty_state,
        }
    }
}

/// Alphabetized union of every tag across all loaded projects.
pub fn distinct_technologies(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.technologies.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The derived view: filter first, then a stable sort, so ties keep their
/// input (creation-time) order.
pub fn derive_view(projects: Vec<Project>, selected_tech: &str, sort_by: SortKey) -> Vec<Project> {
    let mut view: Vec<Project> = projects
        .into_iter()
        .filter(|p| {
            selected_tech == ALL_TECHNOLOGIES || p.technologies.iter().any(|t| t == selected_tech)
        })
        .collect();

    match sort_by {
        SortKey::DateDesc => view.sort_by(|a, b| b.sort_date().cmp(&a.sort_date())),
        SortKey::DateAsc => view.sort_by(|a, b| a.sort_date().cmp(&b.sort_date())),
        SortKey::Title => view.sort_by_key(|p| p.title.to_lowercase()),
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::repositories::project::MockProjectRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn project(title: &str, technologies: &[&str], date: Option<&str>) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            image_url: None,
            project_date: date.map(|d| d.to_string()),
            featured: false,
            github_url: None,
            created_at: Utc::now(),
        }
    }

    fn titles(view: &[Project]) -> Vec<&str> {
        view.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn filter_all_keeps_every_project() {
        let projects = vec![
            project("A", &["Go"], None),
            project("B", &[], None),
            project("C", &["Rust"], None),
        ];

        let view = derive_view(projects.clone(), ALL_TECHNOLOGIES, SortKey::Title);
        assert_eq!(view.len(), projects.len());
    }

    #[test]
    fn filtered_projects_all_carry_the_tag() {
        let projects = vec![
            project("A", &["Go"], None),
            project("B", &["Rust", "Go"], None),
            project("C", &["TS"], None),
        ];

        let view = derive_view(projects, "Go", SortKey::Title);
        assert!(view.iter().all(|p| p.technologies.iter().any(|t| t == "Go")));
    }

    #[test]
    fn go_filter_scenario_preserves_relative_order() {
        // No dates at all, so the date-desc sort cannot reorder anything
        // and the input order must survive.
        let projects = vec![
            project("First", &["Go"], None),
            project("Second", &["Rust", "Go"], None),
            project("Third", &["TS"], None),
        ];

        let view = derive_view(projects, "Go", SortKey::DateDesc);
        assert_eq!(titles(&view), vec!["First", "Second"]);
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let projects = vec![project("A", &["rust"], None)];

        let view = derive_view(projects, "Rust", SortKey::Title);
        assert!(view.is_empty());
    }

    #[test]
    fn date_desc_puts_newest_first_and_undated_last() {
        let projects = vec![
            project("Old", &[], Some("2020-01-01")),
            project("Undated", &[], None),
            project("New", &[], Some("2024-06-15")),
        ];

        let view = derive_view(projects, ALL_TECHNOLOGIES, SortKey::DateDesc);
        assert_eq!(titles(&view), vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn date_asc_puts_undated_first() {
        let projects = vec![
            project("Old", &[], Some("2020-01-01")),
            project("Undated", &[], None),
            project("New", &[], Some("2024-06-15")),
        ];

        let view = derive_view(projects, ALL_TECHNOLOGIES, SortKey::DateAsc);
        assert_eq!(titles(&view), vec!["Undated", "Old", "New"]);
    }

    #[test]
    fn title_sort_is_caseless_and_idempotent() {
        let projects = vec![
            project("banana", &[], None),
            project("Apple", &[], None),
            project("cherry", &[], None),
        ];

        let once = derive_view(projects, ALL_TECHNOLOGIES, SortKey::Title);
        assert_eq!(titles(&once), vec!["Apple", "banana", "cherry"]);

        let twice = derive_view(once.clone(), ALL_TECHNOLOGIES, SortKey::Title);
        assert_eq!(titles(&twice), titles(&once));
    }

    #[test]
    fn distinct_technologies_is_an_alphabetized_union() {
        let projects = vec![
            project("A", &["Rust", "Go"], None),
            project("B", &["Go", "Go", "TS"], None),
        ];

        assert_eq!(distinct_technologies(&projects), vec!["Go", "Rust", "TS"]);
    }

    #[test]
    fn sort_key_parsing_covers_the_three_orders() {
        assert_eq!("date-desc".parse::<SortKey>(), Ok(SortKey::DateDesc));
        assert_eq!("date-asc".parse::<SortKey>(), Ok(SortKey::DateAsc));
        assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
        assert!("newest".parse::<SortKey>().is_err());
    }

    #[tokio::test]
    async fn zero_projects_reports_none_available() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects().returning(|| Ok(Vec::new()));

        let handler = WorkHandler::new(repo);
        let page = handler.list_projects(ALL_TECHNOLOGIES, SortKey::default()).await;

        assert_eq!(page.total, 0);
        assert_eq!(page.empty_state, Some(EmptyState::none_available()));
    }

    #[tokio::test]
    async fn unmatched_filter_reports_no_match_with_reset_defaults() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .returning(|| Ok(vec![project("Only", &["Rust"], None)]));

        let handler = WorkHandler::new(repo);
        let page = handler.list_projects("COBOL", SortKey::default()).await;

        assert_eq!(page.total, 1);
        assert_eq!(page.matched, 0);
        match page.empty_state {
            Some(EmptyState::NoMatch { reset, .. }) => {
                assert_eq!(reset.selected_tech, "all");
                assert_eq!(reset.sort_by, SortKey::DateDesc);
            }
            other => panic!("expected no_match state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty_listing() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .returning(|| Err(AppError::InternalError("connection refused".into())));

        let handler = WorkHandler::new(repo);
        let page = handler.list_projects(ALL_TECHNOLOGIES, SortKey::default()).await;

        assert_eq!(page.total, 0);
        assert!(page.projects.is_empty());
        assert_eq!(page.empty_state, Some(EmptyState::none_available()));
    }
}
