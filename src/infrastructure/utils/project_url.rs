use slug::slugify;

use crate::entities::project::Project;

/// Canonical detail-page path for a project. Titles slugify cleanly in the
/// common case; a title with no sluggable characters falls back to the id.
pub fn project_detail_path(project: &Project) -> String {
    let slug = slugify(&project.title);
    if slug.is_empty() {
        format!("/work/{}", project.id)
    } else {
        format!("/work/{slug}")
    }
}
