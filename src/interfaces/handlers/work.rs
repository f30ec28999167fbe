use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::{AppState, constants::ALL_TECHNOLOGIES, use_cases::work::SortKey};

#[derive(Debug, Deserialize)]
pub struct WorkQuery {
    tech: Option<String>,
    sort: Option<String>,
}

/// The work page listing. Unknown `tech`/`sort` values quietly fall back to
/// the defaults ("all", newest first) instead of erroring.
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<WorkQuery>,
) -> impl Responder {
    let selected_tech = query.tech.as_deref().unwrap_or(ALL_TECHNOLOGIES);
    let sort_by = query
        .sort
        .as_deref()
        .and_then(|s| s.parse::<SortKey>().ok())
        .unwrap_or_default();

    let page = state.work_handler.list_projects(selected_tech, sort_by).await;

    HttpResponse::Ok().json(page)
}
