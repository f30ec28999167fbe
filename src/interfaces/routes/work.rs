use actix_web::web;

use crate::handlers::work::list_projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_projects);
}
