use actix_web::web;

use crate::handlers::session::session_status;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(session_status);
}
