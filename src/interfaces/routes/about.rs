use actix_web::web;

use crate::handlers::about_me::get_about_content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_about_content);
}
