use actix_web::web;

use crate::handlers::contact_me::submit_contact_message;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_contact_message);
}
