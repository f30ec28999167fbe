use actix_web::web;

use crate::handlers::home::home;

mod about;
mod contact;
mod json_error;
mod session;
mod system;
mod work;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(work::config_routes)
            .configure(about::config_routes)
            .configure(contact::config_routes)
            .configure(session::config_routes)
            .configure(system::config_routes),
    );

    cfg.configure(json_error::config_routes);
}
