mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, db, email, utils};
pub use interfaces::{handlers, repositories, routes};

use crate::email::relay::HttpEmailRelay;
use crate::repositories::sqlx_repo::{SqlxAboutMeRepo, SqlxContactMeRepo, SqlxProjectRepo};
use crate::use_cases::{about::AboutHandler, contact::ContactHandler, work::WorkHandler};

pub struct AppState {
    pub work_handler: AppWorkHandler,
    pub about_handler: AppAboutHandler,
    pub contact_handler: AppContactHandler,
}

pub type AppWorkHandler = WorkHandler<SqlxProjectRepo>;
pub type AppAboutHandler = AboutHandler<SqlxAboutMeRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactMeRepo, HttpEmailRelay>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let work_handler = WorkHandler::new(SqlxProjectRepo::new(pool.clone()));
        let about_handler = AboutHandler::new(SqlxAboutMeRepo::new(pool.clone()));
        let contact_handler = ContactHandler::new(
            SqlxContactMeRepo::new(pool),
            HttpEmailRelay::new(config),
        );

        AppState {
            work_handler,
            about_handler,
            contact_handler,
        }
    }
}
