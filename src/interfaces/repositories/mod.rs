pub mod about;
pub mod contact_me;
pub mod project;
pub mod sqlx_repo;
