pub mod about_me;
pub mod contact_me;
pub mod project;
