pub mod about_me;
pub mod contact_me;
pub mod home;
pub mod session;
pub mod system;
pub mod work;
