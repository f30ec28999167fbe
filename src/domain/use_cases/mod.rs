pub mod about;
pub mod contact;
pub mod work;
