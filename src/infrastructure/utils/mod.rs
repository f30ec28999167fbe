pub mod image_url;
pub mod project_url;
pub mod truncate;
