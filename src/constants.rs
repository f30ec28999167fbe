use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Image served when a project has no usable image URL.
pub const PLACEHOLDER_IMAGE: &str = "/images/2b-green.png";

/// Character limit for card descriptions.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Sentinel filter value meaning "no technology filter applied".
pub const ALL_TECHNOLOGIES: &str = "all";
