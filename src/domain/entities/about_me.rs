use serde::{Deserialize, Serialize};

/// The singleton "about me" record. At most one row is consumed; the page
/// never blocks on its absence (see [`AboutContent::fallback`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct AboutContent {
    pub intro_text: String,
    pub paragraph_two: String,
    pub paragraph_three: String,
    pub skills: Vec<String>,
}

impl AboutContent {
    /// Hardcoded copy used when the data store yields no row or fails.
    pub fn fallback() -> Self {
        AboutContent {
            intro_text: "Hi! I'm a developer passionate about web development and digital design."
                .to_string(),
            paragraph_two: "I'm currently building my skills in modern web technologies. I love \
                            creating functional websites that solve real problems and provide \
                            great user experiences."
                .to_string(),
            paragraph_three: "When I'm not coding, you can find me exploring new design trends, \
                              learning new frameworks, or working on personal projects that \
                              challenge me to grow as a developer."
                .to_string(),
            skills: vec![
                "Git".into(),
                "PostgreSQL".into(),
                "React".into(),
                "Rust".into(),
                "Tailwind CSS".into(),
                "TypeScript".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Database,
    Fallback,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AboutResponse {
    pub source: ContentSource,
    #[serde(flatten)]
    pub content: AboutContent,
}
