use async_trait::async_trait;

use crate::{
    entities::about_me::AboutContent, errors::AppError, repositories::sqlx_repo::SqlxAboutMeRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Retrieves the singleton "about me" row, if one exists.
    async fn get_about_content(&self) -> Result<Option<AboutContent>, AppError>;
}

impl SqlxAboutMeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAboutMeRepo { pool }
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutMeRepo {
    async fn get_about_content(&self) -> Result<Option<AboutContent>, AppError> {
        let content = sqlx::query_as::<_, AboutContent>(
            r#"
            SELECT intro_text, paragraph_two, paragraph_three, skills
            FROM about_me
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(content)
    }
}
