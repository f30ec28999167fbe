use crate::{
    entities::about_me::{AboutContent, AboutResponse, ContentSource},
    repositories::about::AboutRepository,
};

pub struct AboutHandler<R>
where
    R: AboutRepository,
{
    pub about_repo: R,
}

impl<R> AboutHandler<R>
where
    R: AboutRepository,
{
    pub fn new(about_repo: R) -> Self {
        AboutHandler { about_repo }
    }

    /// Returns the stored "about me" record, or the hardcoded fallback when
    /// the row is absent or the fetch fails. This never errors: the page
    /// must render something either way.
    pub async fn get_about_content(&self) -> AboutResponse {
        match self.about_repo.get_about_content().await {
            Ok(Some(content)) => AboutResponse {
                source: ContentSource::Database,
                content,
            },
            Ok(None) => AboutResponse {
                source: ContentSource::Fallback,
                content: AboutContent::fallback(),
            },
            Err(e) => {
                tracing::warn!("About content fetch failed, using fallback: {}", e);
                AboutResponse {
                    source: ContentSource::Fallback,
                    content: AboutContent::fallback(),
                }
            }
        }
    }
}
