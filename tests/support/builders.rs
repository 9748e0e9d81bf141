// tests/support/builders.rs
use newsdesk::application::commands::news::CreateNewsCommand;
use newsdesk::application::dto::NewsDto;
use newsdesk::domain::news::{ContentBlock, FormState};

use super::mocks::TestApp;

pub struct NewsFormBuilder {
    title: String,
    slug: String,
    content: Vec<ContentBlock>,
}

impl NewsFormBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test News".into(),
            slug: "test-news".into(),
            content: vec![ContentBlock::paragraph("Test body")],
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: Vec<ContentBlock>) -> Self {
        self.content = content;
        self
    }

    pub fn build(self) -> FormState {
        FormState::new(self.title, self.slug).with_content(self.content)
    }

    pub async fn create(self, app: &TestApp) -> NewsDto {
        app.services
            .news_commands
            .create_news(CreateNewsCommand { form: self.build() })
            .await
            .expect("failed to create news in test setup")
    }
}
