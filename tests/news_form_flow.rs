mod support;

use newsdesk::application::commands::news::{CreateNewsCommand, UpdateNewsCommand};
use newsdesk::application::error::ApplicationError;
use newsdesk::application::queries::news::GetNewsByIdQuery;
use newsdesk::domain::news::{ContentBlock, FormBatch, HeadingLevel};
use pretty_assertions::assert_eq;
use support::{NewsFormBuilder, fixed_now, test_app};

#[tokio::test]
async fn slug_follows_title_through_batched_update() {
    let app = test_app();
    let mut form = app.services.news_forms.create_form();

    let state = form.apply_update(FormBatch::new().title("Hello"));
    assert_eq!(state.slug, "hello");

    // title and content arrive together, as the lazy block editor sends them
    let batch: FormBatch = serde_json::from_value(serde_json::json!({
        "data.title": "Hello World",
        "data.content": [
            { "data": { "content": "LEEEROY JENKINS!" }, "type": "paragraph" }
        ]
    }))
    .unwrap();
    let state = form.apply_update(batch);
    assert_eq!(state.slug, "hello-world");

    let created = app
        .services
        .news_commands
        .create_news(CreateNewsCommand {
            form: form.into_state(),
        })
        .await
        .unwrap();
    assert_eq!(created.slug, "hello-world");
    assert_eq!(created.content, vec![ContentBlock::paragraph("LEEEROY JENKINS!")]);
    assert_eq!(created.created_at, fixed_now());
}

#[tokio::test]
async fn manual_slug_is_persisted_as_typed() {
    let app = test_app();
    let mut form = app.services.news_forms.create_form();
    form.apply_update(FormBatch::new().title("Hello"));
    form.apply_update(FormBatch::new().slug("custom-slug"));
    form.apply_update(FormBatch::new().title("Hello There"));

    let created = app
        .services
        .news_commands
        .create_news(CreateNewsCommand {
            form: form.into_state(),
        })
        .await
        .unwrap();
    assert_eq!(created.title, "Hello There");
    assert_eq!(created.slug, "custom-slug");
}

#[tokio::test]
async fn invalid_submit_reports_every_field() {
    let app = test_app();
    let form = NewsFormBuilder::new()
        .title("")
        .slug("")
        .content(vec![ContentBlock::heading(" ", HeadingLevel::H2)])
        .build();

    let err = app
        .services
        .news_commands
        .create_news(CreateNewsCommand { form })
        .await
        .unwrap_err();

    let fields: Vec<_> = err
        .field_errors()
        .unwrap()
        .iter()
        .map(|e| e.field.clone())
        .collect();
    assert_eq!(fields, vec!["title", "slug", "content.0.content"]);
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn duplicate_slug_is_rejected() {
    let app = test_app();
    NewsFormBuilder::new().slug("taken").create(&app).await;

    let err = app
        .services
        .news_commands
        .create_news(CreateNewsCommand {
            form: NewsFormBuilder::new().title("Other").slug("taken").build(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn edit_flow_hydrates_and_updates() {
    let app = test_app();
    let created = NewsFormBuilder::new()
        .title("Launch")
        .slug("launch")
        .create(&app)
        .await;

    let mut form = app.services.news_forms.edit_form(created.id).await.unwrap();
    assert_eq!(form.state().title, "Launch");

    form.apply_update(
        FormBatch::new()
            .title("Launch Week")
            .content(vec![ContentBlock::heading("Schedule", HeadingLevel::H2)]),
    );
    assert_eq!(form.state().slug, "launch-week");

    let id = i64::from(form.record_id().unwrap());
    let updated = app
        .services
        .news_commands
        .update_news(UpdateNewsCommand {
            id,
            form: form.into_state(),
        })
        .await
        .unwrap();
    assert_eq!(updated.slug, "launch-week");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let fetched = app
        .services
        .news_queries
        .get_news(GetNewsByIdQuery { id })
        .await
        .unwrap();
    assert_eq!(fetched.title, "Launch Week");
}

#[tokio::test]
async fn unchanged_submit_keeps_timestamp() {
    let app = test_app();
    let created = NewsFormBuilder::new().create(&app).await;
    let form = app.services.news_forms.edit_form(created.id).await.unwrap();

    let saved = app
        .services
        .news_commands
        .update_news(UpdateNewsCommand {
            id: created.id,
            form: form.into_state(),
        })
        .await
        .unwrap();
    assert_eq!(saved.updated_at, created.updated_at);
}

#[tokio::test]
async fn editing_missing_record_is_not_found() {
    let app = test_app();
    let err = app.services.news_forms.edit_form(404).await.err().unwrap();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
