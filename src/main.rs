use newsdesk::application::{
    commands::news::CreateNewsCommand,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use newsdesk::config::AppConfig;
use newsdesk::domain::news::{FormBatch, FormState, NewsReadRepository, NewsWriteRepository};
use newsdesk::infrastructure::{
    repositories::InMemoryNewsRepository, seed, time::SystemClock, util::DefaultSlugGenerator,
};
use newsdesk::presentation::driver::Driver;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let repo = Arc::new(InMemoryNewsRepository::new());
    let news_write_repo: Arc<dyn NewsWriteRepository> = repo.clone();
    let news_read_repo: Arc<dyn NewsReadRepository> = repo.clone();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&news_write_repo),
        Arc::clone(&news_read_repo),
        Arc::clone(&clock),
        Arc::clone(&slugger),
        config.per_page(),
    ));

    if let Some(path) = config.seed_file() {
        let forms = seed::read_seed_forms(path).await?;
        let count = load_seed(&services, forms).await?;
        tracing::info!(count, path = %path.display(), "seeded news");
    }

    let mut driver = Driver::new(Arc::clone(&services));
    let handled = driver
        .run(BufReader::new(io::stdin()), io::stdout())
        .await
        .context("driver loop failed")?;
    tracing::info!(handled, "input closed");

    Ok(())
}

/// Seed forms go through a form session so a missing slug is derived from the title.
async fn load_seed(services: &ApplicationServices, forms: Vec<FormState>) -> Result<usize> {
    let mut count = 0;
    for form in forms {
        let mut session = services.news_forms.create_form();
        let mut batch = FormBatch::new().title(form.title).content(form.content);
        if !form.slug.is_empty() {
            batch = batch.slug(form.slug);
        }
        session.apply_update(batch);

        let created = services
            .news_commands
            .create_news(CreateNewsCommand {
                form: session.into_state(),
            })
            .await?;
        tracing::debug!(news_id = created.id, slug = %created.slug, "seed record");
        count += 1;
    }
    Ok(count)
}

fn init_tracing(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    // stdout carries driver responses, so logs go to stderr.
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
