// src/domain/news/form/session.rs
use std::sync::Arc;

use tracing::debug;

use super::{FieldChange, FormBatch, FormState};
use crate::application::ports::util::SlugGenerator;
use crate::domain::news::entity::News;
use crate::domain::news::value_objects::NewsId;

/// One editing session over a news form.
///
/// The slug follows the title for as long as it still equals the slug of the
/// title it was derived from. Once the user types a different slug the session
/// stops rewriting it, until the user brings it back in line with the title.
///
/// The comparison is made against the title as it stood before the whole batch,
/// captured once per batch. Re-capturing it per field would compare the slug
/// with a title that already holds the new value, and the slug would silently
/// stop following as soon as `title` and `content` arrive together.
pub struct FormSession {
    state: FormState,
    record_id: Option<NewsId>,
    previous_title: String,
    slugger: Arc<dyn SlugGenerator>,
}

impl FormSession {
    /// Empty form for the create flow.
    pub fn create(slugger: Arc<dyn SlugGenerator>) -> Self {
        Self::with_state(FormState::default(), None, slugger)
    }

    /// Form hydrated from a stored record for the edit flow.
    pub fn edit(news: &News, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self::with_state(FormState::from(news), Some(news.id), slugger)
    }

    pub fn with_state(
        state: FormState,
        record_id: Option<NewsId>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let previous_title = state.title.clone();
        Self {
            state,
            record_id,
            previous_title,
            slugger,
        }
    }

    /// Apply `batch` as one transition and return the resulting state.
    ///
    /// Assignments land in batch order, the last one to a field wins. A slug
    /// assigned explicitly anywhere in the batch is kept over a derived one.
    pub fn apply_update(&mut self, batch: FormBatch) -> &FormState {
        self.previous_title = self.state.title.clone();
        let tracking = self.is_tracking(&self.previous_title);

        let mut title_assigned = false;
        let mut slug_assigned = false;
        for change in batch {
            match change {
                FieldChange::Title(title) => {
                    self.state.title = title;
                    title_assigned = true;
                }
                FieldChange::Slug(slug) => {
                    self.state.slug = slug;
                    slug_assigned = true;
                }
                FieldChange::Content(content) => self.state.content = content,
            }
        }

        if title_assigned && tracking && !slug_assigned {
            self.state.slug = self.slugger.slugify(&self.state.title);
            debug!(slug = %self.state.slug, "slug follows title");
        } else if title_assigned {
            debug!(slug = %self.state.slug, tracking, slug_assigned, "slug kept");
        }

        &self.state
    }

    /// Whether the current slug is the one `title` would produce.
    pub fn is_tracking(&self, title: &str) -> bool {
        self.state.slug == self.slugger.slugify(title)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn record_id(&self) -> Option<NewsId> {
        self.record_id
    }

    /// Title before the most recently applied batch.
    pub fn previous_title(&self) -> &str {
        &self.previous_title
    }

    pub fn into_state(self) -> FormState {
        self.state
    }
}
