use crate::domain::news::content::ContentBlock;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Slug,
    Content,
}

impl FormField {
    pub const PATHS: &'static [&'static str] = &["title", "slug", "content"];

    /// Accepts bare names and `data.`-prefixed paths as the editor posts them.
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.strip_prefix("data.").unwrap_or(path);
        match name {
            "title" => Some(FormField::Title),
            "slug" => Some(FormField::Slug),
            "content" => Some(FormField::Content),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Slug => "slug",
            FormField::Content => "content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Title(String),
    Slug(String),
    Content(Vec<ContentBlock>),
}

impl FieldChange {
    pub fn field(&self) -> FormField {
        match self {
            FieldChange::Title(_) => FormField::Title,
            FieldChange::Slug(_) => FormField::Slug,
            FieldChange::Content(_) => FormField::Content,
        }
    }
}

/// Field assignments delivered together and applied as one transition, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBatch {
    changes: Vec<FieldChange>,
}

impl FormBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.with(FieldChange::Title(title.into()))
    }

    pub fn slug(self, slug: impl Into<String>) -> Self {
        self.with(FieldChange::Slug(slug.into()))
    }

    pub fn content(self, content: Vec<ContentBlock>) -> Self {
        self.with(FieldChange::Content(content))
    }

    pub fn with(mut self, change: FieldChange) -> Self {
        self.push(change);
        self
    }

    pub fn push(&mut self, change: FieldChange) {
        self.changes.push(change);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn touches(&self, field: FormField) -> bool {
        self.changes.iter().any(|change| change.field() == field)
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.changes.iter().map(|c| c.field().name()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldChange> {
        self.changes.iter()
    }
}

impl IntoIterator for FormBatch {
    type Item = FieldChange;
    type IntoIter = std::vec::IntoIter<FieldChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl FromIterator<FieldChange> for FormBatch {
    fn from_iter<T: IntoIterator<Item = FieldChange>>(iter: T) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}

/// Reads `{"data.title": "...", "data.content": [...]}` keeping document order.
/// A `null` text field clears it.
impl<'de> Deserialize<'de> for FormBatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BatchVisitor;

        impl<'de> Visitor<'de> for BatchVisitor {
            type Value = FormBatch;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of form field paths to new values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<FormBatch, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut batch = FormBatch::new();
                while let Some(path) = map.next_key::<String>()? {
                    let field = FormField::from_path(&path)
                        .ok_or_else(|| <A::Error as de::Error>::unknown_field(&path, FormField::PATHS))?;
                    let change = match field {
                        FormField::Title => {
                            FieldChange::Title(map.next_value::<Option<String>>()?.unwrap_or_default())
                        }
                        FormField::Slug => {
                            FieldChange::Slug(map.next_value::<Option<String>>()?.unwrap_or_default())
                        }
                        FormField::Content => FieldChange::Content(
                            map.next_value::<Option<Vec<ContentBlock>>>()?
                                .unwrap_or_default(),
                        ),
                    };
                    batch.push(change);
                }
                Ok(batch)
            }
        }

        deserializer.deserialize_map(BatchVisitor)
    }
}
