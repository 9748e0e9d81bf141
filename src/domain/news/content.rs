use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawHeadingLevel")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

/// Levels arrive either as the select option key (`"h2"`) or as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeadingLevel {
    Number(u8),
    Key(String),
}

impl TryFrom<RawHeadingLevel> for HeadingLevel {
    type Error = DomainError;

    fn try_from(raw: RawHeadingLevel) -> Result<Self, Self::Error> {
        match raw {
            RawHeadingLevel::Number(n) => HeadingLevel::from_number(n),
            RawHeadingLevel::Key(key) => HeadingLevel::parse(&key),
        }
    }
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn from_number(level: u8) -> DomainResult<Self> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            other => Err(DomainError::Validation(format!(
                "heading level must be between 1 and 6, got {other}"
            ))),
        }
    }

    pub fn parse(key: &str) -> DomainResult<Self> {
        let trimmed = key.trim();
        let digits = trimmed
            .strip_prefix('h')
            .or_else(|| trimmed.strip_prefix('H'))
            .unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .map_err(|_| DomainError::Validation(format!("unknown heading level: {key}")))
            .and_then(HeadingLevel::from_number)
    }

    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "Heading 1",
            HeadingLevel::H2 => "Heading 2",
            HeadingLevel::H3 => "Heading 3",
            HeadingLevel::H4 => "Heading 4",
            HeadingLevel::H5 => "Heading 5",
            HeadingLevel::H6 => "Heading 6",
        }
    }

    /// `(key, label)` pairs offered by the level select.
    pub fn options() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::ALL.into_iter().map(|level| (level.key(), level.label()))
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One entry of the block editor. Encoded the way the editor posts it:
/// `{"type": "paragraph", "data": {"content": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        #[serde(rename = "content", default)]
        text: String,
        level: HeadingLevel,
    },
    Paragraph {
        #[serde(rename = "content", default)]
        text: String,
    },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>, level: HeadingLevel) -> Self {
        ContentBlock::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => text,
        }
    }

    /// Reason the block would be rejected on submit, if any.
    pub fn check(&self) -> Option<String> {
        if self.text().trim().is_empty() {
            return Some(format!("{} text is required", self.kind()));
        }
        None
    }
}
