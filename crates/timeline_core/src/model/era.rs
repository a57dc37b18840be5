//! Era groups and the events they contain.
//!
//! # Invariants
//! - `Era::events` keeps payload order; rendering and layout never re-sort it.
//! - Text fields are display strings. Numeric payload values are stringified
//!   so search sees the same text a reader does; `null` reads as empty.

use crate::model::payload::{display_text, null_as_default, optional_display_text};
use serde::{Deserialize, Serialize};

/// Named chronological group rendered as one layout section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    /// Serialized as `era` to match the payload schema.
    #[serde(rename = "era", default, deserialize_with = "display_text")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

impl Era {
    pub fn new(name: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            name: name.into(),
            events,
        }
    }
}

/// One timeline entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Category key. Events whose key has no category are never rendered.
    #[serde(default, deserialize_with = "display_text")]
    pub category: String,
    #[serde(default, deserialize_with = "display_text")]
    pub year: String,
    #[serde(default, deserialize_with = "display_text")]
    pub title: String,
    /// Serialized as `desc` to match the payload schema.
    #[serde(rename = "desc", default, deserialize_with = "display_text")]
    pub description: String,
    #[serde(
        rename = "moreInfo",
        default,
        deserialize_with = "optional_display_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub more_info: Option<String>,
}

impl Event {
    pub fn new(
        category: impl Into<String>,
        year: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            year: year.into(),
            title: title.into(),
            description: description.into(),
            more_info: None,
        }
    }

    pub fn with_more_info(mut self, more_info: impl Into<String>) -> Self {
        self.more_info = Some(more_info.into());
        self
    }
}
