//! Note Entity
//!
//! A sticky note: a freeform titled text block with a display color.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// The fixed palette a note can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Blue,
    Green,
    Pink,
    Purple,
    Orange,
}

impl NoteColor {
    /// All palette entries, in display order
    pub const ALL: [NoteColor; 6] = [
        NoteColor::Yellow,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Pink,
        NoteColor::Purple,
        NoteColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Pink => "pink",
            NoteColor::Purple => "purple",
            NoteColor::Orange => "orange",
        }
    }

    /// Parse a runtime color name. Names outside the palette yield `None`;
    /// callers treat that as a rejected request, not a default.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "yellow" => Some(NoteColor::Yellow),
            "blue" => Some(NoteColor::Blue),
            "green" => Some(NoteColor::Green),
            "pink" => Some(NoteColor::Pink),
            "purple" => Some(NoteColor::Purple),
            "orange" => Some(NoteColor::Orange),
            _ => None,
        }
    }
}

/// A sticky note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier (UUID v4, immutable)
    pub id: String,
    /// Note title
    pub title: String,
    /// Note body text
    pub text: String,
    /// Display color
    pub color: NoteColor,
    /// Creation timestamp, set exactly once
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with a fresh identifier
    pub fn new(title: impl Into<String>, text: impl Into<String>, color: NoteColor) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            text: text.into(),
            color,
            created_at: Utc::now(),
        }
    }
}

impl Entity for Note {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
