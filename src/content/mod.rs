// SPDX-License-Identifier: MPL-2.0
//! Static content feed: the photos, message cards, and copy the experience
//! displays.
//!
//! Content is a TOML document loaded once at startup and read-only
//! thereafter. A built-in document is embedded so the application always has
//! something to show; a user-supplied file (CLI `--content` or the
//! `[content]` config section) replaces it wholesale. A file that fails to
//! parse or validate degrades to the built-in document with a warning, never
//! an abort.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Embedded fallback content, compiled into the binary.
const BUILTIN: &str = include_str!("../../assets/content.toml");

/// Accent color assigned to a message card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Pink,
    Purple,
}

/// One photo of the session. `url` is a filesystem path; the bitmap is
/// loaded asynchronously after startup and missing files degrade to a
/// placeholder card.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: u32,
    pub url: String,
    pub caption: String,
}

/// One tappable message box.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageCard {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub color: Accent,
}

/// All free copy shown by the scenes. Every field has an embedded default so
/// a partial `[text]` section is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextContent {
    pub title: String,
    pub tagline: String,
    pub sound_hint: String,
    pub intro_first: String,
    pub intro_second: String,
    pub growing_kicker: String,
    pub growing_heading: String,
    pub growing_name: String,
    pub messages_heading: String,
    pub messages_hint: String,
    pub bond_line: String,
    pub farewell_heading: String,
    pub farewell: String,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            title: "A Special Gift".into(),
            tagline: "A special gift just for you".into(),
            sound_hint: "Ensure sound is on for the surprise".into(),
            intro_first: "This is for you I made...".into(),
            intro_second: "Let's start in...".into(),
            growing_kicker: "Especially for you".into(),
            growing_heading: "Happy Birthday".into(),
            growing_name: String::new(),
            messages_heading: "A few promises".into(),
            messages_hint: "Tap each box to unlock a promise".into(),
            bond_line: "This is my message,".into(),
            farewell_heading: "Always Beside You".into(),
            farewell: "Happy birthday. Always smile.".into(),
        }
    }
}

/// Raw file shape. `photo`/`message` are arrays of tables so the TOML reads
/// naturally as `[[photo]]` / `[[message]]` blocks.
#[derive(Debug, Deserialize)]
struct ContentFile {
    video: Option<PathBuf>,
    #[serde(default)]
    text: TextContent,
    #[serde(default, rename = "photo")]
    photos: Vec<Photo>,
    #[serde(default, rename = "message")]
    messages: Vec<MessageCard>,
}

/// Validated, immutable content for one process lifetime.
#[derive(Debug, Clone)]
pub struct Content {
    pub text: TextContent,
    pub photos: Vec<Photo>,
    pub messages: Vec<MessageCard>,
    /// Media source for the reveal stage, relative to the working directory.
    pub video: PathBuf,
}

impl Content {
    /// The embedded default content. The built-in document is validated by a
    /// test, so parsing it cannot fail at runtime.
    pub fn builtin() -> Self {
        parse(BUILTIN).expect("embedded content must be valid")
    }

    /// Looks up a message card by id.
    pub fn message(&self, id: u32) -> Option<&MessageCard> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Looks up a photo by id.
    pub fn photo(&self, id: u32) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// The photo displayed on the message box at position `index`,
    /// mirroring the card order. `None` when there are fewer photos than
    /// boxes.
    pub fn photo_for_box(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Ids of every known message, in declaration order.
    pub fn message_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.messages.iter().map(|m| m.id)
    }
}

/// Loads content from `path`, falling back to the built-in document.
///
/// Returns the content plus an optional warning describing why a configured
/// file was not used.
pub fn load(path: Option<&Path>) -> (Content, Option<String>) {
    let Some(path) = path else {
        return (Content::builtin(), None);
    };

    match std::fs::read_to_string(path) {
        Ok(text) => match parse(&text) {
            Ok(content) => (content, None),
            Err(err) => (
                Content::builtin(),
                Some(format!("ignoring {}: {}", path.display(), err)),
            ),
        },
        Err(err) => (
            Content::builtin(),
            Some(format!("cannot read {}: {}", path.display(), err)),
        ),
    }
}

/// Parses and validates a content document.
fn parse(text: &str) -> Result<Content> {
    let file: ContentFile = toml::from_str(text)?;

    ensure_unique_ids("photo", file.photos.iter().map(|p| p.id))?;
    ensure_unique_ids("message", file.messages.iter().map(|m| m.id))?;

    Ok(Content {
        text: file.text,
        photos: file.photos,
        messages: file.messages,
        video: file.video.unwrap_or_else(|| PathBuf::from("assets/surprise.gif")),
    })
}

fn ensure_unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::Content(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}
