//! Catalog record types.

use serde::Deserialize;

/// A unique record identifier.
pub type RecordId = String;

/// Icon shown when a record has no tags or its first tag is unmapped.
pub const DEFAULT_ICON: &str = "📖";

/// Genre shown when a record has no tags.
pub const DEFAULT_GENRE: &str = "General";

/// Icon for each known leading tag.
pub const TAG_ICONS: &[(&str, &str)] = &[
    ("python", "🐍"),
    ("web", "🌐"),
    ("a11y", "♿"),
    ("ui", "🎨"),
    ("javascript", "📜"),
    ("ds", "🔗"),
    ("sql", "🗄️"),
    ("db", "💾"),
    ("frontend", "💻"),
    ("architecture", "🏗️"),
    ("ml", "🤖"),
    ("notes", "📝"),
    ("git", "🌳"),
    ("version-control", "🔀"),
    ("design", "✨"),
    ("systems", "⚙️"),
    ("network", "🌐"),
    ("basics", "📚"),
    ("linux", "🐧"),
    ("cli", "⌨️"),
];

/// Look up the icon for a leading tag.
pub fn icon_for_tag(tag: Option<&str>) -> &'static str {
    tag.filter(|t| !t.is_empty())
        .and_then(|t| TAG_ICONS.iter().find(|(name, _)| *name == t))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Derive the display genre from a leading tag.
pub fn genre_for_tag(tag: Option<&str>) -> String {
    match tag {
        Some(t) if !t.is_empty() => t.to_uppercase(),
        _ => DEFAULT_GENRE.to_string(),
    }
}

/// A record as it appears in the catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A display-ready catalog record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub genre: String,
    pub icon: &'static str,
    pub description: String,
}

impl Record {
    /// Normalize a raw record, computing genre, icon and description.
    pub fn from_raw(raw: RawRecord) -> Self {
        let first = raw.tags.first().map(String::as_str);
        let genre = genre_for_tag(first);
        let icon = icon_for_tag(first);
        let description = format!(
            "{} by {} ({}). Tags: {}.",
            raw.title,
            raw.author,
            raw.year,
            raw.tags.join(", ")
        );

        Self {
            id: raw.id,
            title: raw.title,
            author: raw.author,
            year: raw.year,
            tags: raw.tags,
            genre,
            icon,
            description,
        }
    }

    /// Whether the tag list contains exactly this tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self::from_raw(raw)
    }
}
