use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match on title, content or any tag.
    ///
    /// `lower_query` must already be lowercase.
    fn matches(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self.content.to_lowercase().contains(lower_query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(lower_query))
    }
}

/// An ordered collection of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    notes: Vec<Note>,
}

impl Notebook {
    #[must_use]
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes matching `query` in insertion order. An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let lower_query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.matches(&lower_query))
            .collect()
    }
}

/// RFC 3339 on write; also reads offset-less ISO-8601 as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|err| format!("invalid created_at {raw:?}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        Note::new(title, content, tags.iter().map(|t| t.to_string()).collect())
    }

    fn sample() -> Notebook {
        Notebook::new(vec![
            note("Groceries", "Buy milk and eggs", &["home"]),
            note("Rust", "Ownership rules the borrow checker", &["Work", "lang"]),
            note("Trip", "Pack the camera", &[]),
        ])
    }

    fn titles(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.title.clone()).collect()
    }

    #[test]
    fn test_search_matches_title_content_and_tags() {
        let book = sample();
        assert_eq!(titles(&book.search("rust")), vec!["Rust"]);
        assert_eq!(titles(&book.search("MILK")), vec!["Groceries"]);
        assert_eq!(titles(&book.search("work")), vec!["Rust"]);
        assert!(book.search("nothing-here").is_empty());
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let book = sample();
        assert_eq!(titles(&book.search("the")), vec!["Rust", "Trip"]);
        assert_eq!(book.search("").len(), 3);
    }

    #[test]
    fn test_note_json_shape() {
        let mut note = note("Title", "Body", &["a"]);
        note.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["title"], "Title");
        assert_eq!(value["tags"][0], "a");
        assert_eq!(value["created_at"], "2024-05-01T09:30:00Z");
    }

    #[test]
    fn test_reads_offsetless_timestamps_and_missing_tags() {
        let raw = r#"{"title":"t","content":"c","created_at":"2024-05-01T09:30:00.250000"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert!(note.tags.is_empty());
        assert_eq!(
            note.created_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
                + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        assert!(timestamp::parse("yesterday").is_err());
        let raw = r#"{"title":"t","content":"c","created_at":"yesterday"}"#;
        assert!(serde_json::from_str::<Note>(raw).is_err());
    }

    #[test]
    fn test_notebook_defaults_to_empty() {
        let book: Notebook = serde_json::from_str("{}").unwrap();
        assert!(book.is_empty());
    }
}
