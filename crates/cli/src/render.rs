use notebook_store::Note;
use notebook_summarizer::ScoredSentence;

pub(crate) const NO_MATCHES: &str = "No matching notes";
pub(crate) const NO_CONTENT: &str = "No content available to summarize";

/// `- <title>[ [tags: a, b]]` followed by the indented content line.
pub(crate) fn format_note(note: &Note) -> String {
    let tags = if note.tags.is_empty() {
        String::new()
    } else {
        format!(" [tags: {}]", note.tags.join(", "))
    };
    format!("- {}{}\n  {}", note.title, tags, note.content)
}

pub(crate) fn render_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(format_note)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_summary(sentences: &[String]) -> String {
    let mut out = String::from("Summary:");
    for sentence in sentences {
        out.push_str("\n- ");
        out.push_str(sentence);
    }
    out
}

pub(crate) fn render_ranking(ranked: &[ScoredSentence]) -> String {
    let mut out = String::from("Ranking:");
    for sentence in ranked {
        out.push_str(&format!(
            "\n  #{} {:.4} {}",
            sentence.index, sentence.score, sentence.text
        ));
    }
    out
}
